//! Service layer adapter for TUI
//!
//! Bridges the async `ComposerService` and identity provider to the
//! synchronous event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle` owns a tokio runtime and the shared service
//! - Each operation spawns a task on the runtime and returns immediately
//! - Results come back as [`Action`]s over a crossbeam channel that the event
//!   loop drains every iteration
//!
//! # Example
//!
//! ```no_run
//! use postcomposer_tui::services::ServiceHandle;
//!
//! # fn example() -> postcomposer_tui::error::Result<()> {
//! let config = libpostcomposer::Config::load_or_default()?;
//! let services = ServiceHandle::new(&config)?;
//!
//! services.load_session();
//! services.load_catalog();
//!
//! // In event loop, apply results
//! while let Ok(action) = services.results().try_recv() {
//!     // state = reduce(state, action);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libpostcomposer::identity::{ConfiguredIdentity, IdentityProvider, SessionUser};
use libpostcomposer::service::ComposerService;
use libpostcomposer::Config;

use crate::app::{Action, Effect};
use crate::error::Result;

/// Service handle for TUI operations
pub struct ServiceHandle {
    service: Arc<ComposerService>,
    identity: Arc<dyn IdentityProvider>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<Action>,
    rx: Receiver<Action>,
}

impl ServiceHandle {
    /// Create a service handle from configuration
    ///
    /// Opens the database and uses the `[identity]` section as the identity
    /// provider.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tokio runtime cannot be created
    /// - The database cannot be opened or migrated
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let service = runtime.block_on(ComposerService::from_config(config))?;
        let identity = Arc::new(ConfiguredIdentity::new(config.identity.clone()));

        Ok(Self::from_parts(runtime, service, identity))
    }

    /// Assemble a handle from already-built parts
    pub fn from_parts(
        runtime: tokio::runtime::Runtime,
        service: ComposerService,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let (tx, rx) = unbounded();
        Self {
            service: Arc::new(service),
            identity,
            runtime,
            tx,
            rx,
        }
    }

    /// Channel carrying results of spawned operations
    pub fn results(&self) -> &Receiver<Action> {
        &self.rx
    }

    pub fn service(&self) -> &ComposerService {
        &self.service
    }

    /// Resolve the identity-provider session
    ///
    /// Sends `SessionLoaded` on success. A failure leaves the session in its
    /// loading state and is reported as an error.
    pub fn load_session(&self) {
        let identity = Arc::clone(&self.identity);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let action = match identity.current_session().await {
                Ok(session) => Action::SessionLoaded(session),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load session");
                    Action::ShowError(format!("Failed to load session: {}", e))
                }
            };
            let _ = tx.send(action);
        });
    }

    /// Make sure the signed-in user has a directory record
    pub fn ensure_user(&self, user: SessionUser) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let action = match service.users().ensure_user(&user).await {
                Ok(record) => Action::UserEnsured {
                    email: record.email,
                },
                Err(e) => {
                    tracing::error!(error = %e, "Failed to initialize directory user");
                    Action::ShowError(format!("Failed to initialize user: {}", e))
                }
            };
            let _ = tx.send(action);
        });
    }

    /// Load the media catalog from the store
    pub fn load_catalog(&self) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let action = match service.media().load_catalog().await {
                Ok(catalog) => Action::CatalogLoaded(catalog),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load media catalog");
                    Action::ShowError(format!("Failed to load media: {}", e))
                }
            };
            let _ = tx.send(action);
        });
    }

    /// Import a local file into the media library
    pub fn import_file(&self, path: PathBuf) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let action = match service.media().import_file(&path).await {
                Ok(item) => Action::MediaImported(item),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Media import failed");
                    Action::ShowError(format!("Import failed: {}", e))
                }
            };
            let _ = tx.send(action);
        });
    }

    /// Run an effect requested by the reducer
    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::ImportMedia(path) => self.import_file(path),
        }
    }
}
