//! Service layer for PostComposer
//!
//! This module provides a clean, testable API for business logic that can be
//! consumed by multiple interfaces (HTTP API, TUI) without code duplication.
//!
//! # Architecture
//!
//! `ComposerService` is the facade and main entry point, coordinating
//! specialized sub-services:
//!
//! - `UserService`: User directory (list/create)
//! - `MediaService`: Media persistence and catalog loading
//!
//! # Example
//!
//! ```no_run
//! use libpostcomposer::service::ComposerService;
//! use libpostcomposer::types::NewUser;
//!
//! # async fn example() -> libpostcomposer::Result<()> {
//! let service = ComposerService::new().await?;
//!
//! let user = service.users().create_user(NewUser {
//!     email: Some("ada@example.com".to_string()),
//!     ..NewUser::default()
//! }).await?;
//! println!("Created {}", user.id);
//! # Ok(())
//! # }
//! ```

pub mod media;
pub mod users;

use self::media::MediaService;
use self::users::UserService;
use crate::{Config, Database, Result};
use std::sync::Arc;

/// Main service facade that coordinates all sub-services
///
/// All sub-services share the same `Arc<Database>`.
pub struct ComposerService {
    db: Arc<Database>,
    users: UserService,
    media: MediaService,
}

impl ComposerService {
    /// Create a new service with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded
    /// - Database cannot be initialized
    /// - Database migrations fail
    pub async fn new() -> Result<Self> {
        let config = Config::load_or_default()?;
        Self::from_config(&config).await
    }

    /// Create a service with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let db_path = config.resolve_db_path();
        let db_path_str = db_path.to_str().ok_or_else(|| {
            crate::error::ComposerError::Config(crate::error::ConfigError::MissingField(
                "Invalid database path".to_string(),
            ))
        })?;
        let db = Database::new(db_path_str).await?;

        Ok(Self::from_database(db))
    }

    /// Create a service over an already-open database
    pub fn from_database(db: Database) -> Self {
        let db = Arc::new(db);
        let users = UserService::new(Arc::clone(&db));
        let media = MediaService::new(Arc::clone(&db));

        Self { db, users, media }
    }

    /// Access the database directly
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Access the user directory service
    pub fn users(&self) -> &UserService {
        &self.users
    }

    /// Access the media service
    pub fn media(&self) -> &MediaService {
        &self.media
    }
}
