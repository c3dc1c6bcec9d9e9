//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libpostcomposer::identity::Session;
use libpostcomposer::service::media::MediaCatalog;

use super::actions::Effect;
use super::media_library::MediaLibraryView;
use super::preview::{PlatformDrafts, PreviewTabs};
use super::shell::{Document, ShellState};

/// Root application state
///
/// This is the single source of truth for the entire application. It is not
/// `Clone`: the shell owns the scroll lock of an open mobile menu.
#[derive(Debug)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Ticks since start, drives placeholder animation
    pub tick: u64,

    pub shell: ShellState,

    /// Identity-provider session
    pub session: Session,

    /// Media shared by the library page and the picker
    pub catalog: MediaCatalog,

    /// Image library page
    pub library: MediaLibraryView,

    pub composer: ComposerState,

    /// Read-only preview shown on the approvals page
    pub approvals_preview: PreviewTabs,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// Effects for the event loop to run
    pub effects: Vec<Effect>,

    /// UI configuration
    pub config: UiConfig,
}

/// Composer page state
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    pub preview: PreviewTabs,

    /// Per-platform content owned by this page
    pub drafts: PlatformDrafts,

    /// Media picker view while it is open
    pub picker: Option<MediaLibraryView>,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_shell(ShellState::default())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("POSTCOMPOSER_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("POSTCOMPOSER_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// State over a given document and mobile breakpoint
    pub fn with_document(document: Document, mobile_breakpoint: u32) -> Self {
        Self::with_shell(ShellState::new(document, mobile_breakpoint))
    }

    fn with_shell(shell: ShellState) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            tick: 0,
            shell,
            session: Session::loading(),
            catalog: MediaCatalog::default(),
            library: MediaLibraryView::new(),
            composer: ComposerState {
                preview: PreviewTabs::editable(),
                ..ComposerState::default()
            },
            approvals_preview: PreviewTabs::new().read_only(),
            status: StatusBarState::default(),
            error: None,
            effects: Vec::new(),
            config: UiConfig::default(),
        }
    }

    /// Any overlay that captures input is open
    pub fn has_overlay(&self) -> bool {
        self.help_visible || self.error.is_some() || self.shell.notifications.panel_open
    }

    /// The media view that currently receives library input, if any
    pub fn focused_media_view(&self) -> Option<&MediaLibraryView> {
        use super::shell::Page;

        match self.shell.current_page {
            Page::ComposerLibrary => self.composer.picker.as_ref(),
            Page::ImageLibrary => Some(&self.library),
            _ => None,
        }
    }

    /// Whether keystrokes go to the active platform's editor
    pub fn composer_accepts_text(&self) -> bool {
        use super::shell::Page;

        self.shell.current_page == Page::ComposerLibrary
            && !self.has_overlay()
            && !self.shell.is_menu_open()
            && self.composer.picker.is_none()
            && self
                .composer
                .preview
                .is_editable(self.composer.preview.active_tab())
    }
}
