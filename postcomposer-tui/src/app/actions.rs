//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use std::path::PathBuf;

use crossterm::event::{KeyEvent, MouseEvent};
use libpostcomposer::identity::Session;
use libpostcomposer::service::media::MediaCatalog;
use libpostcomposer::{MediaItem, Platform};

use super::shell::Page;

/// Actions that trigger state transitions
///
/// Actions are plain data describing what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying actions to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (when enabled)
    Mouse(MouseEvent),

    /// Periodic tick for animations
    Tick,

    /// Terminal resize event (columns, rows)
    Resize(u16, u16),

    // === Shell ===
    /// Navigate to a different page
    NavigateTo(Page),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    ToggleMobileMenu,

    ToggleTheme,

    ToggleNotifications,

    // === Service results ===
    /// Identity provider resolved the session
    SessionLoaded(Session),

    /// Directory record for the signed-in user exists
    UserEnsured { email: String },

    /// Media catalog loaded from the store
    CatalogLoaded(MediaCatalog),

    /// A file was imported into the media library
    MediaImported(MediaItem),

    // === Composer ===
    SelectPlatformTab(Platform),

    /// Full text of the active tab's editor after an edit
    PreviewContentEdited(String),

    /// Remove the active tab's image
    RemoveImage,

    OpenMediaPicker,

    CloseMediaPicker,

    // === Media library (page or picker, whichever has focus) ===
    MediaSearchInput(char),

    MediaSearchBackspace,

    MediaCycleFilter,

    /// Move the card cursor by the given offset
    MediaMoveCursor(isize),

    /// Activate the highlighted card
    MediaActivate,

    OpenUploadPrompt,

    UploadPromptInput(char),

    UploadPromptBackspace,

    /// Submit the typed path for import
    SubmitUpload,

    CancelUpload,

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Side effects requested by the reducer
///
/// The event loop drains these after each action and runs them through the
/// service handle; results come back as actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ImportMedia(PathBuf),
}
