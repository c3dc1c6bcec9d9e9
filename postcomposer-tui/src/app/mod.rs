//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//! - Shell, preview, and media library view models the state is built from

pub mod actions;
pub mod event;
pub mod media_library;
pub mod preview;
pub mod reducer;
pub mod shell;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Effect};
pub use reducer::reduce;
pub use shell::Page;
pub use state::{AppState, ComposerState, StatusBarState, UiConfig};
