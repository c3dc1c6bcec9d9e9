//! PostComposer - multi-platform social post composer
//!
//! This library provides the core of PostComposer: the user directory, the
//! media catalog, configuration, logging, and the identity collaborator
//! consumed by the HTTP API and the terminal interface.

pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod logging;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use error::{ComposerError, Result};
pub use types::{ImageAttachment, MediaFilter, MediaItem, MediaType, Platform, User};
