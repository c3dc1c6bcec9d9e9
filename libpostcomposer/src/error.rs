//! Error types for PostComposer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComposerError>;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ComposerError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ComposerError::InvalidInput(_) => 3,
            ComposerError::NotFound(_) => 2,
            ComposerError::Config(_) => 1,
            ComposerError::Database(_) => 1,
        }
    }

    /// Whether the error was caused by the caller rather than by the system
    ///
    /// Client errors carry a message that is safe to show verbatim; everything
    /// else must be reported as an opaque failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ComposerError::InvalidInput(_) | ComposerError::NotFound(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database operation failed: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = ComposerError::InvalidInput("Email is required".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_not_found() {
        let error = ComposerError::NotFound("media item abc".to_string());
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("database.path".to_string());
        let error = ComposerError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_database_error() {
        let db_error = DbError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));
        let error = ComposerError::Database(db_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = ComposerError::InvalidInput("Email is required".to_string());
        assert_eq!(format!("{}", error), "Invalid input: Email is required");
    }

    #[test]
    fn test_error_message_formatting_config() {
        let config_error = ConfigError::MissingField("identity.email".to_string());
        let error = ComposerError::Config(config_error);
        assert_eq!(
            format!("{}", error),
            "Configuration error: Missing required field: identity.email"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ComposerError::InvalidInput("x".to_string()).is_client_error());
        assert!(ComposerError::NotFound("x".to_string()).is_client_error());

        let db_error = DbError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!ComposerError::Database(db_error).is_client_error());
        assert!(!ComposerError::Config(ConfigError::MissingField("x".to_string())).is_client_error());
    }

    #[test]
    fn test_error_conversion_from_db_error() {
        let db_error = DbError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "test",
        ));
        let composer_error: ComposerError = db_error.into();

        match composer_error {
            ComposerError::Database(_) => {}
            _ => panic!("Expected ComposerError::Database"),
        }
    }

    #[test]
    fn test_config_error_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let config_error = ConfigError::ReadError(io_error);
        assert!(format!("{}", config_error).contains("Failed to read config file"));
    }
}
