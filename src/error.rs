//! Error types for fightmove.
//!
//! The matching core never fails: insufficient history and "no move matched" are
//! ordinary values. Errors only surface at the edges of the crate, when catalogs
//! and replay scripts are loaded, when a catalog is checked strictly, or when
//! the command line is malformed.

use crate::motion::CatalogIssue;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fightmove operations.
#[derive(Error, Debug)]
pub enum FightMoveError {
    /// File system related errors (permission denied, read failure, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog or script file not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration could not be parsed or is structurally invalid
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A catalog entry failed strict validation
    #[error("Malformed move '{name}': {issue}")]
    MalformedMove { name: String, issue: CatalogIssue },

    /// A move references a named motion that the catalog does not define
    #[error("Move '{referenced_by}' references unknown motion '{motion}'")]
    UnknownMotion {
        motion: String,
        referenced_by: String,
    },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for fightmove operations.
pub type Result<T> = std::result::Result<T, FightMoveError>;

impl FightMoveError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a MalformedMove error for the named catalog entry
    pub fn malformed_move(name: impl Into<String>, issue: CatalogIssue) -> Self {
        Self::MalformedMove {
            name: name.into(),
            issue,
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FightMoveError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let not_found = FightMoveError::FileNotFound {
            path: PathBuf::from("/tmp/moves.toml"),
        };
        assert_eq!(not_found.to_string(), "File not found: /tmp/moves.toml");

        let unknown = FightMoveError::UnknownMotion {
            motion: "dragon_punch".to_string(),
            referenced_by: "Uppercut".to_string(),
        };
        assert_eq!(
            unknown.to_string(),
            "Move 'Uppercut' references unknown motion 'dragon_punch'"
        );

        let malformed = FightMoveError::malformed_move("Fireball", CatalogIssue::EmptyOutputTag);
        assert_eq!(
            malformed.to_string(),
            "Malformed move 'Fireball': output tag is empty"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            FightMoveError::config("bad table"),
            FightMoveError::ConfigError { .. }
        ));
        assert!(matches!(
            FightMoveError::invalid_argument("--facing up"),
            FightMoveError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FightMoveError = io_err.into();

        match err {
            FightMoveError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
    }
}
