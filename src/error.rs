use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for bumper operations
#[derive(Error, Debug)]
pub enum BumperError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid branch: {0}")]
    InvalidBranch(String),

    #[error("No files configured for bumping: {0}")]
    NoFilesConfigured(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plan is not bumpable ({0} warning(s))")]
    NotBumpable(usize),

    #[error("Failed to rewrite {0} file(s)")]
    Mutation(usize),
}

/// Convenience type alias for Results in bumper
pub type Result<T> = std::result::Result<T, BumperError>;

impl BumperError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumperError::InvalidVersion(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        BumperError::InvalidBranch(msg.into())
    }

    /// Create a "no files" error with context
    pub fn no_files(msg: impl Into<String>) -> Self {
        BumperError::NoFilesConfigured(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumperError::Config(msg.into())
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumperError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts a run before any file is touched
    pub fn is_pre_mutation(&self) -> bool {
        matches!(
            self,
            BumperError::InvalidVersion(_)
                | BumperError::InvalidBranch(_)
                | BumperError::NoFilesConfigured(_)
                | BumperError::Config(_)
                | BumperError::NotBumpable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumperError::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BumperError::io("plugin.php", io_err);
        let msg = err.to_string();
        assert!(msg.contains("plugin.php"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumperError::version("x"), "Invalid version"),
            (BumperError::branch("x"), "Invalid branch"),
            (BumperError::no_files("x"), "No files configured"),
            (BumperError::config("x"), "Configuration error"),
            (BumperError::NotBumpable(2), "Plan is not bumpable"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_pre_mutation_errors() {
        assert!(BumperError::version("x").is_pre_mutation());
        assert!(BumperError::branch("x").is_pre_mutation());
        assert!(BumperError::no_files("x").is_pre_mutation());
        assert!(!BumperError::Mutation(1).is_pre_mutation());
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!BumperError::io("a", io_err).is_pre_mutation());
    }
}
