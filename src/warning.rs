use crate::domain::Version;
use std::fmt;
use std::path::PathBuf;

/// Reasons a file cannot be bumped.
/// These are non-fatal: they are all collected and reported, and together
/// they mark the plan as not bumpable.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// No version declaration could be found in the file
    VersionNotFound { path: PathBuf },
    /// The file already declares a version at or beyond the next version
    NotOlder {
        path: PathBuf,
        found: Version,
        next: Version,
    },
}

impl BumpWarning {
    /// The file the warning is about
    pub fn path(&self) -> &PathBuf {
        match self {
            BumpWarning::VersionNotFound { path } | BumpWarning::NotOlder { path, .. } => path,
        }
    }
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::VersionNotFound { path } => {
                write!(f, "No version found in '{}'", path.display())
            }
            BumpWarning::NotOlder { path, found, next } => {
                write!(
                    f,
                    "'{}' is at version {} which is not older than {}",
                    path.display(),
                    found,
                    next
                )
            }
        }
    }
}
