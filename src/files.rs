//! Sources of the list of files to bump.
//!
//! The planner takes any [FileListSupplier], so the command line, the config
//! file, a project manifest or a test closure can all decide which files are
//! rewritten.

use crate::error::{BumperError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Produces the ordered list of files to bump
pub trait FileListSupplier {
    fn files(&self) -> Result<Vec<PathBuf>>;
}

impl<F> FileListSupplier for F
where
    F: Fn() -> Result<Vec<PathBuf>>,
{
    fn files(&self) -> Result<Vec<PathBuf>> {
        self()
    }
}

/// A fixed list of files, e.g. from the command line or `bumper.toml`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfiguredFiles {
    paths: Vec<PathBuf>,
}

impl ConfiguredFiles {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        ConfiguredFiles {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FileListSupplier for ConfiguredFiles {
    fn files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.paths.clone())
    }
}

/// Reads the file list from a JSON manifest's `extra.bump` array.
///
/// ```json
/// { "extra": { "bump": ["plugin.php", "readme.txt"] } }
/// ```
///
/// Entries are resolved relative to the manifest's directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestFiles {
    manifest: PathBuf,
}

impl ManifestFiles {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        ManifestFiles {
            manifest: manifest.into(),
        }
    }
}

impl FileListSupplier for ManifestFiles {
    fn files(&self) -> Result<Vec<PathBuf>> {
        let contents = fs::read_to_string(&self.manifest).map_err(|e| {
            BumperError::no_files(format!(
                "cannot read manifest '{}': {}",
                self.manifest.display(),
                e
            ))
        })?;

        let manifest: Value = serde_json::from_str(&contents).map_err(|e| {
            BumperError::config(format!(
                "manifest '{}' is not valid JSON: {}",
                self.manifest.display(),
                e
            ))
        })?;

        let entries = manifest
            .pointer("/extra/bump")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                BumperError::no_files(format!(
                    "'{}' has no extra.bump array",
                    self.manifest.display()
                ))
            })?;

        let base = self.manifest.parent().unwrap_or_else(|| Path::new(""));
        let mut paths = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = entry.as_str().ok_or_else(|| {
                BumperError::no_files(format!(
                    "extra.bump in '{}' must only contain strings",
                    self.manifest.display()
                ))
            })?;
            paths.push(base.join(path));
        }

        debug!(manifest = %self.manifest.display(), count = paths.len(), "read file list");
        Ok(paths)
    }
}
