use crate::domain::{BranchRules, Version};
use crate::error::{BumperError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for bumper.
///
/// Contains the target files, the branch classification table and commit behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Explicit list of files to bump. When empty, the manifest is used.
    #[serde(default)]
    pub files: Vec<PathBuf>,

    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    #[serde(default)]
    pub branches: BranchRules,

    #[serde(default)]
    pub commit: CommitConfig,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("composer.json")
}

fn default_initial_version() -> String {
    "1.0.0".to_string()
}

fn default_commit_message() -> String {
    "Bump version to {version}".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for the commit recorded after a bump
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Commit message template; `{version}` is replaced by the next version
    #[serde(default = "default_commit_message")]
    pub message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        CommitConfig {
            enabled: true,
            message: default_commit_message(),
        }
    }
}

impl CommitConfig {
    /// Render the commit message for a version
    pub fn message_for(&self, version: &Version) -> String {
        self.message.replace("{version}", &version.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: Vec::new(),
            manifest: default_manifest(),
            initial_version: default_initial_version(),
            branches: BranchRules::default(),
            commit: CommitConfig::default(),
        }
    }
}

impl Config {
    /// The version assumed when the repository has no version tag yet
    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Same as [load_config_in] with the current directory.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    load_config_in(config_path.map(Path::new), Path::new("."))
}

/// Loads configuration for a project directory or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumper.toml` in `dir`
/// 3. `bumper.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config_in(config_path: Option<&Path>, dir: &Path) -> Result<Config> {
    let local = dir.join("bumper.toml");
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("bumper.toml");
        if config_path.exists() {
            config_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| BumperError::io(&path, e))?;
    toml::from_str(&config_str)
        .map_err(|e| BumperError::config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.files.is_empty());
        assert_eq!(config.manifest, PathBuf::from("composer.json"));
        assert_eq!(config.initial_version().unwrap(), Version::new(1, 0, 0));
        assert!(config.commit.enabled);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("files = [\"plugin.php\"]").unwrap();
        assert_eq!(config.files, vec![PathBuf::from("plugin.php")]);
        assert_eq!(config.branches, BranchRules::default());
        assert_eq!(config.commit, CommitConfig::default());
    }

    #[test]
    fn test_commit_message_template() {
        let commit = CommitConfig {
            enabled: true,
            message: "chore(release): {version}".to_string(),
        };
        assert_eq!(
            commit.message_for(&Version::new(1, 1, 0)),
            "chore(release): 1.1.0"
        );
    }

    #[test]
    fn test_invalid_initial_version() {
        let config = Config {
            initial_version: "one".to_string(),
            ..Config::default()
        };
        assert!(config.initial_version().is_err());
    }
}
