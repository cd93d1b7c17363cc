use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of release a branch is preparing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchCategory {
    Release,
    Feature,
    BugFix,
    /// Anything not recognised; only the build number moves
    Unknown,
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BranchCategory::Release => "release",
            BranchCategory::Feature => "feature",
            BranchCategory::BugFix => "bugfix",
            BranchCategory::Unknown => "build",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for BranchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "release" | "major" => Ok(BranchCategory::Release),
            "feature" | "minor" => Ok(BranchCategory::Feature),
            "bugfix" | "fix" | "patch" => Ok(BranchCategory::BugFix),
            "build" | "unknown" => Ok(BranchCategory::Unknown),
            other => Err(format!(
                "unknown branch type '{}' (expected release, feature, bugfix or build)",
                other
            )),
        }
    }
}

/// Keyword table mapping branch names to categories.
///
/// A keyword matches a branch when the lowercased name equals it, or starts
/// with it followed by one of `/`, `-`, `_`, `.`. Rows are tried in order:
/// release, feature, bugfix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRules {
    #[serde(default = "default_release_keywords")]
    pub release: Vec<String>,

    #[serde(default = "default_feature_keywords")]
    pub feature: Vec<String>,

    #[serde(default = "default_bugfix_keywords")]
    pub bugfix: Vec<String>,
}

fn default_release_keywords() -> Vec<String> {
    vec![
        "main".to_string(),
        "master".to_string(),
        "release".to_string(),
        "releases".to_string(),
    ]
}

fn default_feature_keywords() -> Vec<String> {
    vec![
        "feature".to_string(),
        "features".to_string(),
        "feat".to_string(),
    ]
}

fn default_bugfix_keywords() -> Vec<String> {
    vec![
        "bugfix".to_string(),
        "fix".to_string(),
        "hotfix".to_string(),
        "bug".to_string(),
    ]
}

impl Default for BranchRules {
    fn default() -> Self {
        BranchRules {
            release: default_release_keywords(),
            feature: default_feature_keywords(),
            bugfix: default_bugfix_keywords(),
        }
    }
}

const SEPARATORS: [char; 4] = ['/', '-', '_', '.'];

impl BranchRules {
    /// Classify a branch name. Never fails; unmatched names are `Unknown`.
    pub fn classify(&self, branch_name: &str) -> BranchCategory {
        let name = branch_name.trim().to_lowercase();
        let table = [
            (BranchCategory::Release, &self.release),
            (BranchCategory::Feature, &self.feature),
            (BranchCategory::BugFix, &self.bugfix),
        ];

        table
            .into_iter()
            .find(|(_, keywords)| keywords.iter().any(|k| keyword_matches(&name, k)))
            .map(|(category, _)| category)
            .unwrap_or(BranchCategory::Unknown)
    }
}

fn keyword_matches(name: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    match name.strip_prefix(keyword.as_str()) {
        Some("") => true,
        Some(rest) => rest.starts_with(SEPARATORS),
        None => false,
    }
}

/// Classify a branch name with the default rule table
pub fn classify(branch_name: &str) -> BranchCategory {
    BranchRules::default().classify(branch_name)
}
