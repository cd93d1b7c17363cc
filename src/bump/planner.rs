use crate::domain::{next_version, scan, BranchCategory, BranchRules, Version};
use crate::error::{BumperError, Result};
use crate::files::FileListSupplier;
use crate::git::RepositoryInfo;
use crate::warning::BumpWarning;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A target file and the version found in it
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// `None` when no version declaration was found or the file was unreadable
    pub detected_version: Option<Version>,
}

impl FileEntry {
    /// Read and scan a file. Read failures are tolerated and yield no version.
    pub fn scan(path: PathBuf) -> Self {
        let detected_version = match fs::read_to_string(&path) {
            Ok(contents) => scan(&contents),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read file");
                None
            }
        };
        debug!(path = %path.display(), version = ?detected_version, "scanned file");

        FileEntry {
            path,
            detected_version,
        }
    }
}

/// Everything decided before any file is touched
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPlan {
    pub category: BranchCategory,
    pub current: Version,
    pub next: Version,
    pub entries: Vec<FileEntry>,
    pub warnings: Vec<BumpWarning>,
    /// Gate for mutation; false when any warning was raised
    pub bumpable: bool,
}

/// Check every entry against the next version.
///
/// An entry is a problem when it has no version or its version is not
/// strictly older than `next`. All entries are checked; nothing short-circuits.
pub fn validate(entries: &[FileEntry], next: &Version) -> Vec<BumpWarning> {
    let mut warnings = Vec::new();

    for entry in entries {
        match entry.detected_version {
            None => warnings.push(BumpWarning::VersionNotFound {
                path: entry.path.clone(),
            }),
            Some(found) if found >= *next => warnings.push(BumpWarning::NotOlder {
                path: entry.path.clone(),
                found,
                next: *next,
            }),
            Some(_) => {}
        }
    }

    for warning in &warnings {
        debug!(path = %warning.path().display(), "{}", warning);
    }
    warnings
}

/// Build a plan for the given files from a known current version.
///
/// # Returns
/// * `Ok(BumpPlan)` - The plan; check `bumpable` before executing it
/// * `Err(NoFilesConfigured)` - If `files` is empty
/// * `Err(InvalidVersion)` - If `current` cannot be bumped for `category`
pub fn plan(files: Vec<PathBuf>, current: Version, category: BranchCategory) -> Result<BumpPlan> {
    if files.is_empty() {
        return Err(BumperError::no_files("the file list is empty"));
    }

    let entries: Vec<FileEntry> = files.into_iter().map(FileEntry::scan).collect();
    let next = next_version(&current, category)?;
    let warnings = validate(&entries, &next);
    let bumpable = warnings.is_empty();

    debug!(%current, %next, %category, bumpable, "computed plan");

    Ok(BumpPlan {
        category,
        current,
        next,
        entries,
        warnings,
        bumpable,
    })
}

/// Computes bump plans from repository state and a file list supplier
pub struct BumpPlanner<'a> {
    repo: &'a dyn RepositoryInfo,
    files: &'a dyn FileListSupplier,
    rules: BranchRules,
    initial_version: Version,
}

impl<'a> BumpPlanner<'a> {
    /// Create a planner using the default branch rules and `1.0.0` as the
    /// version of an untagged repository
    pub fn new(repo: &'a dyn RepositoryInfo, files: &'a dyn FileListSupplier) -> Self {
        BumpPlanner {
            repo,
            files,
            rules: BranchRules::default(),
            initial_version: Version::default(),
        }
    }

    pub fn with_rules(mut self, rules: BranchRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_initial_version(mut self, version: Version) -> Self {
        self.initial_version = version;
        self
    }

    /// Category of the current branch, unless overridden.
    ///
    /// The branch is only consulted without an override; an unresolvable or
    /// empty branch name is `InvalidBranch`.
    pub fn resolve_category(
        &self,
        category_override: Option<BranchCategory>,
    ) -> Result<BranchCategory> {
        if let Some(category) = category_override {
            return Ok(category);
        }

        let branch = self.repo.current_branch_name()?;
        if branch.trim().is_empty() {
            return Err(BumperError::branch("the current branch has no name"));
        }

        let category = self.rules.classify(&branch);
        debug!(branch = %branch, %category, "classified branch");
        Ok(category)
    }

    /// Version of the newest tag, or the initial version when untagged
    pub fn current_version(&self) -> Result<Version> {
        match self.repo.list_version_tags()?.first() {
            Some(tag) => Version::parse(tag),
            None => Ok(self.initial_version),
        }
    }

    /// Classify the branch, read the current version, scan every file and
    /// validate them against the next version
    pub fn compute_plan(&self, category_override: Option<BranchCategory>) -> Result<BumpPlan> {
        let category = self.resolve_category(category_override)?;
        let current = self.current_version()?;
        let files = self.files.files()?;

        plan(files, current, category)
    }
}
