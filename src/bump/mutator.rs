use crate::bump::BumpPlan;
use crate::domain::Version;
use crate::error::{BumperError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// One file's version change, applied or simulated
#[derive(Debug, Clone, PartialEq)]
pub struct FileChange {
    pub path: PathBuf,
    pub from: Version,
    pub to: Version,
    /// False for simulated changes
    pub written: bool,
}

/// Outcome of applying a plan
#[derive(Debug, Default)]
pub struct MutationReport {
    pub changes: Vec<FileChange>,
    /// Files that could not be rewritten, with the reason
    pub failures: Vec<(PathBuf, BumperError)>,
}

impl MutationReport {
    /// True when every file was handled
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Replace every occurrence of `from` with `to` in a file.
///
/// The replacement is a plain substring replace over the whole file, not
/// just the line the version was found on. The scanner tolerates noise
/// around the digits (`1.00.0` reads as `1.0.0`), so the canonical text may
/// be absent; that is an error and the file is left as it was.
fn rewrite(path: &Path, from: &Version, to: &Version) -> Result<usize> {
    let contents = fs::read_to_string(path).map_err(|e| BumperError::io(path, e))?;
    let from_text = from.to_string();
    let occurrences = contents.matches(&from_text).count();
    if occurrences == 0 {
        return Err(BumperError::version(format!(
            "'{}' not found in '{}'",
            from_text,
            path.display()
        )));
    }

    let updated = contents.replace(&from_text, &to.to_string());
    fs::write(path, updated).map_err(|e| BumperError::io(path, e))?;
    Ok(occurrences)
}

/// Apply a plan to the files on disk, or only report it when `simulate` is set.
///
/// The plan is not re-validated; callers must only pass a bumpable plan.
/// A failing file is recorded and the remaining files are still processed.
/// Files already written are never rolled back.
pub fn apply(plan: &BumpPlan, simulate: bool) -> MutationReport {
    let mut report = MutationReport::default();

    for entry in &plan.entries {
        let Some(from) = entry.detected_version else {
            debug!(path = %entry.path.display(), "skipping file without version");
            continue;
        };

        if !simulate {
            match rewrite(&entry.path, &from, &plan.next) {
                Ok(occurrences) => {
                    debug!(path = %entry.path.display(), occurrences, "rewrote file");
                }
                Err(e) => {
                    error!(path = %entry.path.display(), error = %e, "failed to rewrite file");
                    report.failures.push((entry.path.clone(), e));
                    continue;
                }
            }
        }

        debug!(path = %entry.path.display(), %from, to = %plan.next, simulate, "bumped file");
        report.changes.push(FileChange {
            path: entry.path.clone(),
            from,
            to: plan.next,
            written: !simulate,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bump::planner::plan;
    use crate::domain::BranchCategory;
    use tempfile::TempDir;

    #[test]
    fn test_apply_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugin.php");
        fs::write(&path, "<?php\n/*\n * Version: 1.0.0\n */\n").unwrap();

        let plan = plan(vec![path.clone()], Version::new(1, 0, 0), BranchCategory::Feature).unwrap();
        let report = apply(&plan, false);

        assert!(report.is_complete());
        assert_eq!(
            report.changes,
            vec![FileChange {
                path: path.clone(),
                from: Version::new(1, 0, 0),
                to: Version::new(1, 1, 0),
                written: true,
            }]
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<?php\n/*\n * Version: 1.1.0\n */\n"
        );
    }

    #[test]
    fn test_simulate_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugin.php");
        fs::write(&path, "Version: 1.0.0\n").unwrap();

        let plan = plan(vec![path.clone()], Version::new(1, 0, 0), BranchCategory::Feature).unwrap();
        let report = apply(&plan, true);

        assert_eq!(fs::read_to_string(&path).unwrap(), "Version: 1.0.0\n");
        assert_eq!(report.changes.len(), 1);
        assert!(!report.changes[0].written);
        assert_eq!(report.changes[0].from.to_string(), "1.0.0");
        assert_eq!(report.changes[0].to.to_string(), "1.1.0");
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readme.txt");
        fs::write(
            &path,
            "Stable version: 1.0.0\nTested up to: 1.0.0\nSee also 11.0.0\n",
        )
        .unwrap();

        let plan = plan(vec![path.clone()], Version::new(1, 0, 0), BranchCategory::BugFix).unwrap();
        apply(&plan, false);

        // Unrelated mentions of the same text are replaced too, even inside a longer number
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Stable version: 1.0.1\nTested up to: 1.0.1\nSee also 11.0.1\n"
        );
    }

    #[test]
    fn test_read_failure_does_not_stop_other_files() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "version: 1.0.0\n").unwrap();
        let gone = dir.path().join("gone.txt");
        fs::write(&gone, "version: 1.0.0\n").unwrap();

        let plan = plan(
            vec![gone.clone(), good.clone()],
            Version::new(1, 0, 0),
            BranchCategory::Feature,
        )
        .unwrap();
        fs::remove_file(&gone).unwrap();

        let report = apply(&plan, false);
        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, gone);
        assert!(matches!(report.failures[0].1, BumperError::Io { .. }));
        assert_eq!(fs::read_to_string(&good).unwrap(), "version: 1.1.0\n");
    }

    #[test]
    fn test_missing_version_text_is_a_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugin.php");
        fs::write(&path, "Version: 1.00.0\n").unwrap();

        let plan = plan(vec![path.clone()], Version::new(1, 0, 0), BranchCategory::Feature).unwrap();
        assert!(plan.bumpable);

        let report = apply(&plan, false);
        assert!(!report.is_complete());
        assert!(report.changes.is_empty());
        assert_eq!(report.failures[0].0, path);
        assert!(matches!(report.failures[0].1, BumperError::InvalidVersion(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Version: 1.00.0\n");
    }

    #[test]
    fn test_write_failure_does_not_stop_other_files() {
        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked.txt");
        fs::write(&locked, "version: 1.0.0\n").unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "version: 1.0.0\n").unwrap();

        let mut permissions = fs::metadata(&locked).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&locked, permissions).unwrap();

        // Privileged users can write read-only files; nothing to check then
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            return;
        }

        let plan = plan(
            vec![locked.clone(), good.clone()],
            Version::new(1, 0, 0),
            BranchCategory::Feature,
        )
        .unwrap();

        let report = apply(&plan, false);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, locked);
        assert!(matches!(report.failures[0].1, BumperError::Io { .. }));
        assert_eq!(report.changes.len(), 1);
        assert_eq!(report.changes[0].path, good);
        assert_eq!(fs::read_to_string(&locked).unwrap(), "version: 1.0.0\n");
        assert_eq!(fs::read_to_string(&good).unwrap(), "version: 1.1.0\n");
    }
}
