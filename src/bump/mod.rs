//! Bump planning and execution
//!
//! - `planner` - scans the target files and decides whether a bump is safe
//! - `mutator` - rewrites (or simulates rewriting) the files of a safe plan

pub mod mutator;
pub mod planner;

pub use mutator::{apply, FileChange, MutationReport};
pub use planner::{plan, validate, BumpPlan, BumpPlanner, FileEntry};

use crate::domain::BranchCategory;
use crate::error::{BumperError, Result};
use crate::files::FileListSupplier;
use crate::git::RepositoryInfo;

/// Compute a plan with the default branch rules and initial version
pub fn compute_plan(
    repo: &dyn RepositoryInfo,
    files: &dyn FileListSupplier,
    category_override: Option<BranchCategory>,
) -> Result<BumpPlan> {
    BumpPlanner::new(repo, files).compute_plan(category_override)
}

/// Execute a plan.
///
/// A plan that is not bumpable is refused here and never reaches the mutator.
///
/// # Returns
/// * `Ok(MutationReport)` - Per-file changes and failures
/// * `Err(NotBumpable)` - If the plan failed validation
pub fn execute_plan(plan: &BumpPlan, simulate: bool) -> Result<MutationReport> {
    if !plan.bumpable {
        return Err(BumperError::NotBumpable(plan.warnings.len()));
    }
    Ok(apply(plan, simulate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;
    use crate::files::ConfiguredFiles;
    use crate::git::MockRepository;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_refuses_unbumpable_plan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "version: 1.1.0\n").unwrap();

        let plan = plan(vec![path.clone()], Version::new(1, 0, 0), BranchCategory::Feature).unwrap();
        let err = execute_plan(&plan, false).unwrap_err();

        assert!(matches!(err, BumperError::NotBumpable(1)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "version: 1.1.0\n");
    }

    #[test]
    fn test_compute_and_execute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, "{\n  \"version\": \"2.5.0\"\n}\n").unwrap();

        let mut repo = MockRepository::new();
        repo.set_branch("release/3.0");
        repo.add_tag("2.5.0");
        let files = ConfiguredFiles::new([path.clone()]);

        let plan = compute_plan(&repo, &files, None).unwrap();
        assert_eq!(plan.next, Version::new(3, 0, 0));

        let report = execute_plan(&plan, false).unwrap();
        assert!(report.is_complete());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"version\": \"3.0.0\"\n}\n"
        );
    }
}
