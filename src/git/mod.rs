//! Git operations abstraction layer
//!
//! The version engine only needs two narrow views of a repository, expressed
//! as traits so the planner and the orchestration layer can run against a
//! real repository or a mock:
//!
//! - [RepositoryInfo]: read the version tags and the current branch
//! - [RepositoryWriter]: stage the working tree and record a commit
//!
//! Implementations:
//!
//! - [repository::Git2Repository]: backed by the `git2` crate
//! - [mock::MockRepository]: in-memory, for tests
//!
//! ```rust
//! # use bumper::git::{MockRepository, RepositoryInfo};
//! let mut repo = MockRepository::new();
//! repo.set_branch("feature/login");
//! repo.add_tag("v1.2.0");
//! assert_eq!(repo.list_version_tags().unwrap(), vec!["v1.2.0".to_string()]);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only repository information the planner depends on
pub trait RepositoryInfo {
    /// Version tags of the repository, newest first.
    ///
    /// Only tags shaped like a semantic version (optionally prefixed with
    /// `v`) are returned.
    fn list_version_tags(&self) -> Result<Vec<String>>;

    /// Name of the checked-out branch.
    ///
    /// # Returns
    /// * `Ok(String)` - Short branch name, e.g. `feature/login`
    /// * `Err` - If no branch can be resolved (detached HEAD, broken HEAD)
    fn current_branch_name(&self) -> Result<String>;
}

/// Repository mutations used to record a bump.
///
/// Failures are reported to the caller and never retried.
pub trait RepositoryWriter {
    /// Stage every change in the working tree
    fn stage_all(&self) -> Result<()>;

    /// Commit the staged changes with the given message
    fn commit(&self, message: &str) -> Result<()>;
}
