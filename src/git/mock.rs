use crate::error::{BumperError, Result};
use crate::git::{RepositoryInfo, RepositoryWriter};
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    branch: Option<String>,
    tags: Vec<String>,
    staged: RefCell<bool>,
    commits: RefCell<Vec<String>>,
    fail_commit: bool,
}

impl MockRepository {
    /// Create a new empty mock repository with no branch and no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checked-out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = Some(branch.into());
    }

    /// Add a tag; tags added later are considered newer
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(0, name.into());
    }

    /// Make every subsequent commit fail
    pub fn fail_commits(&mut self) {
        self.fail_commit = true;
    }

    /// Whether `stage_all` has been called
    pub fn is_staged(&self) -> bool {
        *self.staged.borrow()
    }

    /// Messages of the commits recorded so far
    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }
}

impl RepositoryInfo for MockRepository {
    fn list_version_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn current_branch_name(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| BumperError::branch("no branch checked out"))
    }
}

impl RepositoryWriter for MockRepository {
    fn stage_all(&self) -> Result<()> {
        *self.staged.borrow_mut() = true;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if self.fail_commit {
            return Err(BumperError::Git(git2::Error::from_str("commit rejected")));
        }
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }
}
