use crate::domain::Version;
use crate::error::{BumperError, Result};
use git2::{ErrorCode, IndexAddOption, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository implementing the repository traits
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree, if the repository has one
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

/// Parse a tag name as a plain semantic version.
///
/// Accepts an optional `v`/`V` prefix. Pre-release tags and non-numeric build
/// metadata are rejected since they have no place in `major.minor.patch[+build]`.
fn tag_version(tag: &str) -> Option<Version> {
    let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');
    let parsed = semver::Version::parse(clean_tag).ok()?;

    if !parsed.pre.is_empty() {
        return None;
    }

    let build = if parsed.build.is_empty() {
        None
    } else {
        Some(parsed.build.as_str().parse::<u64>().ok()?)
    };

    Some(Version {
        major: parsed.major,
        minor: parsed.minor,
        patch: parsed.patch,
        build,
    })
}

impl super::RepositoryInfo for Git2Repository {
    fn list_version_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut versioned: Vec<(Version, String)> = tags
            .iter()
            .flatten()
            .filter_map(|name| tag_version(name).map(|v| (v, name.to_string())))
            .collect();

        versioned.sort_by(|a, b| b.0.cmp(&a.0));
        debug!(count = versioned.len(), "found version tags");

        Ok(versioned.into_iter().map(|(_, name)| name).collect())
    }

    fn current_branch_name(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Err(BumperError::branch("HEAD is detached"));
                }
                head.shorthand()
                    .map(|s| s.to_string())
                    .ok_or_else(|| BumperError::branch("branch name is not valid UTF-8"))
            }
            // A fresh repository has HEAD pointing at a branch with no commits yet
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                head.symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(|s| s.to_string())
                    .ok_or_else(|| BumperError::branch("cannot resolve unborn HEAD"))
            }
            Err(e) => Err(BumperError::branch(format!("cannot read HEAD: {}", e))),
        }
    }
}

impl super::RepositoryWriter for Git2Repository {
    fn stage_all(&self) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        debug!(%oid, "created commit");

        Ok(())
    }
}
