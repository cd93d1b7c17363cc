use crate::domain::{BranchCategory, Version};
use crate::error::{BumperError, Result};

/// Compute the next version for a branch category.
///
/// - **Release**: major += 1, minor = 0, patch = 0, no build
/// - **Feature**: minor += 1, patch = 0, no build
/// - **BugFix**: patch += 1, no build
/// - **Unknown**: build += 1 (absent counts as 0), everything else unchanged
///
/// # Returns
/// * `Ok(Version)` - The next version
/// * `Err(InvalidVersion)` - If the bumped component is already `u64::MAX`
pub fn next_version(current: &Version, category: BranchCategory) -> Result<Version> {
    let next = *current;
    let version = match category {
        BranchCategory::Release => next
            .with_major(increment(current.major, "major", current)?)
            .with_minor(0)
            .with_patch(0)
            .with_build(None),
        BranchCategory::Feature => next
            .with_minor(increment(current.minor, "minor", current)?)
            .with_patch(0)
            .with_build(None),
        BranchCategory::BugFix => next
            .with_patch(increment(current.patch, "patch", current)?)
            .with_build(None),
        BranchCategory::Unknown => {
            let build = increment(current.build.unwrap_or(0), "build", current)?;
            next.with_build(Some(build))
        }
    };
    Ok(version)
}

fn increment(component: u64, name: &str, current: &Version) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        BumperError::version(format!(
            "{} component of {} cannot be incremented",
            name, current
        ))
    })
}
