//! Main workflow orchestration logic
//!
//! Runs one bump from start to finish: plan, report, mutate or simulate,
//! then commit. Kept apart from `main.rs` so the workflow can be driven
//! programmatically and tested against a mock repository.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::bump::{execute_plan, BumpPlanner, FileChange};
use crate::config::Config;
use crate::domain::{BranchCategory, Version};
use crate::error::BumperError;
use crate::files::{ConfiguredFiles, FileListSupplier, ManifestFiles};
use crate::git::{RepositoryInfo, RepositoryWriter};
use crate::ui;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Files given on the command line; these win over config and manifest
    pub files: Vec<PathBuf>,

    /// Branch category to use instead of classifying the current branch
    pub category: Option<BranchCategory>,

    /// Preview mode - report the changes without writing or committing
    pub dry_run: bool,

    /// Skip the commit even when enabled in the config
    pub no_commit: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version the files were bumped to
    pub version: Version,

    /// Changes applied (or simulated)
    pub changes: Vec<FileChange>,

    /// Whether a commit was recorded
    pub committed: bool,
}

/// Pick the file list source: command line, then config, then manifest.
///
/// Config entries and the manifest are resolved against `base_dir`.
pub fn file_supplier(
    args: &BumpWorkflowArgs,
    config: &Config,
    base_dir: &Path,
) -> Box<dyn FileListSupplier> {
    if !args.files.is_empty() {
        Box::new(ConfiguredFiles::new(args.files.clone()))
    } else if !config.files.is_empty() {
        Box::new(ConfiguredFiles::new(
            config.files.iter().map(|f| base_dir.join(f)),
        ))
    } else {
        Box::new(ManifestFiles::new(base_dir.join(&config.manifest)))
    }
}

/// Main bump workflow
///
/// 1. Classify the branch and compute the plan
/// 2. Print the plan and every warning
/// 3. Stop if the plan is not bumpable; no file is touched
/// 4. Rewrite (or simulate) every file
/// 5. Stage and commit, unless simulating or disabled
pub fn run_bump_workflow<R>(
    args: &BumpWorkflowArgs,
    config: &Config,
    repo: &R,
    base_dir: &Path,
) -> Result<WorkflowResult>
where
    R: RepositoryInfo + RepositoryWriter,
{
    let supplier = file_supplier(args, config, base_dir);
    let planner = BumpPlanner::new(repo, supplier.as_ref())
        .with_rules(config.branches.clone())
        .with_initial_version(config.initial_version()?);

    let plan = planner
        .compute_plan(args.category)
        .context("Failed to compute bump plan")?;

    ui::display_plan(&plan);

    if !plan.bumpable {
        return Err(BumperError::NotBumpable(plan.warnings.len()).into());
    }

    let report = execute_plan(&plan, args.dry_run)?;
    ui::display_changes(&report.changes, args.dry_run);

    if !report.is_complete() {
        for (path, reason) in &report.failures {
            ui::display_failure(path, reason);
        }
        return Err(BumperError::Mutation(report.failures.len()).into());
    }

    let should_commit = !args.dry_run && !args.no_commit && config.commit.enabled;
    if should_commit {
        let message = config.commit.message_for(&plan.next);
        repo.stage_all().context("Failed to stage changes")?;
        repo.commit(&message).context("Failed to commit changes")?;
        info!(%message, "committed bump");
        ui::display_success(&format!("Committed: {}", message));
    } else if args.dry_run {
        ui::display_status("Dry run: no files were changed");
    }

    Ok(WorkflowResult {
        version: plan.next,
        changes: report.changes,
        committed: should_commit,
    })
}
