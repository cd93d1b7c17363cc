use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bumper::cli::{run_bump_workflow, BumpWorkflowArgs};
use bumper::config;
use bumper::domain::BranchCategory;
use bumper::git::Git2Repository;
use bumper::ui;
use bumper::BumperError;

#[derive(clap::Parser)]
#[command(
    name = "bumper",
    version,
    about = "Bump semantic versions in project files based on the current git branch"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'b',
        long,
        help = "Bump as this branch type instead of the current branch (release, feature, bugfix, build)"
    )]
    branch_type: Option<BranchCategory>,

    #[arg(short, long = "file", help = "File to bump (repeatable); overrides config and manifest")]
    files: Vec<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Do not commit the bumped files")]
    no_commit: bool,

    #[arg(short = 'C', long, default_value = ".", help = "Repository directory")]
    dir: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("BUMPER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let repo = match Git2Repository::open(&args.dir) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };
    let base_dir = repo
        .workdir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| args.dir.clone());

    // Paths typed on the command line are relative to --dir
    let config_path = args.config.as_deref().map(|c| args.dir.join(c));
    let config = match config::load_config_in(config_path.as_deref(), &base_dir) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs {
        files: args.files.iter().map(|f| args.dir.join(f)).collect(),
        category: args.branch_type,
        dry_run: args.dry_run,
        no_commit: args.no_commit,
    };

    match run_bump_workflow(&workflow_args, &config, &repo, &base_dir) {
        Ok(result) => {
            ui::display_success(&format!("Version {}", result.version));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            if e
                .downcast_ref::<BumperError>()
                .is_some_and(BumperError::is_pre_mutation)
            {
                ui::display_status("No files were changed");
            }
            std::process::exit(1);
        }
    }
}
