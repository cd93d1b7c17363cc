pub mod bump;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod git;
pub mod ui;
pub mod warning;

pub use bump::{compute_plan, execute_plan, BumpPlan, BumpPlanner, FileEntry};
pub use domain::{classify, next_version, scan, BranchCategory, Version};
pub use error::{BumperError, Result};
pub use files::FileListSupplier;
