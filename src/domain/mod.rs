//! Domain logic - pure versioning rules independent of git and the file system

pub mod branch;
pub mod calculator;
pub mod scanner;
pub mod version;

pub use branch::{classify, BranchCategory, BranchRules};
pub use calculator::next_version;
pub use scanner::scan;
pub use version::Version;
