//! User interface module - console output of plans, warnings and changes.

pub mod formatter;

pub use formatter::{
    display_changes, display_error, display_failure, display_plan, display_status,
    display_success, display_warning, format_change, format_plan,
};
