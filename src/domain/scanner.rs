use crate::domain::Version;
use regex::Regex;
use std::sync::LazyLock;

/// `version:` or `"version":`, any case.
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)version["']?\s*:"#).expect("version line pattern is valid")
});

/// Whether a line looks like a version declaration
pub fn is_version_line(line: &str) -> bool {
    VERSION_LINE.is_match(line)
}

/// Find the version declared in a file's contents.
///
/// The first line that looks like a version declaration decides the result:
/// if it does not parse, `None` is returned even when a later line would.
pub fn scan(contents: &str) -> Option<Version> {
    let line = contents.lines().find(|line| is_version_line(line))?;
    Version::parse(line).ok()
}
