use crate::error::{BumperError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:\+(\d+))?$").expect("version pattern is valid")
});

/// Semantic version representation: `major.minor.patch[+build]`
///
/// The type is `Copy`, so a `current` and a `next` version built from the same
/// text are always independent values. Ordering follows field order; `None`
/// sorts before `Some`, so an absent build is lower than any build number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub build: Option<u64>,
}

impl Version {
    /// Create a new version without a build number
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            build: None,
        }
    }

    /// Parse a version out of a line of text.
    ///
    /// Every character that is not a digit, `.` or `+` is dropped before the
    /// remainder is matched against `major.minor.patch[+build]`. This lets
    /// `Version: 1.2.3` and `"version": "1.2.3",` parse, but any other digits
    /// on the same line end up in the match and make it fail.
    pub fn parse(text: &str) -> Result<Self> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '+')
            .collect();

        let captures = VERSION_SHAPE.captures(&cleaned).ok_or_else(|| {
            BumperError::version(format!(
                "'{}' does not match major.minor.patch[+build]",
                text.trim()
            ))
        })?;

        let number = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                BumperError::version(format!("component '{}' is out of range", &captures[index]))
            })
        };

        let build = match captures.get(4) {
            Some(_) => Some(number(4)?),
            None => None,
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            build,
        })
    }

    pub fn with_major(self, major: u64) -> Self {
        Version { major, ..self }
    }

    pub fn with_minor(self, minor: u64) -> Self {
        Version { minor, ..self }
    }

    pub fn with_patch(self, patch: u64) -> Self {
        Version { patch, ..self }
    }

    pub fn with_build(self, build: Option<u64>) -> Self {
        Version { build, ..self }
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::new(1, 0, 0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = BumperError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
