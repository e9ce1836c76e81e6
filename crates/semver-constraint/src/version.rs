//! Version parsing and comparison module

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVersionError {
    #[error("Version string is empty")]
    Empty,
    #[error("Invalid version string \"{0}\"")]
    Malformed(String),
}

lazy_static! {
    // Anchored SemVer 2.0.0 grammar with an optional leading "v".
    // Numeric segments and numeric pre-release identifiers reject leading zeros.
    static ref VERSION_RE: Regex = Regex::new(
        r"^v?(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<pre>(?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*)(?:\.(?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*))*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// A single pre-release identifier
///
/// Numeric identifiers sort below alphanumeric ones, so the variant order
/// matters for the derived ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreReleaseIdentifier {
    /// Purely numeric identifier, compared numerically
    Numeric(u64),
    /// Alphanumeric identifier, compared in ASCII order
    Alpha(String),
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            PreReleaseIdentifier::Alpha(s) => write!(f, "{}", s),
        }
    }
}

/// A semantic version (SemVer 2.0.0)
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<PreReleaseIdentifier>,
    build: Vec<String>,
}

impl Version {
    /// Create a stable version from its numeric parts
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Attach pre-release identifiers
    pub fn with_pre_release(mut self, pre_release: Vec<PreReleaseIdentifier>) -> Self {
        self.pre_release = pre_release;
        self
    }

    /// Attach build metadata identifiers
    pub fn with_build(mut self, build: Vec<String>) -> Self {
        self.build = build;
        self
    }

    /// Get the major version number
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Get the minor version number
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Get the patch version number
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Get the pre-release identifiers
    pub fn pre_release(&self) -> &[PreReleaseIdentifier] {
        &self.pre_release
    }

    /// Get the build metadata identifiers
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Check if this is a pre-release version
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Check if this version == other
    pub fn is_equal_to(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    /// Check if this version != other
    pub fn is_not_equal_to(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Equal
    }

    /// Check if this version > other
    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Check if this version >= other
    pub fn is_greater_or_equal_to(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Less
    }

    /// Check if this version < other
    pub fn is_less_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Check if this version <= other
    pub fn is_less_or_equal_to(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Greater
    }
}

impl FromStr for Version {
    type Err = InvalidVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidVersionError::Empty);
        }

        let captures = VERSION_RE
            .captures(s)
            .ok_or_else(|| InvalidVersionError::Malformed(s.to_string()))?;

        let segment = |name: &str| -> Result<u64, InvalidVersionError> {
            captures[name]
                .parse()
                .map_err(|_| InvalidVersionError::Malformed(s.to_string()))
        };

        let major = segment("major")?;
        let minor = segment("minor")?;
        let patch = segment("patch")?;

        let pre_release = match captures.name("pre") {
            Some(pre) => pre
                .as_str()
                .split('.')
                .map(|part| parse_pre_release_identifier(part, s))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let build = match captures.name("build") {
            Some(build) => build.as_str().split('.').map(str::to_string).collect(),
            None => Vec::new(),
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }
}

fn parse_pre_release_identifier(
    part: &str,
    version: &str,
) -> Result<PreReleaseIdentifier, InvalidVersionError> {
    if part.bytes().all(|b| b.is_ascii_digit()) {
        // Leading zeros are already rejected by the grammar
        part.parse()
            .map(PreReleaseIdentifier::Numeric)
            .map_err(|_| InvalidVersionError::Malformed(version.to_string()))
    } else {
        Ok(PreReleaseIdentifier::Alpha(part.to_string()))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let numeric = (self.major, self.minor, self.patch).cmp(&(
            other.major,
            other.minor,
            other.patch,
        ));
        if numeric != Ordering::Equal {
            return numeric;
        }

        // A pre-release sorts below the release it precedes; two pre-release
        // lists compare identifier by identifier, shorter prefix first.
        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.pre_release.cmp(&other.pre_release),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows precedence: build metadata is excluded
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, identifier) in self.pre_release.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{}", identifier)?;
        }

        for (i, identifier) in self.build.iter().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            f.write_str(identifier)?;
        }

        Ok(())
    }
}
