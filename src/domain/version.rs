use crate::domain::PreRelease;
use crate::error::{GitTagError, Result};
use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Accepts `v1`, `v1.2`, `1.2.3`, `1.2.3-rc.1+build.5` and so on.
/// Missing minor/patch components default to zero.
const VERSION_PATTERN: &str = r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// The `(major, minor, patch)` part of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Core {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Core {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Core {
            major,
            minor,
            patch,
        }
    }

    /// Bump according to a release segment, resetting lower components
    ///
    /// Fails when the bumped component is already `u64::MAX`.
    pub fn bump(&self, segment: Segment) -> Result<Self> {
        let bumped = match segment {
            Segment::Major => self.major.checked_add(1).map(|major| Core::new(major, 0, 0)),
            Segment::Minor => self
                .minor
                .checked_add(1)
                .map(|minor| Core::new(self.major, minor, 0)),
            Segment::Patch => self
                .patch
                .checked_add(1)
                .map(|patch| Core::new(self.major, self.minor, patch)),
        };
        bumped.ok_or_else(|| GitTagError::tag(format!("{} of {} cannot be bumped", segment, self)))
    }
}

impl fmt::Display for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Release segment to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Segment {
    Major,
    Minor,
    Patch,
}

impl Segment {
    /// Row order of the candidate matrix
    pub const ALL: [Segment; 3] = [Segment::Patch, Segment::Minor, Segment::Major];

    pub fn name(&self) -> &'static str {
        match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Patch => "patch",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic version parsed from a tag
///
/// Ordering follows semver precedence: core triple first, then a release
/// outranks any prerelease of the same core, then prerelease identifiers.
/// Build metadata and the original spelling do not take part in comparison.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pre: Prerelease,
    build: BuildMetadata,
    original: String,
}

impl Version {
    /// Create a release version with no prerelease
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::from_core(Core::new(major, minor, patch))
    }

    /// The `0.0.0` starting point used when no stable release exists
    pub fn zero() -> Self {
        Version::new(0, 0, 0)
    }

    pub fn from_core(core: Core) -> Self {
        Version {
            major: core.major,
            minor: core.minor,
            patch: core.patch,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
            original: core.to_string(),
        }
    }

    /// Build `<core>-<channel>.<sequence>`
    ///
    /// Fails when the channel contains characters a semver prerelease cannot hold,
    /// or when the result would not decode back as `<channel>.<sequence>`.
    pub fn with_prerelease(core: Core, pre: &PreRelease) -> Result<Self> {
        let encoded = pre.encode();
        if PreRelease::decode(&encoded)? != *pre {
            return Err(GitTagError::invalid_prerelease(format!(
                "'{}' - channel '{}' does not round-trip",
                encoded, pre.channel
            )));
        }
        let pre = Prerelease::new(&encoded).map_err(|e| {
            GitTagError::invalid_prerelease(format!("'{}' - {}", encoded, e))
        })?;
        let mut version = Version::from_core(core);
        version.original = format!("{}-{}", core, pre);
        version.pre = pre;
        Ok(version)
    }

    /// Parse a version from a tag string (e.g., "v1.2.3-rc.1")
    pub fn parse(tag: &str) -> Result<Self> {
        let captures = version_regex()
            .captures(tag)
            .ok_or_else(|| GitTagError::parse(tag, "is not a semantic version"))?;

        let number = |index: usize| -> Result<u64> {
            match captures.get(index) {
                Some(m) => m.as_str().parse::<u64>().map_err(|_| {
                    GitTagError::parse(tag, format!("has an oversized component '{}'", m.as_str()))
                }),
                None => Ok(0),
            }
        };
        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        let pre = match captures.get(4) {
            Some(m) => Prerelease::new(m.as_str())
                .map_err(|e| GitTagError::parse(tag, format!("has a bad prerelease: {}", e)))?,
            None => Prerelease::EMPTY,
        };
        let build = match captures.get(5) {
            Some(m) => BuildMetadata::new(m.as_str())
                .map_err(|e| GitTagError::parse(tag, format!("has bad build metadata: {}", e)))?,
            None => BuildMetadata::EMPTY,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre,
            build,
            original: tag.to_string(),
        })
    }

    pub fn core(&self) -> Core {
        Core::new(self.major, self.minor, self.patch)
    }

    /// Raw prerelease string, if any
    pub fn prerelease(&self) -> Option<&str> {
        if self.pre.is_empty() {
            None
        } else {
            Some(self.pre.as_str())
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Decode the prerelease as `<channel>.<sequence>`
    ///
    /// `None` for releases, `Some(Err(..))` for prereleases outside that grammar.
    pub fn channel_prerelease(&self) -> Option<Result<PreRelease>> {
        self.prerelease().map(PreRelease::decode)
    }

    /// Spelling the version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Bump the core triple according to a release segment
    pub fn bump(&self, segment: Segment) -> Result<Self> {
        self.core().bump(segment).map(Version::from_core)
    }

    pub fn inc_patch(&self) -> Result<Self> {
        self.bump(Segment::Patch)
    }

    pub fn inc_minor(&self) -> Result<Self> {
        self.bump(Segment::Minor)
    }

    pub fn inc_major(&self) -> Result<Self> {
        self.bump(Segment::Major)
    }
}

// Prerelease identifiers follow semver rules: a purely numeric channel compares
// numerically, any other channel lexicographically.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core()
            .cmp(&other.core())
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
