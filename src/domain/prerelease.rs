//! Prerelease channel handling
//!
//! Only the restricted `<channel>.<sequence>` grammar is understood here,
//! e.g. `alpha.1`, `beta.12`, `rc.3`. Anything else is an invalid prerelease
//! for ranking purposes, even if it is a legal semver prerelease.

use crate::error::{GitTagError, Result};
use std::fmt;
use std::str::FromStr;

/// A decoded prerelease: the channel name and its sequence number
///
/// # Examples
/// - "alpha.1" -> PreRelease { channel: "alpha", sequence: 1 }
/// - "rc.3" -> PreRelease { channel: "rc", sequence: 3 }
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    /// Channel name (alpha, beta, rc or anything custom)
    pub channel: String,
    /// Position within the channel for a fixed core triple
    pub sequence: u64,
}

impl PreRelease {
    /// Create a new prerelease
    pub fn new(channel: impl Into<String>, sequence: u64) -> Self {
        PreRelease {
            channel: channel.into(),
            sequence,
        }
    }

    /// The first release of a channel (`<channel>.1`)
    pub fn first(channel: impl Into<String>) -> Self {
        PreRelease::new(channel, 1)
    }

    /// Decode a prerelease string
    ///
    /// Valid iff it splits on `.` into exactly two segments, the first is
    /// non-empty and the second is a base-10 integer.
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::decode("beta.1")?;
    /// assert_eq!(pr.channel, "beta");
    /// assert_eq!(pr.sequence, 1);
    /// assert!(PreRelease::decode("beta").is_err());
    /// ```
    pub fn decode(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 {
            return Err(GitTagError::invalid_prerelease(format!(
                "'{}' - expected <channel>.<sequence>",
                s
            )));
        }

        let (channel, sequence) = (parts[0], parts[1]);
        if channel.is_empty() {
            return Err(GitTagError::invalid_prerelease(format!(
                "'{}' - empty channel",
                s
            )));
        }

        // u64::from_str tolerates a leading '+', the grammar does not
        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GitTagError::invalid_prerelease(format!(
                "'{}' - sequence '{}' is not a number",
                s, sequence
            )));
        }
        let sequence = sequence.parse::<u64>().map_err(|_| {
            GitTagError::invalid_prerelease(format!("'{}' - sequence out of range", s))
        })?;

        Ok(PreRelease::new(channel, sequence))
    }

    /// Encode back to `<channel>.<sequence>`
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// The following release in the same channel
    ///
    /// Fails once the sequence is exhausted; wrapping around would
    /// reissue an earlier sequence.
    pub fn next(&self) -> Result<Self> {
        let sequence = self.sequence.checked_add(1).ok_or_else(|| {
            GitTagError::invalid_prerelease(format!("'{}' - sequence exhausted", self))
        })?;
        Ok(PreRelease::new(self.channel.clone(), sequence))
    }
}

impl FromStr for PreRelease {
    type Err = GitTagError;

    fn from_str(s: &str) -> Result<Self> {
        PreRelease::decode(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.channel, self.sequence)
    }
}
