use crate::boundary::BoundaryWarning;
use crate::domain::{Core, Version};
use std::collections::HashMap;
use tracing::debug;

/// Options controlling how a [`VersionSet`] is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSetOptions {
    /// Report every dropped tag and unranked prerelease through `tracing`
    pub debug: bool,
    /// Keep channels whose newest prerelease predates the latest release
    pub include_stale_channels: bool,
}

impl Default for VersionSetOptions {
    fn default() -> Self {
        VersionSetOptions {
            debug: false,
            include_stale_channels: true,
        }
    }
}

/// Lookup key for the newest version of a channel at a given core triple,
/// e.g. `"1.2.0-alpha"`
pub fn core_channel_key(core: Core, channel: &str) -> String {
    format!("{}-{}", core, channel)
}

/// All versions parsed from one batch of tags, ranked once at construction
#[derive(Debug, Clone)]
pub struct VersionSet {
    /// Sorted by descending precedence, ties kept in input order
    versions: Vec<Version>,
    /// Channels by descending number of occurrences, ties in first-seen order
    channel_rank: Vec<String>,
    latest: Version,
    latest_per_channel: HashMap<String, Version>,
    latest_per_core_and_channel: HashMap<String, Version>,
}

impl VersionSet {
    /// Build a set from raw tag names with default options
    ///
    /// Tags that are not versions are dropped; with `debug` each one is
    /// reported at debug level.
    pub fn new<I, S>(tags: I, debug: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        VersionSet::with_options(
            tags,
            VersionSetOptions {
                debug,
                ..VersionSetOptions::default()
            },
        )
    }

    pub fn with_options<I, S>(tags: I, options: VersionSetOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut versions = Vec::new();
        let mut channel_counts: Vec<(String, usize)> = Vec::new();

        for tag in tags {
            let tag = tag.as_ref();
            let version = match Version::parse(tag) {
                Ok(version) => version,
                Err(e) => {
                    if options.debug {
                        let warning = BoundaryWarning::UnparsableTag {
                            tag: tag.to_string(),
                            reason: e.to_string(),
                        };
                        debug!("{}", warning);
                    }
                    continue;
                }
            };

            match version.channel_prerelease() {
                Some(Ok(pre)) => {
                    match channel_counts.iter_mut().find(|(c, _)| *c == pre.channel) {
                        Some((_, count)) => *count += 1,
                        None => channel_counts.push((pre.channel, 1)),
                    }
                }
                Some(Err(_)) => {
                    if options.debug {
                        let warning = BoundaryWarning::UnrankedPrerelease {
                            tag: tag.to_string(),
                            prerelease: version.prerelease().unwrap_or_default().to_string(),
                        };
                        debug!("{}", warning);
                    }
                }
                None => {}
            }

            versions.push(version);
        }

        // sort_by is stable, equal versions keep their input order
        versions.sort_by(|a, b| b.cmp(a));

        let latest = versions
            .iter()
            .find(|v| !v.is_prerelease())
            .cloned()
            .unwrap_or_else(Version::zero);

        // Sorted descending, so the first version seen for a key is its newest
        let mut latest_per_channel = HashMap::new();
        let mut latest_per_core_and_channel = HashMap::new();
        for version in &versions {
            let Some(Ok(pre)) = version.channel_prerelease() else {
                continue;
            };

            latest_per_core_and_channel
                .entry(core_channel_key(version.core(), &pre.channel))
                .or_insert_with(|| version.clone());

            if !options.include_stale_channels && *version < latest {
                continue;
            }
            latest_per_channel
                .entry(pre.channel)
                .or_insert_with(|| version.clone());
        }

        channel_counts.sort_by(|a, b| b.1.cmp(&a.1));
        let channel_rank = channel_counts
            .into_iter()
            .map(|(channel, _)| channel)
            .filter(|c| options.include_stale_channels || latest_per_channel.contains_key(c))
            .collect();

        VersionSet {
            versions,
            channel_rank,
            latest,
            latest_per_channel,
            latest_per_core_and_channel,
        }
    }

    /// Every retained version, highest precedence first
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Highest release without a prerelease, or `0.0.0`
    pub fn latest(&self) -> &Version {
        &self.latest
    }

    pub fn channel_rank(&self) -> &[String] {
        &self.channel_rank
    }

    pub fn latest_for_channel(&self, channel: &str) -> Option<&Version> {
        self.latest_per_channel.get(channel)
    }

    pub fn latest_for_core_and_channel(&self, core: Core, channel: &str) -> Option<&Version> {
        self.latest_per_core_and_channel
            .get(&core_channel_key(core, channel))
    }
}
