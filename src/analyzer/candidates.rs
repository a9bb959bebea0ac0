//! Next-version candidates computed from a [`VersionSet`]

use crate::analyzer::VersionSet;
use crate::boundary::BoundaryWarning;
use crate::domain::{Core, PreRelease, Segment, Version};
use crate::error::{GitTagError, Result};
use tracing::warn;

/// Title of the column holding plain (non-prerelease) candidates
pub const PLAIN_COLUMN: &str = "plain";

/// One row of the candidate matrix: a bumped core and its candidates
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub segment: Segment,
    /// `None` when `Latest` cannot be bumped by `segment`
    pub base: Option<Core>,
    /// Plain candidate first, then one cell per ranked channel.
    /// `None` marks a cell that could not be computed.
    pub cells: Vec<Option<Version>>,
}

/// Table of next-version proposals, rows = segment, columns = plain/channel
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatrix {
    pub channels: Vec<String>,
    pub rows: Vec<CandidateRow>,
}

impl CandidateMatrix {
    /// Column titles: `plain` followed by the channels in rank order
    pub fn column_titles(&self) -> Vec<&str> {
        std::iter::once(PLAIN_COLUMN)
            .chain(self.channels.iter().map(String::as_str))
            .collect()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Version> {
        self.rows.get(row)?.cells.get(column)?.as_ref()
    }

    /// Computed cells in row-major order, as `(row, column, version)`
    pub fn selectable(&self) -> Vec<(usize, usize, &Version)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.cells
                    .iter()
                    .enumerate()
                    .filter_map(move |(c, cell)| cell.as_ref().map(|v| (r, c, v)))
            })
            .collect()
    }
}

/// Next prerelease of `channel` on top of `base`
///
/// Continues the sequence of the newest `<base>-<channel>.N` in the set,
/// or starts the channel at 1.
pub fn next_for_channel(set: &VersionSet, base: Core, channel: &str) -> Result<Version> {
    let pre = match set.latest_for_core_and_channel(base, channel) {
        Some(existing) => match existing.channel_prerelease() {
            Some(Ok(pre)) => pre.next()?,
            Some(Err(e)) => return Err(e),
            None => {
                return Err(GitTagError::invalid_prerelease(format!(
                    "'{}' has no prerelease",
                    existing
                )))
            }
        },
        None => PreRelease::first(channel),
    };
    Version::with_prerelease(base, &pre)
}

fn skip_cell(base: impl ToString, channel: &str, error: &GitTagError) -> Option<Version> {
    let warning = BoundaryWarning::SkippedCandidate {
        base: base.to_string(),
        channel: channel.to_string(),
        reason: error.to_string(),
    };
    warn!("{}", warning);
    None
}

/// Full candidate matrix for interactive selection
///
/// Rows are `Latest` bumped by patch, minor and major. A cell that fails is
/// logged and left empty; the rest of the matrix is still produced.
pub fn generate_candidate_matrix(set: &VersionSet) -> CandidateMatrix {
    let channels = set.channel_rank().to_vec();
    let latest = set.latest().core();

    let rows = Segment::ALL
        .iter()
        .map(|&segment| {
            let base = match latest.bump(segment) {
                Ok(base) => base,
                Err(e) => {
                    let cells = std::iter::once(PLAIN_COLUMN)
                        .chain(channels.iter().map(String::as_str))
                        .map(|column| skip_cell(latest, column, &e))
                        .collect();
                    return CandidateRow {
                        segment,
                        base: None,
                        cells,
                    };
                }
            };

            let mut cells = Vec::with_capacity(channels.len() + 1);
            cells.push(Some(Version::from_core(base)));
            for channel in &channels {
                let cell = next_for_channel(set, base, channel)
                    .map_or_else(|e| skip_cell(base, channel, &e), Some);
                cells.push(cell);
            }

            CandidateRow {
                segment,
                base: Some(base),
                cells,
            }
        })
        .collect();

    CandidateMatrix { channels, rows }
}

/// Deterministic next version from flags
///
/// Returns `Ok(None)` when neither a segment nor a channel is given, which is
/// the caller's cue to fall back to interactive selection.
pub fn next_version(
    set: &VersionSet,
    segment: Option<Segment>,
    channel: Option<&str>,
) -> Result<Option<Version>> {
    next_version_from(set, None, segment, channel)
}

/// Like [`next_version`], with an explicitly supplied version
///
/// - segment given: `Latest` bumped by it (wins over `explicit`)
/// - otherwise `explicit`, if given
/// - with a channel, the above (or, failing both, the channel's newest core,
///   else `Latest` bumped by patch) becomes the base for [`next_for_channel`]
pub fn next_version_from(
    set: &VersionSet,
    explicit: Option<&Version>,
    segment: Option<Segment>,
    channel: Option<&str>,
) -> Result<Option<Version>> {
    let base = match (segment, explicit) {
        (Some(segment), _) => Some(set.latest().bump(segment)?),
        (None, Some(version)) => Some(version.clone()),
        (None, None) => None,
    };

    let Some(channel) = channel else {
        return Ok(base);
    };

    let base = match base {
        Some(version) => version.core(),
        None => match set.latest_for_channel(channel) {
            Some(version) => version.core(),
            None => set.latest().core().bump(Segment::Patch)?,
        },
    };
    next_for_channel(set, base, channel).map(Some)
}
