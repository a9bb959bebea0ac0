use std::fmt;

/// Non-fatal conditions met while reading a repository's tag history
/// or building candidates. Reported to the user, never propagated as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Remote has no tag that parses as a version
    NoPriorTags { remote: String },
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Version parses but its prerelease is not `<channel>.<sequence>`
    UnrankedPrerelease { tag: String, prerelease: String },
    /// A candidate cell could not be computed and was left empty
    SkippedCandidate {
        base: String,
        channel: String,
        reason: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorTags { remote } => {
                write!(
                    f,
                    "No version tags found on remote '{}', starting from 0.0.0",
                    remote
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::UnrankedPrerelease { tag, prerelease } => {
                write!(
                    f,
                    "Tag '{}' has prerelease '{}' outside <channel>.<sequence>, not ranked",
                    tag, prerelease
                )
            }
            BoundaryWarning::SkippedCandidate {
                base,
                channel,
                reason,
            } => {
                write!(
                    f,
                    "Skipped candidate for {} on channel '{}': {}",
                    base, channel, reason
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prior_tags_message() {
        let warning = BoundaryWarning::NoPriorTags {
            remote: "origin".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "No version tags found on remote 'origin', starting from 0.0.0"
        );
    }

    #[test]
    fn test_unranked_prerelease_message() {
        let warning = BoundaryWarning::UnrankedPrerelease {
            tag: "v1.0.0-alpha".to_string(),
            prerelease: "alpha".to_string(),
        };
        let message = warning.to_string();
        assert!(message.contains("v1.0.0-alpha"));
        assert!(message.contains("not ranked"));
    }

    #[test]
    fn test_skipped_candidate_message() {
        let warning = BoundaryWarning::SkippedCandidate {
            base: "1.2.0".to_string(),
            channel: "beta".to_string(),
            reason: "sequence overflow".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Skipped candidate for 1.2.0 on channel 'beta': sequence overflow"
        );
    }
}
