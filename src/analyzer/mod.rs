//! Ranking of existing versions and generation of next-version candidates

pub mod candidates;
pub mod version_set;

pub use candidates::{
    generate_candidate_matrix, next_for_channel, next_version, next_version_from, CandidateMatrix,
    CandidateRow,
};
pub use version_set::{VersionSet, VersionSetOptions};
