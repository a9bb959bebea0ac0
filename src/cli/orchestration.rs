//! Main workflow orchestration logic
//!
//! Wires the version engine to the repository and interaction collaborators.
//! Kept free of `clap` so the workflow can be driven programmatically.

use tracing::info;

use crate::analyzer::{generate_candidate_matrix, next_version_from, VersionSet, VersionSetOptions};
use crate::boundary::BoundaryWarning;
use crate::domain::{Segment, Tag, Version};
use crate::error::{GitTagError, Result};
use crate::git::Repository;
use crate::ui::{self, Interaction, MatrixSelection};

/// Inputs of one tagging run
#[derive(Debug, Clone, PartialEq)]
pub struct TagRequest {
    /// Release segment to bump
    pub segment: Option<Segment>,

    /// Prerelease channel to bump
    pub channel: Option<String>,

    /// Explicit tag to create
    pub tag: Option<String>,

    /// Report tags that were dropped while reading the history
    pub debug: bool,

    /// Offer channels whose newest prerelease predates the latest release
    pub include_stale_channels: bool,

    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Compute and show the tag without creating or pushing it
    pub dry_run: bool,
}

impl Default for TagRequest {
    fn default() -> Self {
        TagRequest {
            segment: None,
            channel: None,
            tag: None,
            debug: false,
            include_stale_channels: true,
            assume_yes: false,
            dry_run: false,
        }
    }
}

impl TagRequest {
    /// No segment, channel or tag given: the user picks from the matrix
    pub fn is_interactive(&self) -> bool {
        self.segment.is_none() && self.channel.is_none() && self.tag.is_none()
    }

    fn set_options(&self) -> VersionSetOptions {
        VersionSetOptions {
            debug: self.debug,
            include_stale_channels: self.include_stale_channels,
        }
    }
}

/// Result of a completed tagging run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was (or would have been) created
    pub tag: String,

    /// Whether the tag was created locally
    pub created: bool,

    /// Whether the tag was pushed to remote
    pub pushed: bool,
}

/// Decide the tag to create from a ranked version set
///
/// Interactive requests go through [Interaction::present_candidate_matrix];
/// a cancelled selection becomes [GitTagError::NoSelection].
pub fn choose_tag<I: Interaction>(set: &VersionSet, request: &TagRequest, ui: &I) -> Result<Tag> {
    if request.is_interactive() {
        let matrix = generate_candidate_matrix(set);
        return match ui.present_candidate_matrix(&matrix)? {
            MatrixSelection::Selected(version) => Ok(Tag::from_version(&version)),
            MatrixSelection::Cancelled => Err(GitTagError::NoSelection),
        };
    }

    // An explicit tag only needs to parse when it serves as a channel base
    let explicit = match (&request.tag, &request.channel) {
        (Some(tag), Some(_)) => Some(Version::parse(tag)?),
        _ => None,
    };

    match next_version_from(
        set,
        explicit.as_ref(),
        request.segment,
        request.channel.as_deref(),
    )? {
        Some(version) => Ok(Tag::from_version(&version)),
        None => match &request.tag {
            Some(tag) => Ok(Tag::for_version(tag)),
            None => Err(GitTagError::NoSelection),
        },
    }
}

/// Main tagging workflow
///
/// 1. List the remote's tags and rank them
/// 2. Show the latest release and channel heads
/// 3. Choose the next tag (flags or interactive matrix)
/// 4. Confirm, create the tag at HEAD and push it
pub fn run_tag_workflow<R: Repository, I: Interaction>(
    repo: &R,
    ui: &I,
    request: &TagRequest,
) -> Result<WorkflowResult> {
    let tags = repo.list_remote_tags()?;
    info!(remote = repo.remote_name(), count = tags.len(), "read remote tags");

    let set = VersionSet::with_options(&tags, request.set_options());
    if set.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoPriorTags {
            remote: repo.remote_name().to_string(),
        });
    }
    ui::display_summary(&set);

    let tag = choose_tag(&set, request, ui)?;
    ui::display_proposed_tag(&tag.name, repo.remote_name());

    let mut result = WorkflowResult {
        tag: tag.name.clone(),
        created: false,
        pushed: false,
    };

    if request.dry_run {
        ui::display_status("Dry run: no tag created");
        return Ok(result);
    }

    let prompt = format!(
        "Create and push new tag {} to the remote {}?",
        tag,
        repo.remote_name()
    );
    if !request.assume_yes && !ui.confirm(&prompt)? {
        return Ok(result);
    }

    repo.create_tag(&tag.name)?;
    result.created = true;
    ui::display_success(&format!("Created the tag {}", tag));

    repo.push_tag(&tag.name)?;
    result.pushed = true;
    ui::display_success(&format!(
        "Pushed the tag {} to the remote {}",
        tag,
        repo.remote_name()
    ));

    Ok(result)
}
