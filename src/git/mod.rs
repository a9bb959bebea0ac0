//! Git operations abstraction layer
//!
//! The tagging workflow only needs three things from a repository: the tag
//! names present on a remote, creating a tag at the current commit, and
//! pushing that tag back. The [Repository] trait captures exactly that.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use gittag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> gittag::Result<()> {
//! let tags = repo.list_remote_tags()?;
//! println!("{} has {} tags", repo.remote_name(), tags.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Repository operations needed to publish a version tag
///
/// Each implementation is bound to a single remote for its lifetime.
/// Methods return [crate::error::Result]; implementations map underlying
/// errors (like `git2::Error`) to the matching [crate::error::GitTagError]
/// variants.
pub trait Repository {
    /// Name of the remote this repository talks to (e.g., "origin")
    fn remote_name(&self) -> &str;

    /// List tag names currently present on the remote
    ///
    /// Returns short names (`v1.2.3`, not `refs/tags/v1.2.3`) in the order
    /// the remote advertises them.
    fn list_remote_tags(&self) -> Result<Vec<String>>;

    /// Create an annotated tag at the current HEAD commit
    ///
    /// # Errors
    /// If the tag already exists or HEAD cannot be resolved.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a local tag to the remote
    fn push_tag(&self, name: &str) -> Result<()>;
}
