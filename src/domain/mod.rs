//! Domain logic - pure value types independent of git operations

pub mod prerelease;
pub mod tag;
pub mod version;

pub use prerelease::PreRelease;
pub use tag::Tag;
pub use version::{Core, Segment, Version};
