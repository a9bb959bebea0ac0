use crate::domain::Version;
use std::fmt;

const TAG_REF_PREFIX: &str = "refs/tags/";
const PEELED_SUFFIX: &str = "^{}";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string, used verbatim
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Render a version string as a tag name, adding a leading `v` if missing
    /// Example: "1.2.3" -> "v1.2.3", "v1.2.3" -> "v1.2.3"
    pub fn for_version(version: &str) -> Self {
        if version.starts_with('v') {
            Tag::new(version)
        } else {
            Tag::new(format!("v{}", version))
        }
    }

    /// Tag name for a computed version
    pub fn from_version(version: &Version) -> Self {
        Tag::for_version(&version.to_string())
    }

    /// Extract the tag name from a remote ref (e.g., "refs/tags/v1.2.3" -> "v1.2.3")
    ///
    /// Returns `None` for non-tag refs and for peeled `^{}` entries of annotated tags.
    pub fn from_ref(refname: &str) -> Option<Self> {
        let name = refname.strip_prefix(TAG_REF_PREFIX)?;
        if name.is_empty() || name.ends_with(PEELED_SUFFIX) {
            return None;
        }
        Some(Tag::new(name))
    }

    /// Full reference name (e.g., "refs/tags/v1.2.3")
    pub fn ref_name(&self) -> String {
        format!("{}{}", TAG_REF_PREFIX, self.name)
    }

    /// Refspec pushing this tag to the same name on a remote
    pub fn refspec(&self) -> String {
        let r = self.ref_name();
        format!("{}:{}", r, r)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
