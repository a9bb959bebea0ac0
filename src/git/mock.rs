use crate::error::{GitTagError, Result};
use crate::git::Repository;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    remote: String,
    remote_tags: Vec<String>,
    created: RefCell<Vec<String>>,
    pushed: RefCell<Vec<String>>,
    list_failure: Option<String>,
}

impl MockRepository {
    /// Create a new mock repository with an empty remote named "origin"
    pub fn new() -> Self {
        MockRepository {
            remote: "origin".to_string(),
            remote_tags: Vec::new(),
            created: RefCell::new(Vec::new()),
            pushed: RefCell::new(Vec::new()),
            list_failure: None,
        }
    }

    /// Create a mock whose remote advertises the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = MockRepository::new();
        repo.remote_tags = tags.into_iter().map(Into::into).collect();
        repo
    }

    /// Rename the remote
    pub fn set_remote(&mut self, remote: impl Into<String>) {
        self.remote = remote.into();
    }

    /// Add a tag to the remote listing
    pub fn add_remote_tag(&mut self, name: impl Into<String>) {
        self.remote_tags.push(name.into());
    }

    /// Make `list_remote_tags` fail with the given message
    pub fn fail_listing(&mut self, message: impl Into<String>) {
        self.list_failure = Some(message.into());
    }

    /// Tags created locally so far
    pub fn created_tags(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    /// Tags pushed so far
    pub fn pushed_tags(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn remote_name(&self) -> &str {
        &self.remote
    }

    fn list_remote_tags(&self) -> Result<Vec<String>> {
        match &self.list_failure {
            Some(message) => Err(GitTagError::remote(message.clone())),
            None => Ok(self.remote_tags.clone()),
        }
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let exists = self.remote_tags.iter().any(|t| t == name)
            || self.created.borrow().iter().any(|t| t == name);
        if exists {
            return Err(GitTagError::tag(format!("Tag '{}' already exists", name)));
        }
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, name: &str) -> Result<()> {
        if !self.created.borrow().iter().any(|t| t == name) {
            return Err(GitTagError::remote(format!("No local tag '{}'", name)));
        }
        self.pushed.borrow_mut().push(name.to_string());
        Ok(())
    }
}
