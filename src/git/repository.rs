use crate::domain::Tag;
use crate::error::{GitTagError, Result};
use git2::{Cred, CredentialType, Direction, RemoteCallbacks, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Give up after this many credential attempts instead of looping forever
const MAX_CREDENTIAL_ATTEMPTS: usize = 4;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    remote: String,
}

impl Git2Repository {
    /// Open or discover a git repository, bound to the given remote
    pub fn open<P: AsRef<Path>>(path: P, remote: impl Into<String>) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            remote: remote.into(),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, remote: impl Into<String>) -> Self {
        Git2Repository {
            repo,
            remote: remote.into(),
        }
    }

    fn find_remote(&self) -> Result<git2::Remote<'_>> {
        self.repo.find_remote(&self.remote).map_err(|e| {
            GitTagError::remote(format!("Cannot find remote '{}': {}", self.remote, e))
        })
    }
}

/// Credential callbacks trying the SSH agent, then keys from ~/.ssh,
/// then libgit2's default credentials
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    let mut attempts = 0;

    callbacks.credentials(move |_url, username_from_url, allowed_types| {
        attempts += 1;
        if attempts > MAX_CREDENTIAL_ATTEMPTS {
            return Err(git2::Error::from_str("authentication failed"));
        }

        let username = username_from_url.unwrap_or("git");
        if allowed_types.contains(CredentialType::SSH_KEY) {
            if attempts == 1 {
                if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
            }

            for key_path in ssh_key_candidates() {
                if key_path.exists() {
                    if let Ok(cred) = Cred::ssh_key(username, None, &key_path, None) {
                        return Ok(cred);
                    }
                }
            }
        }

        Cred::default()
    });

    callbacks
}

fn ssh_key_candidates() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    ["id_ed25519", "id_rsa", "id_ecdsa"]
        .iter()
        .map(|name| home.join(".ssh").join(name))
        .collect()
}

impl super::Repository for Git2Repository {
    fn remote_name(&self) -> &str {
        &self.remote
    }

    fn list_remote_tags(&self) -> Result<Vec<String>> {
        let mut remote = self.find_remote()?;

        let connection = remote
            .connect_auth(Direction::Fetch, Some(remote_callbacks()), None)
            .map_err(|e| {
                GitTagError::remote(format!("Cannot connect to '{}': {}", self.remote, e))
            })?;

        let heads = connection
            .list()
            .map_err(|e| GitTagError::remote(format!("Cannot list '{}': {}", self.remote, e)))?;

        let tags: Vec<String> = heads
            .iter()
            .filter_map(|head| Tag::from_ref(head.name()))
            .map(|tag| tag.name)
            .collect();

        debug!(remote = %self.remote, count = tags.len(), "listed remote tags");
        Ok(tags)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map_err(|e| GitTagError::tag(format!("Cannot resolve HEAD: {}", e)))?;
        let signature = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, name, false)
            .map_err(|e| GitTagError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        debug!(tag = name, commit = %head.id(), "created tag");
        Ok(())
    }

    fn push_tag(&self, name: &str) -> Result<()> {
        let mut remote = self.find_remote()?;

        let mut callbacks = remote_callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = Tag::new(name).refspec();
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    GitTagError::remote(format!("Network error during push: {}", e))
                }
                _ => GitTagError::remote(format!("Failed to push tag '{}': {}", name, e)),
            })?;

        debug!(tag = name, remote = %self.remote, "pushed tag");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Git2Repository::open(dir.path(), "origin").is_err());
    }

    #[test]
    fn test_missing_remote_is_remote_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let repo = Git2Repository::from_git2(repo, "nowhere");

        let err = repo.list_remote_tags().unwrap_err();
        assert!(matches!(err, GitTagError::Remote(_)));
        assert_eq!(repo.remote_name(), "nowhere");
    }
}
