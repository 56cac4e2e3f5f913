//! Where sessions come from.

use crate::backend::session::model::{Identity, Profile, Role};
use crate::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::fs;

/// Resolves the signed-in identity and its profile.
///
/// Implemented by the local file-backed source; a hosted auth backend plugs
/// in the same way.
#[allow(async_fn_in_trait)]
pub trait SessionSource {
    async fn load_user(&self) -> Result<Option<Identity>>;
    async fn load_profile(&self, user: &Identity) -> Result<Profile>;
    async fn sign_in(&self, username: &str) -> Result<Identity>;
    async fn sign_out(&self) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    username: String,
}

/// Offline session source: remembers the last username in `session.json`.
pub struct LocalSessionSource {
    path: PathBuf,
    admin_users: HashSet<String>,
}

impl LocalSessionSource {
    pub fn new(path: PathBuf, admin_users: impl IntoIterator<Item = String>) -> Self {
        Self {
            path,
            admin_users: admin_users.into_iter().collect(),
        }
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    fn role_for(&self, username: &str) -> Role {
        if self.admin_users.contains(username) {
            Role::Admin
        } else {
            Role::Employee
        }
    }
}

impl SessionSource for LocalSessionSource {
    async fn load_user(&self) -> Result<Option<Identity>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).await?;
        let stored: StoredSession = serde_json::from_str(&json)?;
        if !Self::is_valid_username(&stored.username) {
            return Err(Error::InvalidFile {
                path: self.path.clone(),
                reason: format!("stored username {:?} is not valid", stored.username),
            });
        }
        Ok(Some(Identity::new(stored.username)))
    }

    async fn load_profile(&self, user: &Identity) -> Result<Profile> {
        Ok(Profile {
            user_id: user.id.clone(),
            display_name: user.id.clone(),
            role: self.role_for(&user.id),
        })
    }

    async fn sign_in(&self, username: &str) -> Result<Identity> {
        if !Self::is_valid_username(username) {
            return Err(Error::InvalidUsername(username.to_string()));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let stored = StoredSession {
            username: username.to_string(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?).await?;
        Ok(Identity::new(username))
    }

    async fn sign_out(&self) -> Result<()> {
        if fs::try_exists(&self.path).await? {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(dir: &tempfile::TempDir) -> LocalSessionSource {
        LocalSessionSource::new(dir.path().join("session.json"), ["root_admin".to_string()])
    }

    #[test]
    fn username_rules() {
        assert!(LocalSessionSource::is_valid_username("alice_01"));
        assert!(!LocalSessionSource::is_valid_username("al"));
        assert!(!LocalSessionSource::is_valid_username("has space"));
        assert!(!LocalSessionSource::is_valid_username("seventeen_chars__"));
    }

    #[tokio::test]
    async fn no_file_means_no_user() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(source(&dir).load_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn sign_in_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        source(&dir).sign_in("alice").await.unwrap();

        let user = source(&dir).load_user().await.unwrap().unwrap();
        assert_eq!(user.id, "alice");
    }

    #[tokio::test]
    async fn admin_users_get_admin_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(&dir);

        let admin = src.load_profile(&Identity::new("root_admin")).await.unwrap();
        let member = src.load_profile(&Identity::new("alice")).await.unwrap();

        assert_eq!(admin.role, Role::Admin);
        assert_eq!(member.role, Role::Employee);
    }

    #[tokio::test]
    async fn invalid_username_is_rejected_and_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(&dir);

        assert!(matches!(
            src.sign_in("x").await,
            Err(Error::InvalidUsername(_))
        ));
        assert_eq!(src.load_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn sign_out_forgets_the_user() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(&dir);
        src.sign_in("alice").await.unwrap();
        src.sign_out().await.unwrap();
        assert_eq!(src.load_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "not json").unwrap();
        assert!(matches!(
            source(&dir).load_user().await,
            Err(Error::Json(_))
        ));
    }
}
