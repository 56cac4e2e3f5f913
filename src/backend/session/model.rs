//! Session data observed by the route guard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization role carried by a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
}

/// Authentication state as published by the session collaborator.
///
/// `loading` starts `true` and flips to `false` once per resolution;
/// `profile` is never published before `user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<Identity>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl Session {
    /// State before the collaborator has resolved anything.
    pub const fn pending() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
        }
    }

    pub const fn signed_out() -> Self {
        Self {
            user: None,
            profile: None,
            loading: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}
