//! Observable session shared between the auth collaborator and the guards.

use crate::backend::session::model::{Identity, Profile, Session};
use crate::utils::observable::{Subject, Subscription};

/// Cheap-to-clone handle on the current [`Session`].
#[derive(Clone)]
pub struct SessionStore {
    subject: Subject<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            subject: Subject::new(Session::pending()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.subject.get()
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&Session) + 'static) -> Subscription {
        self.subject.subscribe(callback)
    }

    /// Publishes a signed-in user. Loading is over; the profile follows later.
    pub fn publish_user(&self, user: Identity) {
        log::info!("Session resolved for user {}", user.id);
        self.subject.set(Session {
            user: Some(user),
            profile: None,
            loading: false,
        });
    }

    /// Attaches a profile to the current user. Ignored when no user is
    /// signed in or the profile belongs to someone else.
    pub fn publish_profile(&self, profile: Profile) {
        let current = self.subject.get();
        match current.user {
            Some(ref user) if user.id == profile.user_id => {
                log::info!("Profile loaded for {} ({})", user.id, profile.role);
                self.subject.update(|session| session.profile = Some(profile));
            }
            _ => log::warn!(
                "Dropping profile for {}: no matching signed-in user",
                profile.user_id
            ),
        }
    }

    pub fn publish_signed_out(&self) {
        log::info!("Session resolved without a user");
        self.subject.set(Session::signed_out());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
