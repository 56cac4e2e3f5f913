//! Drives a [`SessionStore`] from a [`SessionSource`].

use crate::backend::session::model::Identity;
use crate::backend::session::source::SessionSource;
use crate::backend::session::store::SessionStore;
use crate::utils::error::Result;
use std::rc::Rc;

pub struct AuthService<S> {
    source: Rc<S>,
    store: SessionStore,
}

impl<S> Clone for AuthService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            store: self.store.clone(),
        }
    }
}

impl<S: SessionSource> AuthService<S> {
    pub fn new(source: S, store: SessionStore) -> Self {
        Self {
            source: Rc::new(source),
            store,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Resolves the saved session. The store leaves the loading state exactly
    /// once, whatever the outcome; a failing source counts as signed out.
    /// A sign-in that completed in the meantime wins.
    pub async fn restore(&self) {
        let loaded = self.source.load_user().await;
        if self.store.snapshot().user.is_some() {
            log::debug!("Session already established; skipping restore");
            return;
        }
        match loaded {
            Ok(Some(user)) => self.attach(user).await,
            Ok(None) => self.store.publish_signed_out(),
            Err(e) => {
                log::warn!("Failed to restore session: {e}");
                self.store.publish_signed_out();
            }
        }
    }

    pub async fn sign_in(&self, username: &str) -> Result<()> {
        let user = self.source.sign_in(username).await?;
        log::info!("Signed in as {}", user.id);
        self.attach(user).await;
        Ok(())
    }

    pub async fn sign_out(&self) {
        if let Err(e) = self.source.sign_out().await {
            log::error!("Failed to clear saved session: {e}");
        }
        self.store.publish_signed_out();
    }

    async fn attach(&self, user: Identity) {
        self.store.publish_user(user.clone());
        match self.source.load_profile(&user).await {
            Ok(profile) => self.store.publish_profile(profile),
            Err(e) => log::error!("Failed to load profile for {}: {e}", user.id),
        }
    }
}
