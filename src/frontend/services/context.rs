//! Authentication context and session bridging.

use crate::backend::session::{AuthService, LocalSessionSource, Session, SessionStore};
use dioxus::prelude::*;
use std::rc::Rc;

pub type PortalAuth = AuthService<LocalSessionSource>;

/// Mirrors the shared [`SessionStore`] into a signal for the calling
/// component. The subscription ends when the component unmounts.
pub fn use_session() -> Signal<Session> {
    let store = use_context::<SessionStore>();
    let mut session = use_signal(|| store.snapshot());

    use_hook(move || {
        let subscription = store.subscribe(move |next: &Session| session.set(next.clone()));
        Rc::new(subscription)
    });

    session
}

pub fn use_auth() -> PortalAuth {
    use_context::<PortalAuth>()
}

/// Display name of the signed-in profile, or the user id while the profile
/// is still loading.
pub fn display_name(session: &Session) -> Option<String> {
    session
        .profile
        .as_ref()
        .map(|p| p.display_name.clone())
        .or_else(|| session.user.as_ref().map(|u| u.id.clone()))
}
