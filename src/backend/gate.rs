//! Route guard: decides whether a protected subtree renders, and where to
//! send the user when it must not.
//!
//! The decision is a pure function of the observed [`Session`], the guard's
//! requirements and the current path. [`AuthGate`] wraps it with the only
//! state it needs: the last redirect it issued, so unchanged inputs never
//! trigger a second navigation.

use crate::backend::session::{Role, Session};

/// Default target for unauthenticated visitors.
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// Location primitives the guard needs from the router.
pub trait Navigator {
    fn current_path(&self) -> String;
    /// Changes location without adding a history entry.
    fn replace(&self, path: &str);
}

/// Well-known paths the guard redirects between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePaths {
    pub auth_prefix: String,
    pub admin_home: String,
    pub member_home: String,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            auth_prefix: "/auth".into(),
            admin_home: "/admin/dashboard".into(),
            member_home: "/dashboard".into(),
        }
    }
}

impl GatePaths {
    /// Canonical landing route for `role`.
    pub fn home_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_home,
            Role::Employee => &self.member_home,
        }
    }

    pub fn is_auth_path(&self, path: &str) -> bool {
        path.strip_prefix(self.auth_prefix.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

/// What the guarded slot should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Nothing,
    Children,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub view: GateView,
    pub redirect: Option<String>,
}

impl GateDecision {
    const fn show(view: GateView) -> Self {
        Self {
            view,
            redirect: None,
        }
    }
}

/// Pure guard logic. `redirect` is `None` whenever the user is already where
/// the guard would send them.
pub fn decide(
    session: &Session,
    required_role: Option<Role>,
    redirect_to: &str,
    paths: &GatePaths,
    current_path: &str,
) -> GateDecision {
    if session.loading {
        return GateDecision::show(GateView::Loading);
    }

    if session.user.is_none() {
        let arrived = current_path == redirect_to || paths.is_auth_path(current_path);
        return GateDecision {
            view: GateView::Nothing,
            redirect: (!arrived).then(|| redirect_to.to_string()),
        };
    }

    let Some(profile) = session.profile.as_ref() else {
        return GateDecision::show(GateView::Nothing);
    };

    match required_role {
        Some(required) if profile.role != required => {
            let home = paths.home_for(profile.role);
            GateDecision {
                view: GateView::Nothing,
                redirect: (current_path != home).then(|| home.to_string()),
            }
        }
        _ => GateDecision::show(GateView::Children),
    }
}

/// Everything a decision depends on, minus the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Inputs {
    user: Option<String>,
    role: Option<Role>,
    loading: bool,
    required_role: Option<Role>,
    redirect_to: String,
}

/// Stateful guard for one protected subtree.
#[derive(Debug, Clone)]
pub struct AuthGate {
    required_role: Option<Role>,
    redirect_to: String,
    paths: GatePaths,
    last_redirect: Option<(Inputs, String)>,
}

impl AuthGate {
    pub fn new(
        required_role: Option<Role>,
        redirect_to: impl Into<String>,
        paths: GatePaths,
    ) -> Self {
        Self {
            required_role,
            redirect_to: redirect_to.into(),
            paths,
            last_redirect: None,
        }
    }

    /// Updates the guard's requirements, e.g. when component props change.
    pub fn set_requirements(&mut self, required_role: Option<Role>, redirect_to: &str) {
        self.required_role = required_role;
        redirect_to.clone_into(&mut self.redirect_to);
    }

    /// Decides and performs at most one replace navigation.
    pub fn evaluate(&mut self, session: &Session, navigator: &dyn Navigator) -> GateView {
        let current = navigator.current_path();
        let decision = decide(
            session,
            self.required_role,
            &self.redirect_to,
            &self.paths,
            &current,
        );

        // Arriving anywhere that needs no redirect ends the previous one.
        let Some(target) = decision.redirect else {
            self.last_redirect = None;
            return decision.view;
        };

        let inputs = Inputs {
            user: session.user.as_ref().map(|u| u.id.clone()),
            role: session.role(),
            loading: session.loading,
            required_role: self.required_role,
            redirect_to: self.redirect_to.clone(),
        };

        let already_issued = self
            .last_redirect
            .as_ref()
            .is_some_and(|(prev, prev_target)| *prev == inputs && *prev_target == target);

        if !already_issued {
            log::debug!("Guard redirecting {current} -> {target}");
            navigator.replace(&target);
            self.last_redirect = Some((inputs, target));
        }

        decision.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::{Identity, Profile};
    use std::cell::RefCell;

    /// Router double; `follow` controls whether `replace` moves the location.
    struct FakeNavigator {
        path: RefCell<String>,
        replaced: RefCell<Vec<String>>,
        follow: bool,
    }

    impl FakeNavigator {
        fn at(path: &str) -> Self {
            Self {
                path: RefCell::new(path.into()),
                replaced: RefCell::new(Vec::new()),
                follow: true,
            }
        }

        fn stuck_at(path: &str) -> Self {
            Self {
                follow: false,
                ..Self::at(path)
            }
        }

        fn calls(&self) -> Vec<String> {
            self.replaced.borrow().clone()
        }
    }

    impl Navigator for FakeNavigator {
        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn replace(&self, path: &str) {
            self.replaced.borrow_mut().push(path.to_string());
            if self.follow {
                *self.path.borrow_mut() = path.to_string();
            }
        }
    }

    fn signed_in(role: Option<Role>) -> Session {
        Session {
            user: Some(Identity::new("u1")),
            profile: role.map(|role| Profile {
                user_id: "u1".into(),
                display_name: "User One".into(),
                role,
            }),
            loading: false,
        }
    }

    fn gate(required: Option<Role>) -> AuthGate {
        AuthGate::new(required, DEFAULT_LOGIN_PATH, GatePaths::default())
    }

    #[test]
    fn loading_shows_spinner_without_navigation() {
        let nav = FakeNavigator::at("/dashboard");
        let view = gate(None).evaluate(&Session::pending(), &nav);
        assert_eq!(view, GateView::Loading);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn anonymous_visitor_is_redirected_once() {
        let nav = FakeNavigator::stuck_at("/dashboard");
        let mut guard = gate(None);
        let session = Session::signed_out();

        for _ in 0..3 {
            assert_eq!(guard.evaluate(&session, &nav), GateView::Nothing);
        }
        assert_eq!(nav.calls(), vec![DEFAULT_LOGIN_PATH.to_string()]);
    }

    #[test]
    fn anonymous_visitor_on_auth_pages_stays_put() {
        for path in ["/auth/login", "/auth/register", "/auth"] {
            let nav = FakeNavigator::at(path);
            gate(None).evaluate(&Session::signed_out(), &nav);
            assert!(nav.calls().is_empty(), "navigated away from {path}");
        }
    }

    #[test]
    fn auth_prefix_matches_whole_segments() {
        let paths = GatePaths::default();
        assert!(paths.is_auth_path("/auth/login"));
        assert!(!paths.is_auth_path("/authors"));
    }

    #[test]
    fn custom_redirect_target_is_honoured() {
        let nav = FakeNavigator::at("/courses");
        let mut guard = AuthGate::new(None, "/welcome", GatePaths::default());
        guard.evaluate(&Session::signed_out(), &nav);
        assert_eq!(nav.calls(), vec!["/welcome".to_string()]);

        // Arrived: no further navigation.
        guard.evaluate(&Session::signed_out(), &nav);
        assert_eq!(nav.calls().len(), 1);
    }

    #[test]
    fn user_without_profile_waits() {
        let nav = FakeNavigator::at("/admin/blog");
        let view = gate(Some(Role::Admin)).evaluate(&signed_in(None), &nav);
        assert_eq!(view, GateView::Nothing);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn employee_on_admin_route_goes_to_member_home() {
        let nav = FakeNavigator::at("/admin/analytics");
        let view = gate(Some(Role::Admin)).evaluate(&signed_in(Some(Role::Employee)), &nav);
        assert_eq!(view, GateView::Nothing);
        assert_eq!(nav.calls(), vec!["/dashboard".to_string()]);
    }

    #[test]
    fn admin_on_member_only_route_goes_to_admin_home() {
        let nav = FakeNavigator::at("/dashboard");
        let view = gate(Some(Role::Employee)).evaluate(&signed_in(Some(Role::Admin)), &nav);
        assert_eq!(view, GateView::Nothing);
        assert_eq!(nav.calls(), vec!["/admin/dashboard".to_string()]);
    }

    #[test]
    fn role_mismatch_never_renders_even_when_already_home() {
        let nav = FakeNavigator::at("/dashboard");
        let view = gate(Some(Role::Admin)).evaluate(&signed_in(Some(Role::Employee)), &nav);
        assert_eq!(view, GateView::Nothing);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn matching_role_renders_children() {
        let nav = FakeNavigator::at("/admin/blog");
        let view = gate(Some(Role::Admin)).evaluate(&signed_in(Some(Role::Admin)), &nav);
        assert_eq!(view, GateView::Children);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn no_required_role_renders_any_profile() {
        let nav = FakeNavigator::at("/dashboard");
        let view = gate(None).evaluate(&signed_in(Some(Role::Employee)), &nav);
        assert_eq!(view, GateView::Children);
    }

    #[test]
    fn changed_inputs_may_redirect_again() {
        let nav = FakeNavigator::stuck_at("/admin/analytics");
        let mut guard = gate(Some(Role::Admin));

        guard.evaluate(&Session::signed_out(), &nav);
        guard.evaluate(&signed_in(Some(Role::Employee)), &nav);

        assert_eq!(
            nav.calls(),
            vec![DEFAULT_LOGIN_PATH.to_string(), "/dashboard".to_string()]
        );
    }

    #[test]
    fn leaving_the_login_page_redirects_again() {
        let nav = FakeNavigator::at("/dashboard");
        let mut guard = gate(None);
        let session = Session::signed_out();

        guard.evaluate(&session, &nav);
        guard.evaluate(&session, &nav);
        assert_eq!(nav.current_path(), DEFAULT_LOGIN_PATH);

        *nav.path.borrow_mut() = "/courses".into();
        assert_eq!(guard.evaluate(&session, &nav), GateView::Nothing);
        assert_eq!(
            nav.calls(),
            vec![DEFAULT_LOGIN_PATH.to_string(), DEFAULT_LOGIN_PATH.to_string()]
        );
        assert_eq!(nav.current_path(), DEFAULT_LOGIN_PATH);
    }

    #[test]
    fn decide_is_quiet_when_already_at_target() {
        let decision = decide(
            &Session::signed_out(),
            None,
            DEFAULT_LOGIN_PATH,
            &GatePaths::default(),
            DEFAULT_LOGIN_PATH,
        );
        assert_eq!(decision.redirect, None);
    }
}
