//! Route protection component.

use crate::backend::gate::{self, AuthGate, DEFAULT_LOGIN_PATH, GateView};
use crate::backend::session::Role;
use crate::backend::utils::config::AppConfig;
use crate::frontend::app::Route;
use crate::frontend::components::common::Loading;
use crate::frontend::services::context::use_session;
use dioxus::prelude::*;
use dioxus_router::{Navigator as RouterNavigator, use_navigator, use_route};
use std::cell::RefCell;
use std::rc::Rc;

/// Adapts the router to the guard's navigation primitives.
struct RouterLocation {
    navigator: RouterNavigator,
    path: String,
}

impl gate::Navigator for RouterLocation {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn replace(&self, path: &str) {
        self.navigator.replace(path);
    }
}

/// Renders `children` only for signed-in users holding `required_role`
/// (any role when unset). Everyone else is sent to `redirect_to` or to
/// their role's home.
#[component]
pub fn ProtectedRoute(
    required_role: Option<Role>,
    #[props(default = DEFAULT_LOGIN_PATH.to_string())] redirect_to: String,
    children: Element,
) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let current_path = use_route::<Route>().to_string();
    let paths = use_context::<AppConfig>().auth.gate_paths();

    let guard = use_hook(|| {
        Rc::new(RefCell::new(AuthGate::new(
            required_role,
            redirect_to.clone(),
            paths.clone(),
        )))
    });

    let view = gate::decide(
        &session.read(),
        required_role,
        &redirect_to,
        &paths,
        &current_path,
    )
    .view;

    // Navigation happens after render; reruns on session, prop or route changes.
    use_effect(use_reactive(
        (&required_role, &redirect_to, &current_path),
        move |(required_role, redirect_to, current_path)| {
            let snapshot = session.read().clone();
            let location = RouterLocation {
                navigator,
                path: current_path,
            };
            let mut guard = guard.borrow_mut();
            guard.set_requirements(required_role, &redirect_to);
            guard.evaluate(&snapshot, &location);
        },
    ));

    match view {
        GateView::Loading => rsx! { Loading {} },
        GateView::Nothing => rsx! {},
        GateView::Children => rsx! { {children} },
    }
}
