use crate::backend::session::Role;
use crate::backend::utils::config::AppConfig;
use crate::frontend::app::Route;
use crate::frontend::app::root::PORTAL_CSS;
use crate::frontend::components::guard::ProtectedRoute;
use crate::frontend::components::layout::Navigation;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
fn Shell() -> Element {
    rsx! {
        style { dangerous_inner_html: PORTAL_CSS }

        div {
            class: "desktop",
            Navigation {}
            main {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Routes open to any signed-in profile.
#[component]
pub fn MemberLayout() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        ProtectedRoute {
            redirect_to: config.auth.login_path.clone(),
            Shell {}
        }
    }
}

/// Routes restricted to administrators.
#[component]
pub fn AdminLayout() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        ProtectedRoute {
            required_role: Role::Admin,
            redirect_to: config.auth.login_path.clone(),
            Shell {}
        }
    }
}
