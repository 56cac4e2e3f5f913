use crate::frontend::app::Route;
use crate::frontend::app::root::PORTAL_CSS;
use crate::frontend::components::i18n::LanguageSwitcher;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

/// Wraps the sign-in pages. Nothing here is gated.
#[component]
pub fn AuthLayout() -> Element {
    rsx! {
        style { dangerous_inner_html: PORTAL_CSS }

        div {
            class: "auth-container",
            header {
                class: "auth-header",
                LanguageSwitcher {}
            }
            Outlet::<Route> {}
        }
    }
}
