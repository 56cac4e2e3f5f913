use crate::backend::session::Role;
use crate::frontend::app::Route;
use crate::frontend::components::common::use_announcer;
use crate::frontend::components::i18n::LanguageSwitcher;
use crate::frontend::services::context::{display_name, use_auth, use_session};
use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Navigation() -> Element {
    let i18n = use_translation();
    let session = use_session();
    let auth = use_auth();
    let announcer = use_announcer();

    let is_admin = session.read().role() == Some(Role::Admin);
    let name = display_name(&session.read()).unwrap_or_default();

    let sign_out = move |_: MouseEvent| {
        let auth = auth.clone();
        spawn(async move {
            auth.sign_out().await;
            if let Some(mut announcer) = announcer {
                announcer.announce(i18n.t("auth.signed_out"));
            }
        });
    };

    rsx! {
        nav {
            class: "navigation",
            span { class: "app-name", {i18n.t("app.name")} }
            ul {
                class: "nav-items",
                li { class: "nav-item",
                    Link { to: Route::Dashboard {}, {i18n.t("nav.dashboard")} }
                }
                li { class: "nav-item",
                    Link { to: Route::Courses {}, {i18n.t("nav.courses")} }
                }
                if is_admin {
                    li { class: "nav-item",
                        Link { to: Route::AdminDashboard {}, {i18n.t("nav.admin")} }
                    }
                    li { class: "nav-item",
                        Link { to: Route::Analytics {}, {i18n.t("nav.analytics")} }
                    }
                    li { class: "nav-item",
                        Link { to: Route::BlogAdmin {}, {i18n.t("nav.blog")} }
                    }
                }
            }
            div {
                class: "nav-footer",
                span { class: "user-name", "{name}" }
                LanguageSwitcher {}
                button {
                    class: "signout-btn",
                    onclick: sign_out,
                    {i18n.t("nav.signout")}
                }
            }
        }
    }
}
