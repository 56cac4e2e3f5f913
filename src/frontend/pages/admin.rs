//! Admin area pages.

use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;

#[component]
pub fn AdminDashboard() -> Element {
    let i18n = use_translation();

    rsx! {
        section {
            class: "page admin-dashboard",
            h1 { {i18n.t("admin.dashboard.title")} }
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    let i18n = use_translation();

    rsx! {
        section {
            class: "page analytics",
            h1 { {i18n.t("admin.analytics.title")} }
        }
    }
}

#[component]
pub fn BlogAdmin() -> Element {
    let i18n = use_translation();

    rsx! {
        section {
            class: "page blog-admin",
            h1 { {i18n.t("admin.blog.title")} }
            p { class: "empty", {i18n.t("admin.blog.empty")} }
        }
    }
}
