use crate::frontend::services::context::{display_name, use_session};
use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let i18n = use_translation();
    let session = use_session();
    let name = display_name(&session.read()).unwrap_or_default();

    rsx! {
        section {
            class: "page dashboard",
            h1 { {i18n.t("dashboard.title")} }
            p { class: "greeting", {format!("{} {name}", i18n.t("dashboard.greeting"))} }
        }
    }
}
