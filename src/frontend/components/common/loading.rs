use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    let i18n = use_translation();

    rsx! {
        div {
            class: "loading",
            role: "status",
            div { class: "loading-spinner" }
            span { class: "loading-text", {i18n.t("common.loading")} }
        }
    }
}
