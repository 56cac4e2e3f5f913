use crate::frontend::app::Route;
use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = use_translation();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section {
            class: "page not-found",
            h1 { {i18n.t("not_found.title")} }
            code { "{path}" }
            Link { to: Route::Dashboard {}, {i18n.t("common.back_home")} }
        }
    }
}
