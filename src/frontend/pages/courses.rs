use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;

#[component]
pub fn Courses() -> Element {
    let i18n = use_translation();

    rsx! {
        section {
            class: "page courses",
            h1 { {i18n.t("courses.title")} }
            p { class: "empty", {i18n.t("courses.empty")} }
        }
    }
}
