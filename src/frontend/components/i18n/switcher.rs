use crate::backend::i18n::Language;
use crate::frontend::components::common::use_announcer;
use crate::frontend::services::i18n::use_translation;
use dioxus::prelude::*;

#[component]
pub fn LanguageSwitcher() -> Element {
    let mut i18n = use_translation();
    let announcer = use_announcer();
    let current = i18n.language();

    rsx! {
        div {
            class: "language-switcher",
            role: "group",
            aria_label: i18n.t("language.label"),
            for language in Language::ALL {
                button {
                    key: "{language}",
                    class: if language == current { "lang-btn active" } else { "lang-btn" },
                    aria_pressed: language == current,
                    lang: language.code(),
                    onclick: move |_| {
                        if language == i18n.language() {
                            return;
                        }
                        i18n.set_language(language);
                        if let Some(mut announcer) = announcer {
                            announcer.announce(i18n.t("language.changed"));
                        }
                    },
                    {i18n.t(&format!("language.{}", language.code()))}
                }
            }
        }
    }
}
