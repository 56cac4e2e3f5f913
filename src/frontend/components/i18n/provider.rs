use crate::backend::i18n::{LanguageState, TranslationTable};
use crate::frontend::services::i18n::{Preferences, WebviewDocument};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shares one [`LanguageState`] with every descendant.
///
/// The first frame is always French. Right after mount the stored
/// preference is read once, which re-renders consumers if it differs.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let preferences = try_use_context::<Preferences>();
    let mut state = use_signal(|| {
        LanguageState::new(
            TranslationTable::embedded(),
            preferences.map(|p| p.0),
            Rc::new(WebviewDocument),
        )
    });
    use_context_provider(|| state);

    use_effect(move || {
        if state.with_mut(LanguageState::resolve) {
            log::info!("Restored stored language preference");
        }
    });

    rsx! { {children} }
}
