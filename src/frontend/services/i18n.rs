//! Translation context handed to components.

use crate::backend::i18n::{
    DocumentLanguage, FallbackTranslations, Language, LanguageState, PreferenceStore, Translate,
    TranslationTable,
};
use dioxus::prelude::*;
use std::rc::Rc;

/// Durable storage available to the provider. Absent in headless renders.
#[derive(Clone)]
pub struct Preferences(pub Rc<dyn PreferenceStore>);

/// Sets `<html lang>` in the webview.
pub struct WebviewDocument;

impl DocumentLanguage for WebviewDocument {
    fn apply(&self, language: Language) {
        let js = format!("document.documentElement.lang = '{}';", language.code());
        spawn(async move {
            if let Err(e) = document::eval(&js).await {
                log::warn!("Failed to set document language: {e}");
            }
        });
    }
}

/// Handle returned by [`use_translation`].
#[derive(Clone, Copy)]
pub enum I18n {
    Provided(Signal<LanguageState>),
    /// No enclosing provider: French only, setter ignored.
    Fallback,
}

impl I18n {
    pub fn language(&self) -> Language {
        match self {
            Self::Provided(state) => state.read().language(),
            Self::Fallback => fallback().language(),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        match self {
            Self::Provided(state) => state.write().set_language(language),
            Self::Fallback => fallback().set_language(language),
        }
    }

    pub fn t(&self, key: &str) -> String {
        match self {
            Self::Provided(state) => state.read().t(key),
            Self::Fallback => fallback().t(key),
        }
    }
}

fn fallback() -> FallbackTranslations {
    FallbackTranslations::new(TranslationTable::embedded())
}

pub fn use_translation() -> I18n {
    match try_use_context::<Signal<LanguageState>>() {
        Some(state) => I18n::Provided(state),
        None => I18n::Fallback,
    }
}
