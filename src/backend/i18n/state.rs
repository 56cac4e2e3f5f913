//! Active language plus the lookup bound to it.

use crate::backend::i18n::language::Language;
use crate::backend::i18n::storage::{LANGUAGE_KEY, PreferenceStore, get_initial_language};
use crate::backend::i18n::table::TranslationTable;
use std::rc::Rc;

/// Receives the root document's `lang` attribute.
pub trait DocumentLanguage {
    fn apply(&self, language: Language);
}

/// For contexts without a document.
pub struct NoDocument;

impl DocumentLanguage for NoDocument {
    fn apply(&self, _language: Language) {}
}

/// Whether the stored preference has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguagePhase {
    /// Before first mount. Renders as French so the first frame never
    /// depends on storage.
    Unresolved,
    Resolved(Language),
}

/// What components see: the current language, a setter and `t`.
pub trait Translate {
    fn language(&self) -> Language;
    fn set_language(&mut self, language: Language);
    fn t(&self, key: &str) -> String;
}

/// Language state owned by one provider.
pub struct LanguageState {
    phase: LanguagePhase,
    table: &'static TranslationTable,
    store: Option<Rc<dyn PreferenceStore>>,
    document: Rc<dyn DocumentLanguage>,
}

impl LanguageState {
    pub fn new(
        table: &'static TranslationTable,
        store: Option<Rc<dyn PreferenceStore>>,
        document: Rc<dyn DocumentLanguage>,
    ) -> Self {
        Self {
            phase: LanguagePhase::Unresolved,
            table,
            store,
            document,
        }
    }

    pub fn phase(&self) -> LanguagePhase {
        self.phase
    }

    /// Reads the stored preference. Only the first call from `Unresolved`
    /// has an effect; returns whether the visible language changed.
    pub fn resolve(&mut self) -> bool {
        if self.phase != LanguagePhase::Unresolved {
            return false;
        }

        let language = get_initial_language(self.store.as_deref());
        log::debug!("Resolved stored language preference: {language}");
        self.phase = LanguagePhase::Resolved(language);
        language != Language::default()
    }
}

impl Translate for LanguageState {
    fn language(&self) -> Language {
        match self.phase {
            LanguagePhase::Unresolved => Language::default(),
            LanguagePhase::Resolved(language) => language,
        }
    }

    fn set_language(&mut self, language: Language) {
        self.phase = LanguagePhase::Resolved(language);

        if let Some(store) = &self.store {
            if let Err(e) = store.write(LANGUAGE_KEY, language.code()) {
                log::warn!("Failed to persist language preference: {e}");
            }
        }
        self.document.apply(language);
    }

    fn t(&self, key: &str) -> String {
        self.table.translate(self.language(), key)
    }
}

/// Used when no provider encloses a component: French only, setter ignored.
pub struct FallbackTranslations {
    table: &'static TranslationTable,
}

impl FallbackTranslations {
    pub fn new(table: &'static TranslationTable) -> Self {
        Self { table }
    }
}

impl Translate for FallbackTranslations {
    fn language(&self) -> Language {
        Language::Fr
    }

    fn set_language(&mut self, _language: Language) {}

    fn t(&self, key: &str) -> String {
        self.table.translate(Language::Fr, key)
    }
}
