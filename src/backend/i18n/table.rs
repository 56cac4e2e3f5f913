//! Static translation catalog.

use crate::backend::i18n::language::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

const EN_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/locales/en.json"));
const FR_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/locales/fr.json"));

static EMBEDDED: OnceLock<TranslationTable> = OnceLock::new();

/// `(language, key) -> text`. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// The catalog shipped in `assets/locales`, parsed on first use.
    pub fn embedded() -> &'static Self {
        EMBEDDED.get_or_init(|| {
            let mut table = Self::default();
            for (language, json) in [(Language::En, EN_JSON), (Language::Fr, FR_JSON)] {
                match serde_json::from_str::<HashMap<String, String>>(json) {
                    Ok(entries) => {
                        log::debug!("Loaded {} {language} translations", entries.len());
                        table.entries.insert(language, entries);
                    }
                    Err(e) => log::error!("Failed to parse {language} translations: {e}"),
                }
            }
            table
        })
    }

    pub fn with_language<K, V>(
        mut self,
        language: Language,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.insert(
            language,
            entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        );
        self
    }

    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Looks `key` up in `language`, then in French, then returns the key.
    pub fn translate(&self, language: Language, key: &str) -> String {
        self.get(language, key)
            .or_else(|| self.get(Language::Fr, key))
            .unwrap_or(key)
            .to_string()
    }
}
