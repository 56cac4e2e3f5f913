//! Client-side translations and the persisted language preference.

pub mod language;
pub mod state;
pub mod storage;
pub mod table;

pub use language::Language;
pub use state::{
    DocumentLanguage, FallbackTranslations, LanguagePhase, LanguageState, NoDocument, Translate,
};
pub use storage::{FileStore, LANGUAGE_KEY, MemoryStore, PreferenceStore, get_initial_language};
pub use table::TranslationTable;
