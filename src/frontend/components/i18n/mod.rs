//! Language provider and picker.

pub mod provider;
pub mod switcher;

pub use provider::I18nProvider;
pub use switcher::LanguageSwitcher;
