//! Backend of the application: session, route guard, translations.

pub mod gate;
pub mod i18n;
pub mod session;
pub mod utils;
