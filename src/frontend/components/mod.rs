//! UI components and layouts.

pub mod common;
pub mod guard;
pub mod i18n;
pub mod layout;
