//! Frontend services: context handles and hooks shared by components.

pub mod context;
pub mod i18n;
