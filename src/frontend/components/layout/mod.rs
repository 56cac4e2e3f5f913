//! Layout components.

pub mod auth;
pub mod main;
pub mod nav;

pub use auth::AuthLayout;
pub use main::{AdminLayout, MemberLayout};
pub use nav::Navigation;
