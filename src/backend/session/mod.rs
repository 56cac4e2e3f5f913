//! Session model, observable store and the services that fill it.

pub mod model;
pub mod service;
pub mod source;
pub mod store;

pub use model::{Identity, Profile, Role, Session};
pub use service::AuthService;
pub use source::{LocalSessionSource, SessionSource};
pub use store::SessionStore;
