//! Application root and routing.

pub mod root;
pub mod routes;

pub use root::{App, Setup, install};
pub use routes::Route;
