//! Auth-gated wrappers.

pub mod protected_route;

pub use protected_route::ProtectedRoute;
