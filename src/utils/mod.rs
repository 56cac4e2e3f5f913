//! Custom utilities.

pub mod dirs;
pub mod error;
pub mod observable;

pub use error::{Error, Result};
pub use observable::{Subject, Subscription};
