//! Common reusable components.

pub mod live_region;
pub mod loading;

pub use live_region::{Announcer, LiveRegion, use_announcer};
pub use loading::Loading;
