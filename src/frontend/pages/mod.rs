//! Page components. Content is intentionally thin; pages compose
//! translated headings and leave data to future modules.

pub mod admin;
pub mod courses;
pub mod dashboard;
pub mod login;
pub mod not_found;

pub use admin::{AdminDashboard, Analytics, BlogAdmin};
pub use courses::Courses;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
