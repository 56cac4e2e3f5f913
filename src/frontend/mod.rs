//! Frontend of the portal: routing, layouts, pages and UI services.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
