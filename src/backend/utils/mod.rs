//! Utility modules for the portal backend.

/// Application configuration stored as JSON in the data directory.
pub mod config;
