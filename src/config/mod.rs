//! Configuration module
//!
//! - Platform path resolution for settings and logs
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::Settings;
