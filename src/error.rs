//! Custom error types for the dashboard
//!
//! The dashboard core (data, routing, renderers) cannot fail. Errors only
//! arise in the shell around it: terminal I/O, the settings file, and
//! writing exports.

use thiserror::Error;

/// The main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Unknown view name given on the command line
    #[error("Unknown {kind}: {name}")]
    Unknown { kind: &'static str, name: String },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DashboardError {
    /// Create an "unknown view" error
    pub fn unknown_view(name: impl Into<String>) -> Self {
        Self::Unknown {
            kind: "view",
            name: name.into(),
        }
    }

    /// Check if this is an "unknown name" error
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DashboardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Config("bad tick rate".into());
        assert_eq!(err.to_string(), "Configuration error: bad tick rate");
    }

    #[test]
    fn test_unknown_view_error() {
        let err = DashboardError::unknown_view("overview");
        assert_eq!(err.to_string(), "Unknown view: overview");
        assert!(err.is_unknown());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
