//! Error handling for the CO2 dashboard
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Errors from reading or parsing the CSV dataset
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors related to dataset contents (missing columns, bad rows)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DashboardError>,
    },
}

impl DashboardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DashboardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Dataset("missing column 'country'".to_string());
        assert_eq!(err.to_string(), "Dataset error: missing column 'country'");
    }

    #[test]
    fn test_error_with_context() {
        let err = DashboardError::Dataset("test".to_string());
        let with_ctx = err.with_context("Failed to load dataset");
        assert!(with_ctx.to_string().contains("Failed to load dataset"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: Result<()> = Err(DashboardError::Config("bad json".to_string()));
        let res = res.context("while restoring app state");
        assert!(res
            .unwrap_err()
            .to_string()
            .contains("while restoring app state"));
    }
}
