//! This crate defines logic to read points from a csv source, to persist them as a json
//! point list and to write pairwise distance reports.
//!

use std::fmt;

mod model;
pub use self::model::{ApiPoint, deserialize_points, serialize_points};

mod source;
pub use self::source::{read_csv_points, write_csv_points};

mod report;
pub use self::report::DistanceReportWriter;

/// A format error.
#[derive(Clone, Debug)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}
