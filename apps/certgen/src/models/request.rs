//! The externally sourced certificate request.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::AppError;

/// One certificate's worth of input, parsed straight from the request JSON.
/// No validation beyond deserialization: a missing key fails the parse,
/// unknown keys are ignored, field contents are taken verbatim (`date` is a
/// pre-formatted display string).
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateRequest {
    pub volunteer: String,
    pub organizer: String,
    pub date: String,
    pub event: String,
    /// Task descriptions, rendered as bullets in input order.
    pub tasks: Vec<String>,
}

impl CertificateRequest {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
