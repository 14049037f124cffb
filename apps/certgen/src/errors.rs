use thiserror::Error;

/// Application-level error type. The binary surfaces these through
/// `anyhow::Result` in `main`, so any variant terminates the process with a
/// non-zero status and the full error chain.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No usable font pair found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParse(String),

    #[error("PDF error: {0}")]
    Pdf(String),
}
