use std::path::PathBuf;

use anyhow::Result;

/// Runtime configuration loaded from environment variables. Everything has a
/// default; a `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Extra directory searched first for the font pair.
    pub fonts_dir: Option<PathBuf>,
    /// Directory the numbered certificates are written into.
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            fonts_dir: std::env::var("CERTGEN_FONTS_DIR").ok().map(PathBuf::from),
            output_dir: std::env::var("CERTGEN_OUTPUT_DIR")
                .unwrap_or_else(|_| "certificates".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
