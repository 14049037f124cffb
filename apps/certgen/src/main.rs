mod config;
mod errors;
mod layout;
mod models;
mod render;
mod storage;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_page_config;
use crate::models::CertificateRequest;
use crate::render::fonts::load_fonts;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!(
            "Usage: {} <request.json>",
            args.first().map(String::as_str).unwrap_or("certgen")
        );
        std::process::exit(1);
    }

    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("certgen v{}", env!("CARGO_PKG_VERSION"));

    let request = CertificateRequest::from_file(Path::new(&args[1]))?;
    info!(
        "Certificate for {}, {} task(s)",
        request.volunteer,
        request.tasks.len()
    );

    let fonts = load_fonts(config.fonts_dir.as_deref())?;
    let page_config = default_page_config();
    let output = storage::allocate_output_path(&config.output_dir)?;

    render::certificate::generate(&request, &fonts, &page_config, &output)?;
    info!("Wrote {}", output.display());

    Ok(())
}
