//! Font discovery and loading.
//!
//! The certificate needs a regular/bold pair of the same family with full
//! Latin Extended coverage (Polish diacritics). The same bytes feed both the
//! PDF embedding and the width measurement, so wrap decisions always match
//! what gets drawn.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::layout::FontMetrics;

/// Candidate (directory, regular file, bold file) triples, probed in order.
const CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "/usr/share/fonts/truetype/dejavu",
        "DejaVuSans.ttf",
        "DejaVuSans-Bold.ttf",
    ),
    ("/usr/share/fonts/TTF", "DejaVuSans.ttf", "DejaVuSans-Bold.ttf"),
    (
        "/usr/share/fonts/truetype/liberation",
        "LiberationSans-Regular.ttf",
        "LiberationSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/liberation",
        "LiberationSans-Regular.ttf",
        "LiberationSans-Bold.ttf",
    ),
    (
        "/System/Library/Fonts/Supplemental",
        "Arial.ttf",
        "Arial Bold.ttf",
    ),
];

/// Filenames tried inside a user-configured fonts directory.
const LOCAL_NAMES: &[(&str, &str)] = &[
    ("DejaVuSans.ttf", "DejaVuSans-Bold.ttf"),
    ("LiberationSans-Regular.ttf", "LiberationSans-Bold.ttf"),
];

/// A discovered regular/bold font file pair.
#[derive(Debug, Clone)]
pub struct FontPair {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

/// Probes `extra_dir` (if given) and then the known system directories for a
/// regular/bold pair where both files exist.
pub fn discover_font_pair(extra_dir: Option<&Path>) -> Result<FontPair, AppError> {
    if let Some(dir) = extra_dir {
        for (regular, bold) in LOCAL_NAMES {
            let pair = FontPair {
                regular: dir.join(regular),
                bold: dir.join(bold),
            };
            if pair.regular.is_file() && pair.bold.is_file() {
                return Ok(pair);
            }
        }
    }

    for (dir, regular, bold) in CANDIDATES {
        let dir = Path::new(dir);
        let pair = FontPair {
            regular: dir.join(regular),
            bold: dir.join(bold),
        };
        if pair.regular.is_file() && pair.bold.is_file() {
            return Ok(pair);
        }
    }

    Err(AppError::FontNotFound(
        "install fonts-dejavu or fonts-liberation, or set CERTGEN_FONTS_DIR".to_string(),
    ))
}

/// One loaded face: raw bytes for PDF embedding plus parsed metrics for
/// width measurement.
pub struct FaceData {
    pub bytes: Vec<u8>,
    pub metrics: FontMetrics,
}

impl FaceData {
    fn load(path: &Path) -> Result<Self, AppError> {
        let bytes = fs::read(path)?;
        let metrics = FontMetrics::from_bytes(bytes.clone())?;
        Ok(Self { bytes, metrics })
    }
}

pub struct LoadedFonts {
    pub regular: FaceData,
    pub bold: FaceData,
}

pub fn load_fonts(extra_dir: Option<&Path>) -> Result<LoadedFonts, AppError> {
    let pair = discover_font_pair(extra_dir)?;
    info!(
        "Fonts: {} / {}",
        pair.regular.display(),
        pair.bold.display()
    );
    Ok(LoadedFonts {
        regular: FaceData::load(&pair.regular)?,
        bold: FaceData::load(&pair.bold)?,
    })
}
