//! Sequential output filename allocation.

use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Returns `<dir>/zaswiadczenie_<id>.pdf` for the smallest non-negative `id`
/// with no existing file, creating `dir` first if needed. The scan restarts
/// from 0 on every run; nothing is persisted, so an existing file is never
/// overwritten and each run grows the directory by exactly one certificate.
pub fn allocate_output_path(dir: &Path) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(dir)?;
    let path = (0u32..)
        .map(|id| dir.join(format!("zaswiadczenie_{id}.pdf")))
        .find(|p| !p.exists())
        .unwrap_or_else(|| unreachable!("u32 id space exhausted"));
    Ok(path)
}
