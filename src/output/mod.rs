//! Saving a finished letter.
//!
//! The text is written to a temporary file next to the destination, synced,
//! and renamed over the destination, so an interrupted save never leaves a
//! truncated letter behind. Parent directories are created as needed.

use crate::error::{LetterError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `text` verbatim to `destination`, replacing any existing file.
///
/// Refuses to write an empty letter.
pub fn save<P: AsRef<Path>>(destination: P, text: &str) -> Result<()> {
    let destination = destination.as_ref();

    if text.is_empty() {
        return Err(LetterError::ValidationError(
            "there is no cover letter to save; generate one first".to_string(),
        ));
    }

    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            LetterError::SourceError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        LetterError::SourceError(format!(
            "failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ))
    })?;

    temp.write_all(text.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| {
            LetterError::SourceError(format!(
                "failed to write '{}': {}",
                destination.display(),
                e
            ))
        })?;

    temp.persist(destination).map_err(|e| {
        LetterError::SourceError(format!(
            "failed to save '{}': {}",
            destination.display(),
            e.error
        ))
    })?;

    log::info!("saved {} bytes to '{}'", text.len(), destination.display());
    Ok(())
}
