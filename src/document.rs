//! Reading and rewriting the target file.

use std::fs;
use std::io;
use std::path::Path;

use similar::TextDiff;

use crate::config::StripConfig;
use crate::error::StripError;
use crate::stripper::{strip_content, StripOutcome};

/// Reads the whole file and decodes it as UTF-8.
pub fn read_document(path: &Path) -> Result<String, StripError> {
    let bytes = fs::read(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| StripError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncates `path` and writes `content` to it.
///
/// The file is opened through the path, so symlinks are followed and the
/// existing permissions are kept. The write is not atomic.
pub fn write_document(path: &Path, content: &str) -> Result<(), StripError> {
    fs::write(path, content).map_err(|source| StripError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Strips the file named by `config` and writes the result back.
///
/// The file is rewritten even when no line was removed.
pub fn strip_file(config: &StripConfig) -> Result<StripOutcome, StripError> {
    let path = config.path.as_path();
    log::debug!("Reading {}", path.display());

    let original = read_document(path)?;
    let outcome = strip_content(&original, &config.start_marker, &config.end_marker);

    log::debug!(
        "Scanned {} lines, removing {}",
        outcome.lines_read,
        outcome.lines_removed
    );

    if !outcome.start_marker_found {
        log::info!(
            "No line containing {:?} found in {}",
            config.start_marker,
            path.display()
        );
    } else if outcome.is_unchanged() {
        log::info!("No lines removed from {}", path.display());
    }

    if outcome.unterminated {
        log::warn!(
            "No {:?} after the last {:?}; removed everything up to the end of {}",
            config.end_marker,
            config.start_marker,
            path.display()
        );
    }

    if log::log_enabled!(log::Level::Debug) && !outcome.is_unchanged() {
        let diff = TextDiff::from_lines(&original, &outcome.content)
            .unified_diff()
            .header("original", "modified")
            .to_string();
        log::debug!("Changes to {}:\n{}", path.display(), diff);
    }

    write_document(path, &outcome.content)?;

    Ok(outcome)
}
