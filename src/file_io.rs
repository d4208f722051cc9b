//! File collaborators: whole-buffer input provider and output sink.
//!
//! The core never partially consumes a stream. Reads materialize the entire
//! file or fail; writes go through a temporary sibling file and a rename so
//! the destination is either fully written or untouched.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TailsigError};

/// Reads the complete contents of `path`, enforcing the configured size
/// ceiling before touching the data.
pub fn read_file_bytes(path: &Path, config: &Config) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|source| TailsigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let limit = config.max_file_size();
    if metadata.len() > limit {
        return Err(TailsigError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let buffer = fs::read(path).map_err(|source| TailsigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Writes `data` to `path` atomically: a temporary file in the same
/// directory is written first, then renamed over the destination.
pub fn write_file_bytes(path: &Path, data: &[u8]) -> Result<()> {
    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, data).map_err(|source| TailsigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TailsigError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Derives the output path for `input` when none is given: the input path
/// with its extension replaced by the configured one.
pub fn derived_output_path(input: &Path, config: &Config) -> PathBuf {
    input.with_extension(config.signed_extension())
}

/// Resolves the destination for a transform, refusing in-place overwrites
/// unless the configuration allows them.
pub fn resolve_output_path(
    input: &Path,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<PathBuf> {
    let output = output.unwrap_or_else(|| derived_output_path(input, config));
    if output.as_path() == input && !config.allow_in_place() {
        return Err(TailsigError::InPlaceRefused {
            path: output,
        });
    }
    Ok(output)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
