//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads raw input bytes; decoding is left to the core crate
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as raw bytes
    pub fn read_stdin() -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("Failed to read standard input")?;
        Ok(buffer)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
