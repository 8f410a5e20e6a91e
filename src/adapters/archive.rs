use crate::domain::ports::Extractor;
use crate::utils::error::{DownloadError, Result};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

/// Writes every entry of an in-memory ZIP archive under a destination directory.
///
/// Entry names are kept verbatim. Existing files are truncated and rewritten,
/// so extracting the same archive twice leaves identical content.
///
/// Entries with absolute or `..` names fail the whole archive with
/// `UnsafeEntryError`; they are not re-rooted under the destination the way
/// Python's `ZipFile.extractall` strips a leading `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl ZipExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for ZipExtractor {
    fn extract(&self, payload: &[u8], destination: &Path) -> Result<usize> {
        let mut archive = ZipArchive::new(Cursor::new(payload))?;
        tracing::debug!(
            "Extracting {} entries into {}",
            archive.len(),
            destination.display()
        );

        fs::create_dir_all(destination)?;

        let mut written = 0;
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;

            let relative = entry
                .enclosed_name()
                .ok_or_else(|| DownloadError::UnsafeEntryError {
                    name: entry.name().to_string(),
                })?;
            let out_path = destination.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&out_path)?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut out_file = fs::File::create(&out_path)?;
            std::io::copy(&mut entry, &mut out_file)?;
            written += 1;
        }

        Ok(written)
    }
}
