use std::fs::File;
use std::path::Path;
use zip::ZipArchive;
use crate::errors::{ReviewError, ReviewResult};
use crate::traits::archive_extractor::ArchiveExtractor;

/// ZIP backend. `ZipArchive::extract` refuses entries whose names would
/// land outside the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> ReviewResult<()> {
        let file = File::open(archive).map_err(|e| ReviewError::extraction_error(archive, &e.to_string()))?;
        let mut zip = ZipArchive::new(file).map_err(|e| ReviewError::extraction_error(archive, &e.to_string()))?;

        log::debug!("📦 Extracting {} entries from {}", zip.len(), archive.display());

        zip.extract(destination)
            .map_err(|e| ReviewError::extraction_error(archive, &e.to_string()))
    }
}
