use std::path::Path;
use crate::errors::ReviewResult;

pub trait ArchiveExtractor: Send + Sync {
    /// Unpacks every entry of `archive` below `destination`, which must exist.
    fn extract(&self, archive: &Path, destination: &Path) -> ReviewResult<()>;
}
