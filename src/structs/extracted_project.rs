use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Per-request scratch space: the spooled upload and the directory it is
/// extracted into. Both are removed when the value is dropped, whether the
/// request succeeded or not.
#[derive(Debug)]
pub struct ExtractedProject {
    root: PathBuf,
    archive: PathBuf,
}

impl ExtractedProject {
    /// Takes ownership of both paths before either exists on disk, so a
    /// half-written upload is still cleaned up.
    pub(crate) fn claim(root: PathBuf, archive: PathBuf) -> Self {
        Self { root, archive }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }
}

impl Drop for ExtractedProject {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.root) {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("⚠️ Failed to remove {}: {}", self.root.display(), e);
            }
        }

        if let Err(e) = fs::remove_file(&self.archive) {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("⚠️ Failed to remove {}: {}", self.archive.display(), e);
            }
        }

        log::debug!("🧹 Cleaned up {}", self.root.display());
    }
}
