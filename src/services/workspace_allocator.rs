use std::fs;
use std::path::{Path, PathBuf};
use chrono::Utc;
use uuid::Uuid;
use crate::errors::{ResultExt, ReviewResult};
use crate::structs::extracted_project::ExtractedProject;

/// Hands out disjoint scratch locations, one per request.
#[derive(Debug, Clone)]
pub struct WorkspaceAllocator {
    work_dir: PathBuf,
    upload_dir: PathBuf,
}

impl WorkspaceAllocator {
    pub fn new(work_dir: PathBuf, upload_dir: PathBuf) -> Self {
        Self { work_dir, upload_dir }
    }

    /// Writes an uploaded archive to disk and reserves its extraction directory.
    pub fn spool(&self, archive_bytes: &[u8]) -> ReviewResult<ExtractedProject> {
        let project = self.claim()?;
        fs::write(project.archive(), archive_bytes).with_operation(project.archive(), "write upload")?;
        Ok(project)
    }

    /// Copies a local archive so cleanup never touches the caller's file.
    pub fn adopt_copy(&self, source: &Path) -> ReviewResult<ExtractedProject> {
        let project = self.claim()?;
        fs::copy(source, project.archive()).with_operation(source, "copy archive")?;
        Ok(project)
    }

    fn claim(&self) -> ReviewResult<ExtractedProject> {
        let key = request_key();
        let project = ExtractedProject::claim(self.work_dir.join(&key), self.upload_dir.join(format!("{}.zip", key)));

        fs::create_dir_all(&self.upload_dir).with_operation(&self.upload_dir, "create upload dir")?;
        fs::create_dir_all(project.root()).with_operation(project.root(), "create work dir")?;

        Ok(project)
    }
}

/// Nanosecond timestamp plus a random suffix, unique across concurrent requests.
fn request_key() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}", nanos, Uuid::new_v4().simple())
}
