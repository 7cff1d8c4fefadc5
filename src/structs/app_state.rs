use crate::services::archive_pipeline::ArchivePipeline;
use crate::services::file_reviewer::FileReviewer;
use crate::services::workspace_allocator::WorkspaceAllocator;

/// Read-only handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: ArchivePipeline,
    pub allocator: WorkspaceAllocator,
    pub reviewer: Option<FileReviewer>,
}
