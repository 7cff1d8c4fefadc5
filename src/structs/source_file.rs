/// A sampled source file held in memory after the extraction directory is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}
