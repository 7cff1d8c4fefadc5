use std::path::{Path, PathBuf};

/// Outcome of searching an extracted archive for the project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorLookup {
    Found(PathBuf),
    NotFound,
}

impl DescriptorLookup {
    /// Directory holding the descriptor, i.e. the project root.
    pub fn project_root(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => path.parent(),
            Self::NotFound => None,
        }
    }
}
