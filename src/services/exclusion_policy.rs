use std::collections::HashSet;
use crate::config::constants::EXCLUDED_DIRECTORIES;

/// Directory names skipped by every tree walk. Matching is on the exact
/// entry name, so it applies equally at the root and at any nested level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    directories: HashSet<String>,
}

impl ExclusionPolicy {
    pub fn new<I, S>(directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_extra<I, S>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories.extend(directories.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded(&self, directory_name: &str) -> bool {
        self.directories.contains(directory_name)
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(EXCLUDED_DIRECTORIES.iter().copied())
    }
}
