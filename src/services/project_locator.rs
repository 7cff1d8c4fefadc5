use std::path::{Path, PathBuf};
use crate::config::constants::PROJECT_DESCRIPTOR;
use crate::enums::descriptor_lookup::DescriptorLookup;
use crate::errors::ReviewResult;
use crate::services::exclusion_policy::ExclusionPolicy;
use crate::services::tree_walker::TreeWalker;

/// Finds the project descriptor inside an extracted archive, which may wrap
/// the project in any number of directories.
pub struct ProjectRootLocator<'a> {
    walker: TreeWalker<'a>,
    descriptor: &'a str,
}

impl<'a> ProjectRootLocator<'a> {
    pub fn new(exclusions: &'a ExclusionPolicy) -> Self {
        Self::for_descriptor(exclusions, PROJECT_DESCRIPTOR)
    }

    pub fn for_descriptor(exclusions: &'a ExclusionPolicy, descriptor: &'a str) -> Self {
        Self {
            walker: TreeWalker::new(exclusions),
            descriptor,
        }
    }

    /// First descriptor in traversal order. With several descriptors at
    /// different depths the winner depends on directory enumeration order.
    pub fn locate(&self, root: &Path) -> ReviewResult<DescriptorLookup> {
        Ok(match self.walker.find_first(root, self.descriptor)? {
            Some(path) => DescriptorLookup::Found(path),
            None => DescriptorLookup::NotFound,
        })
    }

    /// All descriptors, shallowest first, ties broken by path.
    pub fn candidates(&self, root: &Path) -> ReviewResult<Vec<PathBuf>> {
        let mut found = self.walker.find_all(root, self.descriptor)?;
        found.sort_by(|a, b| {
            let depth_a = a.strip_prefix(root).map_or(0, |p| p.components().count());
            let depth_b = b.strip_prefix(root).map_or(0, |p| p.components().count());
            depth_a.cmp(&depth_b).then_with(|| a.cmp(b))
        });
        Ok(found)
    }
}
