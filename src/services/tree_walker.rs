use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{ResultExt, ReviewResult};
use crate::services::exclusion_policy::ExclusionPolicy;

/// Which leaves a walk keeps.
#[derive(Debug, Clone, Copy)]
pub struct LeafFilter<'a> {
    pub extensions: &'a [&'a str],
    pub name_prefix: Option<&'a str>,
}

impl LeafFilter<'_> {
    fn accepts(&self, path: &Path) -> bool {
        let extension_match = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)));

        extension_match
            || match (self.name_prefix, path.file_name().and_then(|name| name.to_str())) {
                (Some(prefix), Some(name)) => name.starts_with(prefix),
                _ => false,
            }
    }
}

pub struct TreeWalker<'a> {
    exclusions: &'a ExclusionPolicy,
}

impl<'a> TreeWalker<'a> {
    pub fn new(exclusions: &'a ExclusionPolicy) -> Self {
        Self { exclusions }
    }

    /// Every file under `root`, relative to `base_dir`, in enumeration order.
    /// Symlinks are never followed or returned, whatever they point at.
    pub fn walk(&self, root: &Path, base_dir: &Path) -> ReviewResult<Vec<String>> {
        let mut files = Vec::new();
        self.collect_files(root, base_dir, None, &mut files)?;
        Ok(files)
    }

    /// Like [`walk`](Self::walk), keeping only leaves accepted by `filter`.
    pub fn walk_filtered(&self, root: &Path, base_dir: &Path, filter: LeafFilter<'_>) -> ReviewResult<Vec<String>> {
        let mut files = Vec::new();
        self.collect_files(root, base_dir, Some(filter), &mut files)?;
        Ok(files)
    }

    /// Depth-first search for a file named exactly `file_name`. Stops at the
    /// first hit in enumeration order, which is not necessarily the shallowest.
    pub fn find_first(&self, root: &Path, file_name: &str) -> ReviewResult<Option<PathBuf>> {
        for entry in fs::read_dir(root).with_operation(root, "read_dir")? {
            let entry = entry.with_operation(root, "read_dir entry")?;
            let path = entry.path();
            let file_type = entry.file_type().with_operation(&path, "file_type")?;

            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_dir() {
                if self.is_excluded(&entry.file_name()) {
                    continue;
                }
                if let Some(found) = self.find_first(&path, file_name)? {
                    return Ok(Some(found));
                }
            } else if entry.file_name() == file_name {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// Every file named `file_name`, in enumeration order.
    pub fn find_all(&self, root: &Path, file_name: &str) -> ReviewResult<Vec<PathBuf>> {
        let mut found = Vec::new();
        self.collect_named(root, file_name, &mut found)?;
        Ok(found)
    }

    fn collect_named(&self, dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> ReviewResult<()> {
        for entry in fs::read_dir(dir).with_operation(dir, "read_dir")? {
            let entry = entry.with_operation(dir, "read_dir entry")?;
            let path = entry.path();
            let file_type = entry.file_type().with_operation(&path, "file_type")?;

            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_dir() {
                if !self.is_excluded(&entry.file_name()) {
                    self.collect_named(&path, file_name, found)?;
                }
            } else if entry.file_name() == file_name {
                found.push(path);
            }
        }
        Ok(())
    }

    fn collect_files(&self, dir: &Path, base_dir: &Path, filter: Option<LeafFilter<'_>>, files: &mut Vec<String>) -> ReviewResult<()> {
        for entry in fs::read_dir(dir).with_operation(dir, "read_dir")? {
            let entry = entry.with_operation(dir, "read_dir entry")?;
            let path = entry.path();
            let file_type = entry.file_type().with_operation(&path, "file_type")?;

            if file_type.is_symlink() {
                log::debug!("Skipping symlink {}", path.display());
                continue;
            }

            if file_type.is_dir() {
                if !self.is_excluded(&entry.file_name()) {
                    self.collect_files(&path, base_dir, filter, files)?;
                }
                continue;
            }

            if filter.is_some_and(|filter| !filter.accepts(&path)) {
                continue;
            }

            files.push(relative_path(&path, base_dir));
        }

        Ok(())
    }

    fn is_excluded(&self, name: &std::ffi::OsStr) -> bool {
        name.to_str().is_some_and(|name| self.exclusions.is_excluded(name))
    }
}

/// `path` relative to `base_dir` with `/` separators on every platform.
pub fn relative_path(path: &Path, base_dir: &Path) -> String {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
