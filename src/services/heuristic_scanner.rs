use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::constants::{
    DEFAULT_LONG_LINE_THRESHOLD, DEFAULT_SAMPLE_LIMIT, LOOP_COUNTER_NAMES, SOURCE_EXTENSIONS,
};
use crate::structs::readability_stats::ReadabilityStats;
use crate::structs::scan_result::ScanResult;
use crate::structs::source_file::SourceFile;

/// Named declarations only. The capture stops at the first character that
/// cannot continue a declaration head, so `const [a, b]` and `const { a }`
/// produce nothing while `let my-name` is captured whole. Generator stars
/// and TypeScript `!`/`?` markers are not part of the name.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:function(?:\s*\*\s*|\s+)|(?:const|let|var|class)\s+)([^\s=(){}\[\];,:<>!?]+)")
        .expect("declaration pattern is valid")
});

/// Regex and line-length heuristics over a bounded sample of source files.
/// Never writes to the tree it reads.
#[derive(Debug, Clone)]
pub struct HeuristicScanner {
    sample_limit: usize,
    long_line_threshold: usize,
}

impl Default for HeuristicScanner {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_LIMIT, DEFAULT_LONG_LINE_THRESHOLD)
    }
}

impl HeuristicScanner {
    pub fn new(sample_limit: usize, long_line_threshold: usize) -> Self {
        Self {
            sample_limit,
            long_line_threshold,
        }
    }

    pub fn scan(&self, base_dir: &Path, candidates: &[String]) -> ScanResult {
        let mut result = ScanResult::default();

        for source in self.read_sample(base_dir, candidates) {
            let (identifiers, readability) = self.inspect_source(&source.content);
            result.identifiers.extend(identifiers);
            result.readability.add(readability);
            result.analyzed_files.push(source.path);
        }

        log::debug!(
            "🔎 Scanned {} of {} candidate files, {} suspicious identifiers",
            result.analyzed_files.len(),
            candidates.len(),
            result.identifiers.len()
        );

        result
    }

    /// Source files only, shallowest first, truncated to the sample limit.
    pub fn sample(&self, candidates: &[String]) -> Vec<String> {
        let mut sources: Vec<&String> = candidates.iter().filter(|file| is_source_file(file)).collect();
        sources.sort_by(|a, b| depth(a).cmp(&depth(b)).then_with(|| a.cmp(b)));
        sources.into_iter().take(self.sample_limit).cloned().collect()
    }

    /// Reads the sample into memory, skipping files that cannot be read as
    /// text and anything that is not a regular file.
    pub fn read_sample(&self, base_dir: &Path, candidates: &[String]) -> Vec<SourceFile> {
        self.sample(candidates)
            .into_iter()
            .filter_map(|path| {
                let full_path = base_dir.join(&path);
                if !fs::symlink_metadata(&full_path).is_ok_and(|metadata| metadata.is_file()) {
                    log::debug!("Skipping non-regular file {}", path);
                    return None;
                }

                match fs::read_to_string(&full_path) {
                    Ok(content) => Some(SourceFile { path, content }),
                    Err(e) => {
                        log::debug!("Skipping unreadable file {}: {}", path, e);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn inspect_source(&self, content: &str) -> (BTreeSet<String>, ReadabilityStats) {
        let identifiers = suspicious_identifiers(content);

        let mut readability = ReadabilityStats::default();
        for line in content.lines() {
            readability.total_lines += 1;
            if line.chars().count() > self.long_line_threshold {
                readability.long_lines += 1;
            }
        }

        (identifiers, readability)
    }
}

pub fn suspicious_identifiers(content: &str) -> BTreeSet<String> {
    DECLARATION
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str())
        .filter(|name| is_suspicious(name))
        .map(ToString::to_string)
        .collect()
}

pub fn is_suspicious(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let all_underscores = name.chars().all(|c| c == '_');
    let lone_letter = name.chars().count() == 1 && !LOOP_COUNTER_NAMES.contains(&name);
    let odd_characters = name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'));

    all_underscores || lone_letter || odd_characters
}

fn is_source_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

fn depth(path: &str) -> usize {
    path.matches('/').count()
}
