use std::collections::BTreeSet;
use crate::structs::readability_stats::ReadabilityStats;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Suspicious names, deduplicated across every sampled file.
    pub identifiers: BTreeSet<String>,
    pub readability: ReadabilityStats,
    /// Relative paths that were actually read, in sample order.
    pub analyzed_files: Vec<String>,
}
