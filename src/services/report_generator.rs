use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use crate::config::constants::DEFAULT_LONG_LINE_THRESHOLD;
use crate::constants::report_copy::{
    ENV_EXAMPLE_REASON, ENV_EXAMPLE_SUGGESTION, ENV_EXAMPLE_TITLE, IDENTIFIER_REASON, IDENTIFIER_TITLE,
    LONG_LINES_REASON, LONG_LINES_TITLE, POSITIVE_FEEDBACK, ROUTING_REASON, ROUTING_SUGGESTION, ROUTING_TITLE,
    SENIOR_NOTES,
};
use crate::enums::priority::Priority;
use crate::structs::dependency_manifest::DependencyManifest;
use crate::structs::improvement::Improvement;
use crate::structs::quality_report::QualityReport;
use crate::structs::rating::Rating;
use crate::structs::readability_stats::ReadabilityStats;

const STARTING_SCORE: f64 = 10.0;
const LONG_LINE_ALLOWANCE: usize = 10;
const LONG_LINES_PER_PENALTY_POINT: usize = 20;
const MAX_LONG_LINE_PENALTY: usize = 2;
const NAMED_IDENTIFIERS: usize = 3;

/// Everything the report is folded from.
#[derive(Debug, Clone, Default)]
pub struct ReportInputs {
    pub manifest: DependencyManifest,
    pub identifiers: BTreeSet<String>,
    pub readability: ReadabilityStats,
    pub env_files: Vec<String>,
    pub analyzed_files: Vec<String>,
    pub project_description: Option<String>,
}

/// Pure aggregation step: the same inputs and timestamp always give the
/// same report.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    long_line_threshold: usize,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_LINE_THRESHOLD)
    }
}

impl ReportGenerator {
    pub fn new(long_line_threshold: usize) -> Self {
        Self { long_line_threshold }
    }

    pub fn generate(&self, inputs: ReportInputs, generated_at: DateTime<Utc>) -> QualityReport {
        let improvements = self.improvements(&inputs);
        let rating = Self::rating(improvements.len(), inputs.readability.long_lines);

        QualityReport {
            project_description: inputs.project_description,
            analyzed_files: inputs.analyzed_files,
            env_files: inputs.env_files,
            dependencies: inputs.manifest,
            readability: inputs.readability,
            suspicious_identifiers: inputs.identifiers.into_iter().collect(),
            positives: POSITIVE_FEEDBACK.iter().map(ToString::to_string).collect(),
            improvements,
            senior_notes: SENIOR_NOTES.to_string(),
            rating,
            generated_at,
        }
    }

    /// Rules run in a fixed order, each adding at most one entry.
    fn improvements(&self, inputs: &ReportInputs) -> Vec<Improvement> {
        let mut improvements = Vec::new();

        if !inputs.identifiers.is_empty() {
            let named: Vec<&str> = inputs.identifiers.iter().take(NAMED_IDENTIFIERS).map(String::as_str).collect();
            improvements.push(Improvement::new(
                Priority::Medium,
                IDENTIFIER_TITLE,
                format!("Rename unclear identifiers such as {} to names that describe their purpose.", named.join(", ")),
                IDENTIFIER_REASON,
            ));
        }

        if inputs.readability.long_lines > LONG_LINE_ALLOWANCE {
            improvements.push(Improvement::new(
                Priority::Medium,
                LONG_LINES_TITLE,
                format!(
                    "{} lines are longer than {} characters; split long expressions and call chains across lines.",
                    inputs.readability.long_lines, self.long_line_threshold
                ),
                LONG_LINES_REASON,
            ));
        }

        if inputs.env_files.is_empty() {
            improvements.push(Improvement::new(
                Priority::Low,
                ENV_EXAMPLE_TITLE,
                ENV_EXAMPLE_SUGGESTION.to_string(),
                ENV_EXAMPLE_REASON,
            ));
        }

        if Self::mentions(&inputs.analyzed_files, "route") && !Self::mentions(&inputs.analyzed_files, "controller") {
            improvements.push(Improvement::new(
                Priority::High,
                ROUTING_TITLE,
                ROUTING_SUGGESTION.to_string(),
                ROUTING_REASON,
            ));
        }

        improvements
    }

    #[allow(clippy::cast_precision_loss)]
    fn rating(improvement_count: usize, long_lines: usize) -> Rating {
        let penalty = (long_lines / LONG_LINES_PER_PENALTY_POINT).min(MAX_LONG_LINE_PENALTY);
        Rating::clamped(STARTING_SCORE - improvement_count as f64 - penalty as f64)
    }

    fn mentions(files: &[String], needle: &str) -> bool {
        files.iter().any(|file| file.to_ascii_lowercase().contains(needle))
    }
}
