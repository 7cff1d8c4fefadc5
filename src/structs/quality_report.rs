use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::structs::dependency_manifest::DependencyManifest;
use crate::structs::improvement::Improvement;
use crate::structs::rating::Rating;
use crate::structs::readability_stats::ReadabilityStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    pub analyzed_files: Vec<String>,
    pub env_files: Vec<String>,
    pub dependencies: DependencyManifest,
    pub readability: ReadabilityStats,
    pub suspicious_identifiers: Vec<String>,
    pub positives: Vec<String>,
    pub improvements: Vec<Improvement>,
    pub senior_notes: String,
    pub rating: Rating,
    pub generated_at: DateTime<Utc>,
}
