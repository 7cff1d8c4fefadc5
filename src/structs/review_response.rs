use serde::Serialize;
use crate::structs::file_review::FileReview;
use crate::structs::quality_report::QualityReport;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    pub reviews: Vec<FileReview>,
    pub report: QualityReport,
}
