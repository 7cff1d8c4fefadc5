pub mod ai;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod dependency_manifest;
pub mod extracted_project;
pub mod file_review;
pub mod improvement;
pub mod quality_report;
pub mod rating;
pub mod readability_stats;
pub mod review_response;
pub mod scan_result;
pub mod source_file;
pub mod upload_form;
