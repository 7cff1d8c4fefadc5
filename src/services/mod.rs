pub mod archive_pipeline;
pub mod dependency_extractor;
pub mod env_file_detector;
pub mod exclusion_policy;
pub mod file_reviewer;
pub mod heuristic_scanner;
pub mod project_locator;
pub mod report_generator;
pub mod tree_walker;
pub mod workspace_allocator;
pub mod zip_extractor;
pub mod ai_providers;
