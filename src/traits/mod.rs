pub mod ai_provider;
pub mod archive_extractor;
