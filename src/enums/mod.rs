pub mod ai_provider_error;
pub mod commands;
pub mod descriptor_lookup;
pub mod manifest_parse;
pub mod priority;
