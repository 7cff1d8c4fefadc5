pub mod config;
pub mod server_config;
pub mod analysis_config;
pub mod ai_config;
