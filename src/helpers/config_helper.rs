use std::env;
use std::path::PathBuf;
use crate::config::constants::{
    DEFAULT_AI_TIMEOUT_SECS, DEFAULT_LONG_LINE_THRESHOLD, DEFAULT_SAMPLE_LIMIT, DEFAULT_SERVER_PORT,
    GEMINI_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    pub fn default_work_dir() -> PathBuf {
        env::temp_dir().join("reviewlyzer").join("extracted")
    }

    pub fn default_upload_dir() -> PathBuf {
        env::temp_dir().join("reviewlyzer").join("uploads")
    }

    pub fn default_sample_limit() -> usize {
        DEFAULT_SAMPLE_LIMIT
    }

    pub fn default_long_line_threshold() -> usize {
        DEFAULT_LONG_LINE_THRESHOLD
    }

    pub fn default_model() -> String {
        "gemini-1.5-flash".to_string()
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".to_string()
    }

    pub fn default_max_output_tokens() -> u32 {
        2048
    }

    pub fn default_temperature() -> f64 {
        0.4
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_AI_TIMEOUT_SECS
    }
}
