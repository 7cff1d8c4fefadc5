use crate::helpers::config_helper::ConfigHelper;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Upper bound on source files read per request.
    #[serde(default = "ConfigHelper::default_sample_limit")]
    pub sample_limit: usize,

    #[serde(default = "ConfigHelper::default_long_line_threshold")]
    pub long_line_threshold: usize,

    /// Extra directory names to skip on top of the built-in list.
    #[serde(default)]
    pub extra_excluded_dirs: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_limit: ConfigHelper::default_sample_limit(),
            long_line_threshold: ConfigHelper::default_long_line_threshold(),
            extra_excluded_dirs: Vec::new(),
        }
    }
}
