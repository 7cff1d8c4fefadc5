use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    /// Parent of the per-request extraction directories.
    #[serde(default = "ConfigHelper::default_work_dir")]
    pub work_dir: PathBuf,

    /// Where uploaded archives are spooled before extraction.
    #[serde(default = "ConfigHelper::default_upload_dir")]
    pub upload_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            work_dir: ConfigHelper::default_work_dir(),
            upload_dir: ConfigHelper::default_upload_dir(),
        }
    }
}
