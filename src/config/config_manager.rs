use std::env;
use std::fs;
use std::path::PathBuf;
use crate::config::constants::{PORT_ENV, WORK_DIR_ENV};
use crate::errors::{ResultExt, ReviewError, ReviewResult};
use crate::structs::config::config::Config;

const CONFIG_DIR: &str = "reviewlyzer";
const CONFIG_FILE: &str = "config.toml";

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// File values first, then environment overrides.
    pub fn load() -> ReviewResult<Config> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                log::info!("📋 Loading config from: {}", path.display());
                let content = fs::read_to_string(&path).with_operation(&path, "read config")?;
                Self::parse(&content)?
            }
            _ => Config::default(),
        };

        Self::apply_env(&mut config, |name| env::var(name).ok())?;
        Ok(config)
    }

    pub fn parse(content: &str) -> ReviewResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_env<F>(config: &mut Config, lookup: F) -> ReviewResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            config.server.port = port.trim().parse().map_err(|_| {
                ReviewError::config_error(&format!("{} must be a port number, got '{}'", PORT_ENV, port), Some("Use a value between 1 and 65535"))
            })?;
        }

        if let Some(dir) = lookup(WORK_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            let base = PathBuf::from(dir);
            config.server.work_dir = base.join("extracted");
            config.server.upload_dir = base.join("uploads");
        }

        config.ai.api_key = lookup(&config.ai.api_key_env).filter(|key| !key.trim().is_empty());
        Ok(())
    }

    pub fn create_sample_config() -> ReviewResult<PathBuf> {
        let sample_config = r#"# Reviewlyzer configuration

[server]
host = "0.0.0.0"
# Overridden by the PORT environment variable
port = 5000
# Per-request extraction directories and spooled uploads live here.
# REVIEWLYZER_WORK_DIR overrides both.
# work_dir = "/tmp/reviewlyzer/extracted"
# upload_dir = "/tmp/reviewlyzer/uploads"

[analysis]
# Source files read for identifier and line-length heuristics
sample_limit = 20
# Lines longer than this many characters count as long
long_line_threshold = 120
# Directory names skipped in addition to the built-in list
extra_excluded_dirs = []

[ai]
model = "gemini-1.5-flash"
# Name of the environment variable holding the API key
api_key_env = "GEMINI_API_KEY"
max_output_tokens = 2048
temperature = 0.4
timeout_secs = 60
"#;
        let path = Self::config_path()
            .ok_or_else(|| ReviewError::config_error("Could not determine home directory", Some("Set HOME and retry")))?;

        if path.exists() {
            return Err(ReviewError::config_error(
                &format!("Config already exists at {}", path.display()),
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_operation(dir, "create config dir")?;
        }
        fs::write(&path, sample_config).with_operation(&path, "write config")?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("server.port must not be 0".to_string());
        }

        if config.analysis.sample_limit == 0 {
            errors.push("analysis.sample_limit must be at least 1".to_string());
        }

        if config.analysis.long_line_threshold == 0 {
            errors.push("analysis.long_line_threshold must be at least 1".to_string());
        }

        if config.server.work_dir == config.server.upload_dir {
            errors.push("server.work_dir and server.upload_dir must differ".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0 and 2, got {}", config.ai.temperature));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
