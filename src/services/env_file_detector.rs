use crate::config::constants::ENV_FILE_PREFIX;

pub struct EnvFileDetector;

impl EnvFileDetector {
    /// Files whose basename starts with `.env`, in input order.
    pub fn detect(files: &[String]) -> Vec<String> {
        files
            .iter()
            .filter(|file| {
                let name = file.rsplit('/').next().unwrap_or(file);
                name.starts_with(ENV_FILE_PREFIX)
            })
            .cloned()
            .collect()
    }
}
