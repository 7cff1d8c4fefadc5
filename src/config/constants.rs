use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_SAMPLE_LIMIT: usize = 20;
pub const DEFAULT_LONG_LINE_THRESHOLD: usize = 120;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

pub const PORT_ENV: &str = "PORT";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const WORK_DIR_ENV: &str = "REVIEWLYZER_WORK_DIR";

pub const PROJECT_DESCRIPTOR: &str = "package.json";
pub const ENV_FILE_PREFIX: &str = ".env";

pub const UPLOAD_FIELD: &str = "file";
pub const DESCRIPTION_FIELDS: &[&str] = &["description", "prompt"];

/// Directory names never descended into, at any depth.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "coverage",
    ".next",
    ".nuxt",
    ".cache",
    ".turbo",
    "target",
    "__MACOSX",
    ".vscode",
    ".idea",
];

/// Extensions collected by the project walk. `json` is kept for the file
/// listing even though the scanner ignores it.
pub const COLLECTED_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "json"];

pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

pub const LOOP_COUNTER_NAMES: &[&str] = &["i", "j", "k"];

pub const REVIEW_ERROR_SENTINEL: &str = "Error generating review for this file.";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
