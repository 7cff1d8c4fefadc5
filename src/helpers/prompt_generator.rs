use crate::constants::prompts::{DEFAULT_REVIEW_FOCUS, FILE_REVIEW_PROMPT};
use crate::structs::source_file::SourceFile;

pub fn generate_file_review_prompt(file: &SourceFile, focus: Option<&str>) -> String {
    let focus = focus
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_REVIEW_FOCUS);

    format!(
        "{}\n\nReview focus: {}\n\nFile: {}\n```\n{}\n```\n",
        FILE_REVIEW_PROMPT, focus, file.path, file.content
    )
}
