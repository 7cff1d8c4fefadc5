pub mod prompts;
pub mod report_copy;
