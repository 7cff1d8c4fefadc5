use serde::{Deserialize, Serialize};
use crate::enums::priority::Priority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub priority: Priority,
    pub title: String,
    pub suggestion: String,
    pub reason: String,
}

impl Improvement {
    pub fn new(priority: Priority, title: &str, suggestion: String, reason: &str) -> Self {
        Self {
            priority,
            title: title.to_string(),
            suggestion,
            reason: reason.to_string(),
        }
    }
}
