use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityStats {
    pub total_lines: usize,
    pub long_lines: usize,
}

impl ReadabilityStats {
    pub fn new(total_lines: usize, long_lines: usize) -> Self {
        Self { total_lines, long_lines }
    }

    pub fn add(&mut self, other: Self) {
        self.total_lines += other.total_lines;
        self.long_lines += other.long_lines;
    }
}
