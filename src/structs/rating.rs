use std::fmt;
use serde::{Serialize, Serializer};

pub const MIN_RATING: f64 = 6.0;
pub const MAX_RATING: f64 = 9.0;

/// Score out of ten, always within `[MIN_RATING, MAX_RATING]` and kept to
/// one decimal place. Only built by the report generator.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub(crate) fn clamped(raw: f64) -> Self {
        let bounded = raw.clamp(MIN_RATING, MAX_RATING);
        Self((bounded * 10.0).round() / 10.0)
    }

    pub fn score(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/10", self.0)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
