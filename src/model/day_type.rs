// src/model/day_type.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Demand regime drawn at the start of every simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayType {
    High,
    Medium,
    Low,
}

impl DayType {
    /// Fixed ordering used for sampling and reporting.
    pub const ALL: [DayType; 3] = [DayType::High, DayType::Medium, DayType::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::High => "High",
            DayType::Medium => "Medium",
            DayType::Low => "Low",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
