// src/simulation/config.rs

use serde::{Deserialize, Serialize};

use crate::model::day_type::DayType;
use crate::model::economics::UnitEconomics;

/// Immutable inputs for the engine. Defaults reproduce the bookstore problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub economics: UnitEconomics,
    /// Sampled in the order listed.
    pub day_type_probs: Vec<(DayType, f64)>,
    /// Demand quantity -> probability, one table per day type.
    pub demand_probs: Vec<(DayType, Vec<(u32, f64)>)>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            economics: UnitEconomics::default(),
            day_type_probs: vec![
                (DayType::High, 0.4),
                (DayType::Medium, 0.3),
                (DayType::Low, 0.3),
            ],
            demand_probs: vec![
                (
                    DayType::High,
                    demand_table([0.05, 0.07, 0.1, 0.2, 0.3, 0.15, 0.13]),
                ),
                (
                    DayType::Medium,
                    demand_table([0.12, 0.16, 0.3, 0.2, 0.08, 0.06, 0.08]),
                ),
                (
                    DayType::Low,
                    demand_table([0.3, 0.2, 0.06, 0.12, 0.13, 0.09, 0.1]),
                ),
            ],
        }
    }
}

/// Demand levels shared by every day type.
pub const DEMAND_LEVELS: [u32; 7] = [50, 60, 70, 80, 90, 100, 110];

fn demand_table(probs: [f64; 7]) -> Vec<(u32, f64)> {
    DEMAND_LEVELS.iter().copied().zip(probs).collect()
}
