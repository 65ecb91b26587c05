//! Newsvendor inventory simulation.
//!
//! A store stocks the same quantity of a perishable item every day. Each day
//! gets a random day type (High, Medium, Low) and then a random demand drawn
//! from that day type's table; the day is settled with fixed unit economics
//! (cost, price, return value, stockout penalty).

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;

pub use crate::error::{ReportError, SimulationError};
pub use crate::model::day_type::DayType;
pub use crate::model::economics::{ProfitBreakdown, UnitEconomics};
pub use crate::simulation::config::SimulationConfig;
pub use crate::simulation::engine::{DailyRecord, NewsvendorSimulation};
pub use crate::simulation::summary::{DayTypeSummary, SimulationResult};

/// Runs the bookstore simulation with the default tables.
///
/// Negative or zero day counts and negative stock are rejected before any day
/// is simulated. `seed = None` seeds from OS entropy.
pub fn run_simulation(
    stock_quantity: i64,
    num_days: i64,
    seed: Option<u64>,
) -> Result<SimulationResult, SimulationError> {
    let stock = u32::try_from(stock_quantity).map_err(|_| {
        SimulationError::InvalidParameter(format!(
            "stock_quantity must be a non-negative 32-bit integer, got {}",
            stock_quantity
        ))
    })?;
    if num_days < 1 {
        return Err(SimulationError::InvalidParameter(format!(
            "num_days must be at least 1, got {}",
            num_days
        )));
    }
    let days = usize::try_from(num_days).map_err(|_| {
        SimulationError::InvalidParameter(format!("num_days {} is too large", num_days))
    })?;

    NewsvendorSimulation::new(SimulationConfig::default())?.run(stock, days, seed)
}
