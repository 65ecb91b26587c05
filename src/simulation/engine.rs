// src/simulation/engine.rs

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::SimulationError;
use crate::model::day_type::DayType;
use crate::model::demand::DemandModel;
use crate::model::economics::UnitEconomics;
use crate::simulation::config::SimulationConfig;
use crate::simulation::summary::SimulationResult;

/// Longest run accepted; the full trace is held in memory.
pub const MAX_DAYS: usize = 10_000_000;

// Serialize so the trace can be written to CSV as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub day: usize,
    pub day_type: DayType,
    pub demand: u32,
    pub sold: u32,
    pub unsold: u32,
    pub lost_sales: u32,
    pub revenue: i64,
    pub cost: i64,
    pub return_value: i64,
    pub lost_profit: i64,
    pub profit: i64,
}

/// The newsvendor engine.
///
/// Holds only validated, read-only tables. Every call to [`run`](Self::run)
/// owns its own generator and result, so one engine can serve any number of
/// independent (or concurrent) runs.
#[derive(Debug, Clone)]
pub struct NewsvendorSimulation {
    economics: UnitEconomics,
    demand: DemandModel,
}

impl NewsvendorSimulation {
    /// Validates the configuration and builds the sampling tables.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.economics.validate()?;
        let demand = DemandModel::new(&config.day_type_probs, &config.demand_probs)?;
        Ok(Self {
            economics: config.economics,
            demand,
        })
    }

    pub fn economics(&self) -> &UnitEconomics {
        &self.economics
    }

    pub fn demand_model(&self) -> &DemandModel {
        &self.demand
    }

    /// Simulates `num_days` days of stocking `stock_quantity` units.
    ///
    /// With `Some(seed)` the run is fully reproducible. With `None` the
    /// generator is seeded from OS entropy.
    pub fn run(
        &self,
        stock_quantity: u32,
        num_days: usize,
        seed: Option<u64>,
    ) -> Result<SimulationResult, SimulationError> {
        if num_days < 1 {
            return Err(SimulationError::InvalidParameter(format!(
                "num_days must be at least 1, got {}",
                num_days
            )));
        }
        if num_days > MAX_DAYS {
            return Err(SimulationError::InvalidParameter(format!(
                "num_days must be at most {}, got {}",
                MAX_DAYS, num_days
            )));
        }

        // The running total must fit in i64 whatever the draws turn out to be
        let units = stock_quantity.max(self.demand.max_demand());
        let fits = i64::try_from(num_days)
            .ok()
            .zip(self.economics.max_daily_swing(units))
            .and_then(|(days, swing)| swing.checked_mul(days))
            .is_some();
        if !fits {
            return Err(SimulationError::InvalidParameter(format!(
                "stock {} over {} days can overflow the profit total",
                stock_quantity, num_days
            )));
        }

        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        info!(stock_quantity, num_days, ?seed, "starting simulation");

        let mut records = Vec::with_capacity(num_days);
        let mut total_profit: i64 = 0;

        for day in 1..=num_days {
            let (day_type, demand) = self.demand.sample_day(&mut rng);
            let b = self.economics.evaluate(stock_quantity, demand);

            debug!(day, %day_type, demand, profit = b.profit, "simulated day");

            total_profit += b.profit;
            records.push(DailyRecord {
                day,
                day_type,
                demand,
                sold: b.sold,
                unsold: b.unsold,
                lost_sales: b.lost_sales,
                revenue: b.revenue,
                cost: b.cost,
                return_value: b.return_value,
                lost_profit: b.lost_profit,
                profit: b.profit,
            });
        }

        let result = SimulationResult::from_records(stock_quantity, records, total_profit);
        info!(
            total_profit = result.total_profit(),
            avg_profit_per_day = result.avg_profit_per_day(),
            "simulation complete"
        );
        Ok(result)
    }
}
