// src/model/economics.rs

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Largest accepted per-unit amount. Keeps `u32` unit counts times any
/// constant, and their sum, well inside `i64`.
pub const MAX_UNIT_AMOUNT: i64 = 1_000_000;

/// Per-unit money flows for a single stocked item.
/// All amounts are whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub book_cost: i64,
    pub selling_price: i64,
    pub return_value: i64,
    pub stockout_penalty: i64,
}

impl Default for UnitEconomics {
    fn default() -> Self {
        Self {
            book_cost: 15,
            selling_price: 25,
            return_value: 5,
            // Lost profit per unit of unmet demand = price - cost
            stockout_penalty: 10,
        }
    }
}

/// Outcome of stocking `stock` units against `demand` for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitBreakdown {
    pub sold: u32,
    pub unsold: u32,
    pub lost_sales: u32,
    pub revenue: i64,
    pub cost: i64,
    pub return_value: i64,
    pub lost_profit: i64,
    pub profit: i64,
}

impl UnitEconomics {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("book_cost", self.book_cost),
            ("selling_price", self.selling_price),
            ("return_value", self.return_value),
            ("stockout_penalty", self.stockout_penalty),
        ];
        for (name, value) in fields {
            if !(0..=MAX_UNIT_AMOUNT).contains(&value) {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} must be between 0 and {}, got {}",
                    name, MAX_UNIT_AMOUNT, value
                )));
            }
        }
        Ok(())
    }

    /// Margin earned on every unit sold.
    pub fn profit_per_sale(&self) -> i64 {
        self.selling_price - self.book_cost
    }

    /// Net loss on every unit left over at the end of the day.
    pub fn loss_per_unsold(&self) -> i64 {
        self.book_cost - self.return_value
    }

    /// Upper bound on the absolute profit of any day where neither stock nor
    /// demand exceeds `units`. `None` if the bound itself overflows.
    pub fn max_daily_swing(&self, units: u32) -> Option<i64> {
        let per_unit = self
            .book_cost
            .checked_add(self.selling_price)?
            .checked_add(self.return_value)?
            .checked_add(self.stockout_penalty)?;
        i64::from(units).checked_mul(per_unit)
    }

    /// Settles one day: sell what we can, return the leftovers,
    /// and charge the penalty on demand we could not meet.
    pub fn evaluate(&self, stock: u32, demand: u32) -> ProfitBreakdown {
        let sold = stock.min(demand);
        let unsold = stock.saturating_sub(demand);
        let lost_sales = demand.saturating_sub(stock);

        let revenue = i64::from(sold) * self.selling_price;
        let cost = i64::from(stock) * self.book_cost;
        let return_value = i64::from(unsold) * self.return_value;
        let lost_profit = i64::from(lost_sales) * self.stockout_penalty;

        ProfitBreakdown {
            sold,
            unsold,
            lost_sales,
            revenue,
            cost,
            return_value,
            lost_profit,
            profit: revenue - cost + return_value - lost_profit,
        }
    }
}
