// src/simulation/summary.rs

use serde::Serialize;

use crate::model::day_type::DayType;
use crate::simulation::engine::DailyRecord;

/// Output of one run. Built once by the engine and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    stock_quantity: u32,
    num_days: usize,
    total_profit: i64,
    avg_profit_per_day: f64,
    avg_demand: f64,
    avg_sold: f64,
    avg_unsold: f64,
    avg_lost_sales: f64,
    daily_records: Vec<DailyRecord>,
}

/// Aggregates over the days of a single day type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTypeSummary {
    pub day_type: DayType,
    pub count: usize,
    pub avg_demand: f64,
    pub avg_sold: f64,
    pub avg_unsold: f64,
    pub avg_lost_sales: f64,
    pub avg_profit: f64,
    pub total_profit: i64,
}

fn mean<I>(values: I, n: usize) -> f64
where
    I: Iterator<Item = f64>,
{
    values.sum::<f64>() / n as f64
}

impl SimulationResult {
    /// `records` must be non-empty; the engine rejects zero-day runs first.
    pub(crate) fn from_records(
        stock_quantity: u32,
        records: Vec<DailyRecord>,
        total_profit: i64,
    ) -> Self {
        let n = records.len();
        Self {
            stock_quantity,
            num_days: n,
            total_profit,
            avg_profit_per_day: total_profit as f64 / n as f64,
            avg_demand: mean(records.iter().map(|r| f64::from(r.demand)), n),
            avg_sold: mean(records.iter().map(|r| f64::from(r.sold)), n),
            avg_unsold: mean(records.iter().map(|r| f64::from(r.unsold)), n),
            avg_lost_sales: mean(records.iter().map(|r| f64::from(r.lost_sales)), n),
            daily_records: records,
        }
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Day-by-day trace in simulated order.
    pub fn records(&self) -> &[DailyRecord] {
        &self.daily_records
    }

    pub fn total_profit(&self) -> i64 {
        self.total_profit
    }

    pub fn avg_profit_per_day(&self) -> f64 {
        self.avg_profit_per_day
    }

    pub fn avg_demand(&self) -> f64 {
        self.avg_demand
    }

    pub fn avg_sold(&self) -> f64 {
        self.avg_sold
    }

    pub fn avg_unsold(&self) -> f64 {
        self.avg_unsold
    }

    pub fn avg_lost_sales(&self) -> f64 {
        self.avg_lost_sales
    }

    /// Running total of profit; the last entry equals `total_profit`.
    pub fn cumulative_profit(&self) -> Vec<i64> {
        self.daily_records
            .iter()
            .scan(0i64, |acc, r| {
                *acc += r.profit;
                Some(*acc)
            })
            .collect()
    }

    /// Lowest and highest single-day profit.
    pub fn profit_range(&self) -> (i64, i64) {
        self.daily_records
            .iter()
            .fold((i64::MAX, i64::MIN), |(lo, hi), r| {
                (lo.min(r.profit), hi.max(r.profit))
            })
    }

    /// Statistics per day type, in `DayType::ALL` order.
    /// Day types that never occurred are left out.
    pub fn day_type_breakdown(&self) -> Vec<DayTypeSummary> {
        let mut breakdown = Vec::new();
        for day_type in DayType::ALL {
            let days: Vec<&DailyRecord> = self
                .daily_records
                .iter()
                .filter(|r| r.day_type == day_type)
                .collect();
            if days.is_empty() {
                continue;
            }

            let n = days.len();
            let total_profit: i64 = days.iter().map(|r| r.profit).sum();
            breakdown.push(DayTypeSummary {
                day_type,
                count: n,
                avg_demand: mean(days.iter().map(|r| f64::from(r.demand)), n),
                avg_sold: mean(days.iter().map(|r| f64::from(r.sold)), n),
                avg_unsold: mean(days.iter().map(|r| f64::from(r.unsold)), n),
                avg_lost_sales: mean(days.iter().map(|r| f64::from(r.lost_sales)), n),
                avg_profit: total_profit as f64 / n as f64,
                total_profit,
            });
        }
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::economics::UnitEconomics;

    fn record(day: usize, day_type: DayType, stock: u32, demand: u32) -> DailyRecord {
        let b = UnitEconomics::default().evaluate(stock, demand);
        DailyRecord {
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
        }
    }

    fn sample_result() -> SimulationResult {
        // stock 90: profits are 900, 100 (50 demand) and 700 (110 demand)
        let records = vec![
            record(1, DayType::High, 90, 90),
            record(2, DayType::Low, 90, 50),
            record(3, DayType::High, 90, 110),
        ];
        let total = records.iter().map(|r| r.profit).sum();
        SimulationResult::from_records(90, records, total)
    }

    #[test]
    fn test_averages() {
        let result = sample_result();
        assert_eq!(result.num_days(), 3);
        assert_eq!(result.stock_quantity(), 90);
        assert_eq!(result.total_profit(), 1700);
        assert!((result.avg_profit_per_day() - 1700.0 / 3.0).abs() < 1e-9);
        assert!((result.avg_demand() - 250.0 / 3.0).abs() < 1e-9);
        assert!((result.avg_sold() - 230.0 / 3.0).abs() < 1e-9);
        assert!((result.avg_unsold() - 40.0 / 3.0).abs() < 1e-9);
        assert!((result.avg_lost_sales() - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_profit_and_range() {
        let result = sample_result();
        assert_eq!(result.cumulative_profit(), vec![900, 1000, 1700]);
        assert_eq!(result.profit_range(), (100, 900));
    }

    #[test]
    fn test_breakdown_skips_absent_day_types() {
        let breakdown = sample_result().day_type_breakdown();
        assert_eq!(breakdown.len(), 2);

        let high = &breakdown[0];
        assert_eq!(high.day_type, DayType::High);
        assert_eq!(high.count, 2);
        assert_eq!(high.total_profit, 1600);
        assert!((high.avg_demand - 100.0).abs() < 1e-9);
        assert!((high.avg_lost_sales - 10.0).abs() < 1e-9);

        let low = &breakdown[1];
        assert_eq!(low.day_type, DayType::Low);
        assert_eq!(low.count, 1);
        assert_eq!(low.total_profit, 100);
        assert!((low.avg_unsold - 40.0).abs() < 1e-9);
    }
}
