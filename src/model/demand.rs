// src/model/demand.rs

use rand::Rng;
use std::collections::HashMap;

use crate::error::SimulationError;
use crate::model::day_type::DayType;
use crate::model::sampling::WeightedTable;

/// Two-stage demand mixture: pick a day type, then a demand quantity
/// from that day type's table.
#[derive(Debug, Clone)]
pub struct DemandModel {
    day_types: WeightedTable<DayType>,
    demand_by_type: HashMap<DayType, WeightedTable<u32>>,
}

impl DemandModel {
    /// Builds the cumulative tables once.
    ///
    /// Every day type that can be drawn must have its own demand table.
    pub fn new(
        day_type_probs: &[(DayType, f64)],
        demand_probs: &[(DayType, Vec<(u32, f64)>)],
    ) -> Result<Self, SimulationError> {
        let day_types = WeightedTable::new("day type table", day_type_probs)?;

        let mut demand_by_type = HashMap::new();
        for (day_type, entries) in demand_probs {
            let label = format!("{} demand table", day_type);
            let table = WeightedTable::new(&label, entries)?;
            if demand_by_type.insert(*day_type, table).is_some() {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} is defined more than once",
                    label
                )));
            }
        }

        for day_type in day_types.outcomes() {
            if !demand_by_type.contains_key(day_type) {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "no demand table for day type {}",
                    day_type
                )));
            }
        }

        Ok(Self {
            day_types,
            demand_by_type,
        })
    }

    pub fn sample_day_type<R: Rng + ?Sized>(&self, rng: &mut R) -> DayType {
        self.day_types.sample(rng)
    }

    pub fn sample_demand<R: Rng + ?Sized>(&self, day_type: DayType, rng: &mut R) -> u32 {
        // Presence of every drawable day type is checked in `new`
        match self.demand_by_type.get(&day_type) {
            Some(table) => table.sample(rng),
            None => unreachable!("day type {} has no demand table", day_type),
        }
    }

    /// Draws one day: exactly two uniform samples, day type first.
    pub fn sample_day<R: Rng + ?Sized>(&self, rng: &mut R) -> (DayType, u32) {
        let day_type = self.sample_day_type(rng);
        let demand = self.sample_demand(day_type, rng);
        (day_type, demand)
    }

    pub fn day_type_table(&self) -> &WeightedTable<DayType> {
        &self.day_types
    }

    pub fn demand_table(&self, day_type: DayType) -> Option<&WeightedTable<u32>> {
        self.demand_by_type.get(&day_type)
    }

    /// Largest demand any table can produce.
    pub fn max_demand(&self) -> u32 {
        self.demand_by_type
            .values()
            .flat_map(|table| table.outcomes().iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::SimulationConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bookstore() -> DemandModel {
        let config = SimulationConfig::default();
        DemandModel::new(&config.day_type_probs, &config.demand_probs).unwrap()
    }

    #[test]
    fn test_default_tables_load() {
        let model = bookstore();
        assert_eq!(model.day_type_table().outcomes(), &DayType::ALL);
        let high = model.demand_table(DayType::High).unwrap();
        assert_eq!(high.outcomes(), &[50, 60, 70, 80, 90, 100, 110]);
        assert!((high.probability(4).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(model.max_demand(), 110);
    }

    #[test]
    fn test_missing_demand_table_is_rejected() {
        let config = SimulationConfig::default();
        let partial: Vec<_> = config
            .demand_probs
            .iter()
            .filter(|(t, _)| *t != DayType::Low)
            .cloned()
            .collect();
        let err = DemandModel::new(&config.day_type_probs, &partial).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_duplicate_demand_table_is_rejected() {
        let config = SimulationConfig::default();
        let mut doubled = config.demand_probs.clone();
        doubled.push(config.demand_probs[0].clone());
        assert!(DemandModel::new(&config.day_type_probs, &doubled).is_err());
    }

    #[test]
    fn test_sampled_demand_comes_from_the_table() {
        let model = bookstore();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let (_, demand) = model.sample_day(&mut rng);
            assert!(demand >= 50 && demand <= 110 && demand % 10 == 0);
        }
    }

    #[test]
    fn test_degenerate_day_type_always_drawn() {
        let model = DemandModel::new(
            &[(DayType::Medium, 1.0)],
            &[(DayType::Medium, vec![(70, 1.0)])],
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..20 {
            assert_eq!(model.sample_day(&mut rng), (DayType::Medium, 70));
        }
    }
}
