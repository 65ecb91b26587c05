// src/model/sampling.rs

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::SimulationError;

/// Tolerance allowed when checking that a table sums to 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// A discrete distribution stored as a cumulative table.
///
/// Every draw consumes exactly one uniform `[0, 1)` sample and returns the
/// first outcome whose cumulative bound is strictly greater than it, so the
/// result depends only on the generator state and the table order.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    outcomes: Vec<T>,
    cumulative: Vec<f64>,
    /// Index of the last outcome with nonzero probability.
    last_live: usize,
    unit: Uniform<f64>,
}

impl<T: Copy + std::fmt::Debug> WeightedTable<T> {
    /// Builds the table, keeping the entries in the order given.
    ///
    /// `label` only names the table in error messages.
    pub fn new(label: &str, entries: &[(T, f64)]) -> Result<Self, SimulationError> {
        if entries.is_empty() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "{} has no outcomes",
                label
            )));
        }

        let mut outcomes = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut running = 0.0;
        let mut last_live = 0;

        for (i, &(outcome, p)) in entries.iter().enumerate() {
            if !p.is_finite() || p < 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{}: probability {} for {:?} is not a valid probability",
                    label, p, outcome
                )));
            }
            if p > 0.0 {
                last_live = i;
            }
            running += p;
            outcomes.push(outcome);
            cumulative.push(running);
        }

        if (running - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(SimulationError::InvalidConfiguration(format!(
                "{}: probabilities sum to {}, expected 1.0",
                label, running
            )));
        }

        Ok(Self {
            outcomes,
            cumulative,
            last_live,
            unit: Uniform::new(0.0, 1.0),
        })
    }

    /// Maps a point in `[0, 1)` to its outcome.
    pub fn outcome_at(&self, u: f64) -> T {
        let idx = self.cumulative.partition_point(|&bound| bound <= u);
        // A sum slightly under 1.0 leaves a sliver past the last bound
        if idx >= self.outcomes.len() {
            return self.outcomes[self.last_live];
        }
        self.outcomes[idx]
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let u = self.unit.sample(rng);
        self.outcome_at(u)
    }

    pub fn outcomes(&self) -> &[T] {
        &self.outcomes
    }

    /// Probability of the outcome at `index`, recovered from the cumulative table.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let upper = *self.cumulative.get(index)?;
        let lower = match index {
            0 => 0.0,
            _ => self.cumulative[index - 1],
        };
        Some(upper - lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn three_way() -> WeightedTable<char> {
        WeightedTable::new("test", &[('a', 0.4), ('b', 0.3), ('c', 0.3)]).unwrap()
    }

    #[test]
    fn test_inverse_cdf_boundaries() {
        let table = three_way();
        assert_eq!(table.outcome_at(0.0), 'a');
        assert_eq!(table.outcome_at(0.399), 'a');
        // A draw equal to a bound belongs to the next outcome
        assert_eq!(table.outcome_at(0.4), 'b');
        assert_eq!(table.outcome_at(0.69), 'b');
        assert_eq!(table.outcome_at(0.700_001), 'c');
        assert_eq!(table.outcome_at(0.999_999), 'c');
    }

    #[test]
    fn test_zero_probability_outcome_is_never_chosen() {
        let table = WeightedTable::new("gap", &[(1u32, 0.5), (2, 0.0), (3, 0.5)]).unwrap();
        assert_eq!(table.outcome_at(0.5), 3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_ne!(table.sample(&mut rng), 2);
        }
    }

    #[test]
    fn test_sum_within_tolerance_is_accepted() {
        let table = WeightedTable::new("near", &[(1u32, 0.5), (2, 0.5 - 1e-9)]).unwrap();
        assert_eq!(table.outcome_at(0.999_999_999_9), 2);
    }

    #[test]
    fn test_bad_tables_are_rejected() {
        let empty: [(u32, f64); 0] = [];
        assert!(WeightedTable::new("empty", &empty).is_err());
        assert!(WeightedTable::new("short", &[(1u32, 0.5), (2, 0.4)]).is_err());
        assert!(WeightedTable::new("long", &[(1u32, 0.7), (2, 0.4)]).is_err());
        assert!(WeightedTable::new("neg", &[(1u32, 1.2), (2, -0.2)]).is_err());
        assert!(WeightedTable::new("nan", &[(1u32, f64::NAN), (2, 1.0)]).is_err());
    }

    #[test]
    fn test_probability_recovers_entries() {
        let table = three_way();
        assert!((table.probability(0).unwrap() - 0.4).abs() < 1e-12);
        assert!((table.probability(1).unwrap() - 0.3).abs() < 1e-12);
        assert!((table.probability(2).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(table.probability(3), None);
        assert_eq!(table.outcomes(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_sliver_past_last_bound_skips_trailing_zero_outcomes() {
        let table = WeightedTable::new("tail", &[(1u32, 1.0 - 1e-9), (2, 0.0)]).unwrap();
        assert_eq!(table.outcome_at(0.999_999_999_5), 1);

        let table =
            WeightedTable::new("tail2", &[(1u32, 0.5), (2, 0.5 - 1e-9), (3, 0.0), (4, 0.0)])
                .unwrap();
        assert_eq!(table.outcome_at(0.999_999_999_5), 2);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let table = three_way();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let xs: Vec<char> = (0..50).map(|_| table.sample(&mut a)).collect();
        let ys: Vec<char> = (0..50).map(|_| table.sample(&mut b)).collect();
        assert_eq!(xs, ys);
    }
}
