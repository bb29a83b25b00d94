//! Search configuration.

use serde::{Deserialize, Serialize};

use super::PenaltyWeights;

/// Parameters of one pheromone search run.
///
/// Deserializable from JSON; missing fields take their defaults.
///
/// # Example
///
/// ```
/// use u_timetable::aco::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_iterations(200)
///     .with_seed(42);
/// assert_eq!(config.iterations, 200);
/// assert!((config.evaporation - 0.95).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Iterations after the initial candidate.
    pub iterations: usize,
    /// Per-iteration multiplicative decay of the field (0, 1].
    pub evaporation: f64,
    /// Starting value of every field cell.
    pub initial_pheromone: f64,
    /// Constraint penalties.
    pub penalties: PenaltyWeights,
    /// Random seed. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Record the best fitness after every iteration.
    pub record_history: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            evaporation: 0.95,
            initial_pheromone: 1.0,
            penalties: PenaltyWeights::default(),
            seed: None,
            record_history: true,
        }
    }
}

impl SearchConfig {
    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the evaporation factor.
    pub fn with_evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = evaporation;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    /// Sets the penalty weights.
    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables fitness history.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.iterations, 1000);
        assert_eq!(c.evaporation, 0.95);
        assert_eq!(c.initial_pheromone, 1.0);
        assert_eq!(c.penalties, PenaltyWeights::default());
        assert!(c.seed.is_none());
        assert!(c.record_history);
    }

    #[test]
    fn test_partial_json() {
        let c: SearchConfig =
            serde_json::from_str(r#"{"iterations": 50, "penalties": {"unpreferred_slot": 10.0}}"#)
                .unwrap();
        assert_eq!(c.iterations, 50);
        assert_eq!(c.evaporation, 0.95);
        assert_eq!(c.penalties.unpreferred_slot, 10.0);
        assert_eq!(c.penalties.room_too_small, 500.0);
    }

    #[test]
    fn test_builder() {
        let c = SearchConfig::default()
            .with_iterations(10)
            .with_evaporation(0.5)
            .with_initial_pheromone(2.0)
            .with_seed(3)
            .with_history(false);
        assert_eq!(c.iterations, 10);
        assert_eq!(c.evaporation, 0.5);
        assert_eq!(c.initial_pheromone, 2.0);
        assert_eq!(c.seed, Some(3));
        assert!(!c.record_history);
    }
}
