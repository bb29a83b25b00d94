//! Pheromone-reinforced stochastic timetabling search.
//!
//! Combines uniform random candidate generation with a penalty fitness
//! and a desirability ("pheromone") field that accumulates signed reward
//! for the cells used by the incumbent schedule.
//!
//! # Components
//!
//! - [`PheromoneField`]: dense `(class, teacher, room, day, hour)` weights
//! - [`CandidateSource`]: pluggable candidate stream ([`RandomCandidates`], [`ReplayCandidates`])
//! - [`FitnessEvaluator`]: additive penalties plus field bonus
//! - [`SearchEngine`]: the iteration loop; [`solve`] wraps it with a seeded stream
//!
//! # Reference
//! Dorigo & Stützle (2004), "Ant Colony Optimization", Ch. 3 (pheromone update and evaporation)

mod candidate;
mod config;
mod field;
mod fitness;
mod search;

pub use candidate::{random_schedule, CandidateSource, RandomCandidates, ReplayCandidates};
pub use config::SearchConfig;
pub use field::PheromoneField;
pub use fitness::{FitnessEvaluator, FitnessReport, PenaltyWeights, Violation, ViolationKind};
pub use search::{solve, SearchEngine, SearchOutcome, SearchState};
