//! Pheromone-reinforced search loop.
//!
//! # Algorithm
//!
//! 1. Draw one candidate, evaluate it, make it the incumbent.
//! 2. For a fixed number of iterations:
//!    a. draw and evaluate a fresh candidate;
//!    b. replace the incumbent if the candidate scores strictly higher;
//!    c. reinforce the incumbent's cells by its fitness;
//!    d. decay the whole field.
//!
//! Reinforcement always precedes decay, and both finish before the next
//! candidate is scored. There is no early stopping and no restart.
//!
//! The field and the incumbent are owned by [`SearchEngine`]; nothing is
//! global, so independent engines can run side by side.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::{
    CandidateSource, FitnessEvaluator, FitnessReport, PenaltyWeights, PheromoneField,
    RandomCandidates, SearchConfig,
};
use crate::models::{ProblemInstance, Schedule};
use crate::validation::{validate_config, validate_instance, ValidationError};

/// Upper bound on history slots reserved up front.
const HISTORY_PREALLOC: usize = 1 << 16;

/// Run state of a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Iterations remain.
    Running,
    /// The iteration budget is spent.
    Done,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best schedule found.
    pub best: Schedule,
    /// Fitness of `best` at the time it was accepted.
    pub fitness: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Number of times the incumbent was replaced.
    pub improvements: usize,
    /// Incumbent fitness: initial value, then one entry per iteration.
    /// Empty when history recording is off.
    pub history: Vec<f64>,
    /// Final desirability field.
    pub field: PheromoneField,
    /// Seed of the candidate stream, when known.
    pub seed: Option<u64>,
}

impl SearchOutcome {
    /// Itemizes the best schedule against the final field.
    ///
    /// The penalty matches the one behind [`fitness`](Self::fitness), but
    /// the pheromone term is read from the field as it stands after the
    /// last decay, so `total` generally differs from `fitness`.
    pub fn breakdown(&self, instance: &ProblemInstance, weights: PenaltyWeights) -> FitnessReport {
        FitnessEvaluator::new(instance, weights).breakdown(&self.best, instance, &self.field)
    }
}

/// Stepwise pheromone search over one problem instance.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_timetable::aco::{RandomCandidates, SearchConfig, SearchEngine};
/// use u_timetable::generator::{InstanceGenerator, InstanceGeneratorConfig};
///
/// let instance = InstanceGenerator::new(InstanceGeneratorConfig::small(), 1).generate();
/// let mut source = RandomCandidates::new(ChaCha8Rng::seed_from_u64(1));
/// let engine = SearchEngine::new(&instance, SearchConfig::default().with_iterations(20), &mut source)
///     .unwrap();
/// let outcome = engine.run(&mut source);
/// assert_eq!(outcome.iterations, 20);
/// assert_eq!(outcome.best.len(), instance.class_count());
/// ```
#[derive(Debug)]
pub struct SearchEngine<'a> {
    instance: &'a ProblemInstance,
    config: SearchConfig,
    evaluator: FitnessEvaluator,
    field: PheromoneField,
    best: Schedule,
    best_fitness: f64,
    iteration: usize,
    improvements: usize,
    history: Vec<f64>,
}

impl<'a> SearchEngine<'a> {
    /// Validates the inputs, initializes the field, and scores the first
    /// candidate drawn from `source`.
    ///
    /// # Errors
    /// Returns every instance and configuration problem found.
    pub fn new<S: CandidateSource>(
        instance: &'a ProblemInstance,
        config: SearchConfig,
        source: &mut S,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = validate_instance(instance) {
            errors.extend(e);
        }
        if let Err(e) = validate_config(&config) {
            errors.extend(e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let dims = instance.dimensions();
        let field = PheromoneField::new(dims, config.initial_pheromone);
        let mut evaluator = FitnessEvaluator::new(instance, config.penalties);

        let best = source.next_candidate(instance);
        let best_fitness = evaluator.evaluate(&best, instance, &field);

        info!(
            classes = dims.classes,
            teachers = dims.teachers,
            rooms = dims.rooms,
            slots = dims.slots(),
            iterations = config.iterations,
            initial_fitness = best_fitness,
            "pheromone search started"
        );

        let mut history = Vec::new();
        if config.record_history {
            history.reserve(config.iterations.min(HISTORY_PREALLOC).saturating_add(1));
            history.push(best_fitness);
        }

        Ok(Self {
            instance,
            config,
            evaluator,
            field,
            best,
            best_fitness,
            iteration: 0,
            improvements: 0,
            history,
        })
    }

    /// Current run state.
    pub fn state(&self) -> SearchState {
        if self.iteration < self.config.iterations {
            SearchState::Running
        } else {
            SearchState::Done
        }
    }

    /// Iterations executed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current incumbent.
    pub fn best(&self) -> &Schedule {
        &self.best
    }

    /// Fitness of the current incumbent.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Current desirability field.
    pub fn field(&self) -> &PheromoneField {
        &self.field
    }

    /// Runs one iteration. Does nothing once the budget is spent.
    pub fn step<S: CandidateSource>(&mut self, source: &mut S) -> SearchState {
        if self.state() == SearchState::Done {
            return SearchState::Done;
        }

        let candidate = source.next_candidate(self.instance);
        let fitness = self.evaluator.evaluate(&candidate, self.instance, &self.field);

        if fitness > self.best_fitness {
            debug!(
                iteration = self.iteration,
                previous = self.best_fitness,
                fitness,
                "new best schedule"
            );
            self.best = candidate;
            self.best_fitness = fitness;
            self.improvements += 1;
        }

        self.field.reinforce(&self.best, self.best_fitness);
        self.field.decay(self.config.evaporation);

        self.iteration += 1;
        if self.config.record_history {
            self.history.push(self.best_fitness);
        }

        self.state()
    }

    /// Runs the remaining iterations and returns the outcome.
    pub fn run<S: CandidateSource>(mut self, source: &mut S) -> SearchOutcome {
        while self.step(source) == SearchState::Running {}
        self.into_outcome()
    }

    /// Stops here and returns the outcome so far.
    pub fn into_outcome(self) -> SearchOutcome {
        info!(
            iterations = self.iteration,
            improvements = self.improvements,
            fitness = self.best_fitness,
            "pheromone search finished"
        );

        SearchOutcome {
            best: self.best,
            fitness: self.best_fitness,
            iterations: self.iteration,
            improvements: self.improvements,
            history: self.history,
            field: self.field,
            seed: None,
        }
    }
}

/// Runs a full search with a seeded random candidate stream.
///
/// Uses `config.seed` when set, otherwise draws a seed from entropy. The
/// seed is logged and returned in the outcome so the run can be repeated.
///
/// # Errors
/// Returns every instance and configuration problem found.
pub fn solve(
    instance: &ProblemInstance,
    config: &SearchConfig,
) -> Result<SearchOutcome, Vec<ValidationError>> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "seeding candidate stream");

    let mut source = RandomCandidates::new(ChaCha8Rng::seed_from_u64(seed));
    let engine = SearchEngine::new(instance, config.clone(), &mut source)?;
    let mut outcome = engine.run(&mut source);
    outcome.seed = Some(seed);
    Ok(outcome)
}
