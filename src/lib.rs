//! Course timetabling by pheromone-reinforced stochastic search.
//!
//! Assigns every class session a teacher, a room, a day, and an hour,
//! scoring full timetables with additive constraint penalties plus a
//! desirability ("pheromone") bonus that accumulates across iterations.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProblemInstance`, `Teacher`, `Room`,
//!   `ClassSession`, `SlotGrid`, `WeekLayout`, `Schedule`, `Assignment`
//! - **`aco`**: Search core: pheromone field, candidate sources, fitness
//!   evaluation, and the search loop
//! - **`validation`**: Input integrity checks (shapes, IDs, index ranges, parameters)
//! - **`generator`**: Seeded random instance construction
//! - **`report`**: Named, human-readable timetable rows
//!
//! # Example
//!
//! ```
//! use u_timetable::aco::{solve, SearchConfig};
//! use u_timetable::generator::{InstanceGenerator, InstanceGeneratorConfig};
//! use u_timetable::report::TimetableReport;
//!
//! let instance = InstanceGenerator::new(InstanceGeneratorConfig::small(), 42).generate();
//! let outcome = solve(&instance, &SearchConfig::default().with_iterations(100).with_seed(7)).unwrap();
//! let report = TimetableReport::build(&instance, &outcome.best, outcome.fitness);
//! assert_eq!(report.rows.len(), instance.class_count());
//! ```
//!
//! # Limitations
//!
//! The search is stochastic and may end on an infeasible or suboptimal
//! timetable. There is no backtracking, constraint propagation, or
//! optimality proof.
//!
//! # References
//!
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod aco;
pub mod generator;
pub mod models;
pub mod report;
pub mod validation;
