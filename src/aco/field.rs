//! Desirability ("pheromone") field.
//!
//! One reinforcement weight per `(class, teacher, room, day, hour)` cell.
//! The field is the only state that persists across search iterations:
//! each iteration reinforces the cells used by the best schedule and then
//! decays the whole field.
//!
//! # Layout
//! A single flat buffer, row-major over
//! `[class][teacher][room][day][hour]`. Offsets are computed, never chased.
//!
//! # Signed reinforcement
//! The reinforcement amount is a fitness value and may be negative, so an
//! infeasible best schedule lowers the weight of the cells it used. Cells
//! are never clamped to a floor.

use crate::models::{Dimensions, Schedule};

/// Dense pheromone field over the assignment space.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    dims: Dimensions,
    values: Vec<f64>,
    epochs: usize,
}

impl PheromoneField {
    /// Allocates a field with every cell set to `initial`.
    pub fn new(dims: Dimensions, initial: f64) -> Self {
        Self {
            dims,
            values: vec![initial; dims.cells()],
            epochs: 0,
        }
    }

    /// Allocates a field with every cell set to 1.0.
    pub fn initialize(dims: Dimensions) -> Self {
        Self::new(dims, 1.0)
    }

    /// Field dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of decays applied so far.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Linear offset of a cell.
    ///
    /// # Panics
    /// Panics if any index is outside its dimension.
    #[inline]
    fn offset(&self, class: usize, teacher: usize, room: usize, day: usize, hour: usize) -> usize {
        let d = &self.dims;
        assert!(
            class < d.classes
                && teacher < d.teachers
                && room < d.rooms
                && day < d.days
                && hour < d.hours_per_day,
            "cell ({class}, {teacher}, {room}, {day}, {hour}) outside field {d:?}"
        );
        (((class * d.teachers + teacher) * d.rooms + room) * d.days + day) * d.hours_per_day + hour
    }

    /// Reads one cell.
    #[inline]
    pub fn value_at(&self, class: usize, teacher: usize, room: usize, day: usize, hour: usize) -> f64 {
        self.values[self.offset(class, teacher, room, day, hour)]
    }

    /// Adds `amount` to the cell of every class assignment in `schedule`.
    ///
    /// # Panics
    /// Panics if the schedule length differs from the class dimension.
    pub fn reinforce(&mut self, schedule: &Schedule, amount: f64) {
        assert_eq!(
            schedule.len(),
            self.dims.classes,
            "schedule length does not match field class dimension"
        );
        for (class, a) in schedule.iter() {
            let idx = self.offset(class, a.teacher, a.room, a.day, a.hour);
            self.values[idx] += amount;
        }
    }

    /// Multiplies every cell by `factor`.
    pub fn decay(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
        self.epochs += 1;
    }

    /// Smallest cell value (`None` for an empty field).
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest cell value (`None` for an empty field).
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Raw cell values in layout order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn dims() -> Dimensions {
        Dimensions::new(2, 3, 2, 2, 4)
    }

    #[test]
    fn test_initialize() {
        let field = PheromoneField::initialize(dims());
        assert_eq!(field.as_slice().len(), 2 * 3 * 2 * 2 * 4);
        assert!(field.as_slice().iter().all(|&v| v == 1.0));
        assert_eq!(field.epochs(), 0);
    }

    #[test]
    fn test_offsets_are_distinct() {
        let d = dims();
        let field = PheromoneField::initialize(d);
        let mut seen = std::collections::HashSet::new();
        for c in 0..d.classes {
            for t in 0..d.teachers {
                for r in 0..d.rooms {
                    for day in 0..d.days {
                        for h in 0..d.hours_per_day {
                            assert!(seen.insert(field.offset(c, t, r, day, h)));
                        }
                    }
                }
            }
        }
        assert_eq!(seen.len(), d.cells());
        assert_eq!(field.offset(1, 2, 1, 1, 3), d.cells() - 1);
    }

    #[test]
    fn test_decay_is_multiplicative() {
        let mut field = PheromoneField::initialize(dims());
        field.decay(0.95);
        assert!(field.as_slice().iter().all(|&v| v == 0.95));

        for _ in 0..9 {
            field.decay(0.95);
        }
        let expected = 0.95_f64.powi(10);
        assert!(field
            .as_slice()
            .iter()
            .all(|&v| (v - expected).abs() < 1e-12));
        assert_eq!(field.epochs(), 10);
    }

    #[test]
    fn test_reinforce_touches_only_assigned_cells() {
        let mut field = PheromoneField::initialize(dims());
        let schedule = Schedule::from_assignments(vec![
            Assignment::new(2, 1, 0, 3),
            Assignment::new(0, 0, 1, 1),
        ]);
        field.reinforce(&schedule, 4.0);

        assert_eq!(field.value_at(0, 2, 1, 0, 3), 5.0);
        assert_eq!(field.value_at(1, 0, 0, 1, 1), 5.0);
        assert_eq!(field.value_at(1, 2, 1, 0, 3), 1.0);
        let total: f64 = field.as_slice().iter().sum();
        assert_eq!(total, dims().cells() as f64 + 8.0);
    }

    #[test]
    fn test_negative_reinforcement() {
        let mut field = PheromoneField::initialize(dims());
        let schedule = Schedule::from_assignments(vec![
            Assignment::new(0, 0, 0, 0),
            Assignment::new(0, 0, 0, 0),
        ]);
        field.reinforce(&schedule, -2500.0);
        assert_eq!(field.value_at(0, 0, 0, 0, 0), -2499.0);
        assert_eq!(field.min(), Some(-2499.0));
        assert_eq!(field.max(), Some(1.0));
    }

    #[test]
    fn test_reinforce_order_independent() {
        let a = Schedule::from_assignments(vec![
            Assignment::new(0, 0, 0, 0),
            Assignment::new(1, 1, 1, 1),
        ]);
        let b = Schedule::from_assignments(vec![
            Assignment::new(2, 1, 0, 2),
            Assignment::new(2, 0, 1, 3),
        ]);

        let mut ab = PheromoneField::initialize(dims());
        ab.reinforce(&a, 3.5);
        ab.reinforce(&b, -7.25);

        let mut ba = PheromoneField::initialize(dims());
        ba.reinforce(&b, -7.25);
        ba.reinforce(&a, 3.5);

        assert_eq!(ab, ba);
    }

    #[test]
    #[should_panic]
    fn test_reinforce_wrong_length_panics() {
        let mut field = PheromoneField::initialize(dims());
        let schedule = Schedule::from_assignments(vec![Assignment::new(0, 0, 0, 0)]);
        field.reinforce(&schedule, 1.0);
    }

    #[test]
    #[should_panic]
    fn test_value_out_of_range_panics() {
        let field = PheromoneField::initialize(dims());
        field.value_at(0, 3, 0, 0, 0);
    }
}
