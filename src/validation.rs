//! Input validation for timetabling problems.
//!
//! Checks structural integrity of instances, schedules, and search
//! configuration before a run. Detects:
//! - Empty dimensions (no classes, teachers, rooms, days, or hours)
//! - Grids whose shape differs from the week layout
//! - Duplicate IDs
//! - Schedules of the wrong length or with out-of-range indices
//! - Unusable search parameters
//!
//! The search engine itself does not re-check these conditions: once
//! validation has passed, a contract violation inside the core panics.

use std::collections::HashSet;

use crate::aco::SearchConfig;
use crate::models::{ProblemInstance, Schedule, SlotGrid};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A dimension of the instance is zero.
    EmptyDimension,
    /// A grid does not match the week shape.
    GridShapeMismatch,
    /// Grid rows have differing lengths.
    JaggedGrid,
    /// Two entities share the same ID.
    DuplicateId,
    /// Schedule length differs from the class count.
    ScheduleLengthMismatch,
    /// A schedule index is outside its dimension.
    IndexOutOfRange,
    /// A search parameter is unusable.
    InvalidConfig,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a problem instance.
///
/// Checks:
/// 1. At least one class, teacher, room, day, and hour
/// 2. Every availability/preference grid has the week's shape
/// 3. No duplicate teacher, room, or class IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &ProblemInstance) -> ValidationResult {
    let mut errors = Vec::new();
    let week = &instance.week;

    for (what, count) in [
        ("classes", instance.classes.len()),
        ("teachers", instance.teachers.len()),
        ("rooms", instance.rooms.len()),
        ("days", week.days),
        ("hours per day", week.hours_per_day),
    ] {
        if count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDimension,
                format!("Instance has no {what}"),
            ));
        }
    }

    let mut check_grid = |owner: &str, id: &str, grid: &SlotGrid| {
        if !grid.has_shape(week.days, week.hours_per_day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::GridShapeMismatch,
                format!(
                    "{owner} '{id}' grid is {}x{}, week is {}x{}",
                    grid.days, grid.hours_per_day, week.days, week.hours_per_day
                ),
            ));
        }
    };
    for t in &instance.teachers {
        check_grid("Teacher", &t.id, &t.availability);
    }
    for r in &instance.rooms {
        check_grid("Room", &r.id, &r.availability);
    }
    for c in &instance.classes {
        check_grid("Class", &c.id, &c.preferred);
    }

    check_duplicates("teacher", instance.teachers.iter().map(|t| t.id.as_str()), &mut errors);
    check_duplicates("room", instance.rooms.iter().map(|r| r.id.as_str()), &mut errors);
    check_duplicates("class", instance.classes.iter().map(|c| c.id.as_str()), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a schedule against an instance.
///
/// Checks that there is exactly one assignment per class and that every
/// teacher, room, day, and hour index is in range.
pub fn validate_schedule(schedule: &Schedule, instance: &ProblemInstance) -> ValidationResult {
    let mut errors = Vec::new();
    let dims = instance.dimensions();

    if schedule.len() != dims.classes {
        errors.push(ValidationError::new(
            ValidationErrorKind::ScheduleLengthMismatch,
            format!(
                "Schedule has {} assignments, instance has {} classes",
                schedule.len(),
                dims.classes
            ),
        ));
    }

    for (class, a) in schedule.iter() {
        for (what, value, bound) in [
            ("teacher", a.teacher, dims.teachers),
            ("room", a.room, dims.rooms),
            ("day", a.day, dims.days),
            ("hour", a.hour, dims.hours_per_day),
        ] {
            if value >= bound {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IndexOutOfRange,
                    format!("Class {class}: {what} index {value} out of range 0..{bound}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates search parameters.
///
/// The evaporation factor must lie in `(0, 1]` and the initial pheromone
/// level must be finite.
pub fn validate_config(config: &SearchConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !(config.evaporation > 0.0 && config.evaporation <= 1.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!("Evaporation factor {} not in (0, 1]", config.evaporation),
        ));
    }
    if !config.initial_pheromone.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!("Initial pheromone {} is not finite", config.initial_pheromone),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates<'a>(
    what: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {what} ID: {id}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, ClassSession, Room, Teacher, WeekLayout};

    fn sample_instance() -> ProblemInstance {
        let week = WeekLayout::new(2, 3);
        ProblemInstance::new(week.clone())
            .with_teacher(Teacher::new("T1", week.open_grid()))
            .with_teacher(Teacher::new("T2", week.open_grid()))
            .with_room(Room::new("R1", 30, week.open_grid()))
            .with_class(ClassSession::new("C1", 20, week.open_grid()))
            .with_class(ClassSession::new("C2", 25, week.open_grid()))
    }

    #[test]
    fn test_valid_instance() {
        assert!(validate_instance(&sample_instance()).is_ok());
    }

    #[test]
    fn test_empty_instance() {
        let instance = ProblemInstance::new(WeekLayout::new(0, 3));
        let errors = validate_instance(&instance).unwrap_err();
        // classes, teachers, rooms, days
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyDimension)
                .count(),
            4
        );
    }

    #[test]
    fn test_grid_shape_mismatch() {
        let instance = sample_instance().with_room(Room::new("R2", 30, SlotGrid::open(3, 3)));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::GridShapeMismatch && e.message.contains("R2")));
    }

    #[test]
    fn test_duplicate_ids() {
        let week = WeekLayout::new(2, 3);
        let instance = sample_instance().with_teacher(Teacher::new("T1", week.open_grid()));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("teacher")));
    }

    #[test]
    fn test_valid_schedule() {
        let schedule = Schedule::from_assignments(vec![
            Assignment::new(0, 0, 0, 0),
            Assignment::new(1, 0, 1, 2),
        ]);
        assert!(validate_schedule(&schedule, &sample_instance()).is_ok());
    }

    #[test]
    fn test_schedule_length_mismatch() {
        let schedule = Schedule::from_assignments(vec![Assignment::new(0, 0, 0, 0)]);
        let errors = validate_schedule(&schedule, &sample_instance()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ScheduleLengthMismatch);
    }

    #[test]
    fn test_schedule_index_out_of_range() {
        let schedule = Schedule::from_assignments(vec![
            Assignment::new(2, 0, 0, 0),
            Assignment::new(0, 1, 2, 3),
        ]);
        let errors = validate_schedule(&schedule, &sample_instance()).unwrap_err();
        // teacher of class 0; room, day, hour of class 1
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::IndexOutOfRange));
    }

    #[test]
    fn test_config_validation() {
        assert!(validate_config(&SearchConfig::default()).is_ok());

        let errors = validate_config(&SearchConfig::default().with_evaporation(0.0)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidConfig);

        let errors = validate_config(
            &SearchConfig::default()
                .with_evaporation(1.5)
                .with_initial_pheromone(f64::NAN),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
