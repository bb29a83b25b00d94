//! Schedule (solution) model.
//!
//! A schedule holds one `(teacher, room, day, hour)` assignment per class
//! session, index-aligned with [`ProblemInstance::classes`]. Schedules are
//! plain values: the search copies them, it never shares them.
//!
//! [`ProblemInstance::classes`]: super::ProblemInstance::classes

use serde::{Deserialize, Serialize};

/// Placement of one class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Teacher index.
    pub teacher: usize,
    /// Room index.
    pub room: usize,
    /// Day index.
    pub day: usize,
    /// Hour index within the day.
    pub hour: usize,
}

/// A complete timetable: one assignment per class, in class order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments, `assignments[i]` belongs to class `i`.
    pub assignments: Vec<Assignment>,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(teacher: usize, room: usize, day: usize, hour: usize) -> Self {
        Self {
            teacher,
            room,
            day,
            hour,
        }
    }

    /// The `(day, hour)` slot.
    #[inline]
    pub fn slot(&self) -> (usize, usize) {
        (self.day, self.hour)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from class-ordered assignments.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Appends the assignment of the next class.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assigned classes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no class is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignment of a class.
    pub fn assignment_for_class(&self, class: usize) -> Option<&Assignment> {
        self.assignments.get(class)
    }

    /// Iterates `(class index, assignment)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Assignment)> {
        self.assignments.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        Schedule::from_assignments(vec![
            Assignment::new(0, 1, 0, 3),
            Assignment::new(1, 1, 2, 3),
            Assignment::new(0, 0, 4, 9),
        ])
    }

    #[test]
    fn test_schedule_accessors() {
        let s = sample_schedule();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.assignment_for_class(1), Some(&Assignment::new(1, 1, 2, 3)));
        assert!(s.assignment_for_class(3).is_none());
        assert_eq!(s.assignments[2].slot(), (4, 9));
    }

    #[test]
    fn test_schedule_is_value() {
        let a = sample_schedule();
        let mut b = a.clone();
        b.assignments[0].hour = 0;
        assert_ne!(a, b);
        assert_eq!(a.assignments[0].hour, 3);
    }

    #[test]
    fn test_empty_schedule() {
        let mut s = Schedule::new();
        assert!(s.is_empty());
        s.push(Assignment::new(0, 0, 0, 0));
        assert_eq!(s.len(), 1);
    }
}
