//! Problem instance: the fixed inputs of one timetabling run.
//!
//! The instance is immutable while a search runs. Its dimensions fix the
//! shape of every schedule and of the desirability field.

use serde::{Deserialize, Serialize};

use super::{ClassSession, Room, Teacher, WeekLayout};

/// Sizes of the five assignment dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of class sessions.
    pub classes: usize,
    /// Number of teachers.
    pub teachers: usize,
    /// Number of rooms.
    pub rooms: usize,
    /// Number of days.
    pub days: usize,
    /// Number of hours per day.
    pub hours_per_day: usize,
}

impl Dimensions {
    /// Creates a dimension set.
    pub fn new(classes: usize, teachers: usize, rooms: usize, days: usize, hours_per_day: usize) -> Self {
        Self {
            classes,
            teachers,
            rooms,
            days,
            hours_per_day,
        }
    }

    /// Number of `(day, hour)` slots.
    #[inline]
    pub fn slots(&self) -> usize {
        self.days * self.hours_per_day
    }

    /// Number of `(class, teacher, room, day, hour)` cells.
    #[inline]
    pub fn cells(&self) -> usize {
        self.classes * self.teachers * self.rooms * self.slots()
    }
}

/// A complete timetabling problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Week shape and labels.
    pub week: WeekLayout,
    /// Available teachers.
    pub teachers: Vec<Teacher>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Class sessions to place (schedule order follows this list).
    pub classes: Vec<ClassSession>,
}

impl ProblemInstance {
    /// Creates an empty instance for the given week.
    pub fn new(week: WeekLayout) -> Self {
        Self {
            week,
            teachers: Vec::new(),
            rooms: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a class session.
    pub fn with_class(mut self, class: ClassSession) -> Self {
        self.classes.push(class);
        self
    }

    /// Dimensions of the assignment space.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(
            self.classes.len(),
            self.teachers.len(),
            self.rooms.len(),
            self.week.days,
            self.week.hours_per_day,
        )
    }

    /// Number of class sessions.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
