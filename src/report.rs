//! Human-readable timetable output.
//!
//! Resolves a schedule's indices against its instance into named rows
//! (class, teacher, room, weekday label, clock hour).

use std::fmt;

use serde::Serialize;

use crate::models::{ProblemInstance, Schedule};

/// One resolved class placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableRow {
    /// Class display name.
    pub class: String,
    /// Teacher display name.
    pub teacher: String,
    /// Room display name.
    pub room: String,
    /// Weekday label.
    pub day: String,
    /// Clock hour (`base_hour + hour`).
    pub hour: u32,
}

/// Timetable of a schedule, in class order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableReport {
    /// Schedule fitness.
    pub fitness: f64,
    /// One row per class.
    pub rows: Vec<TimetableRow>,
}

impl TimetableReport {
    /// Builds the report.
    ///
    /// # Panics
    /// Panics if the schedule references indices outside the instance.
    pub fn build(instance: &ProblemInstance, schedule: &Schedule, fitness: f64) -> Self {
        let rows = schedule
            .iter()
            .map(|(i, a)| TimetableRow {
                class: instance.classes[i].display_name().to_string(),
                teacher: instance.teachers[a.teacher].display_name().to_string(),
                room: instance.rooms[a.room].display_name().to_string(),
                day: instance.week.day_label(a.day),
                hour: instance.week.clock_hour(a.hour),
            })
            .collect();

        Self { fitness, rows }
    }
}

impl fmt::Display for TimetableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class: {}, Teacher: {}, Room: {}, Day: {}, Hour: {:02}:00",
            self.class, self.teacher, self.room, self.day, self.hour
        )
    }
}

impl fmt::Display for TimetableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        write!(f, "Fitness: {:.2}", self.fitness)
    }
}
