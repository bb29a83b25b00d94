//! Weekly slot grids and the week layout they are shaped by.
//!
//! A slot is a `(day, hour)` pair. Teachers and rooms carry an availability
//! grid, classes carry a preferred-slot grid. All grids of one problem
//! instance share the shape `days × hours_per_day` declared by its
//! [`WeekLayout`].
//!
//! # Storage
//! Grids are flat row-major `Vec<bool>` buffers indexed by
//! `day * hours_per_day + hour`.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// Default weekday labels (Monday-first working week).
const DEFAULT_DAY_LABELS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// A boolean grid over `(day, hour)` slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    /// Number of days (rows).
    pub days: usize,
    /// Number of hours per day (columns).
    pub hours_per_day: usize,
    /// Row-major cells.
    cells: Vec<bool>,
}

impl SlotGrid {
    /// Creates a grid with every slot set to `value`.
    pub fn filled(days: usize, hours_per_day: usize, value: bool) -> Self {
        Self {
            days,
            hours_per_day,
            cells: vec![value; days * hours_per_day],
        }
    }

    /// Creates a grid with every slot open.
    pub fn open(days: usize, hours_per_day: usize) -> Self {
        Self::filled(days, hours_per_day, true)
    }

    /// Creates a grid with every slot closed.
    pub fn closed(days: usize, hours_per_day: usize) -> Self {
        Self::filled(days, hours_per_day, false)
    }

    /// Builds a grid from nested rows (`rows[day][hour]`).
    ///
    /// # Errors
    /// Returns a [`ValidationErrorKind::JaggedGrid`] error if rows differ in length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, ValidationError> {
        let hours_per_day = rows.first().map_or(0, Vec::len);
        if let Some((day, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != hours_per_day)
        {
            return Err(ValidationError::new(
                ValidationErrorKind::JaggedGrid,
                format!(
                    "Row {day} has {} hours, expected {hours_per_day}",
                    row.len()
                ),
            ));
        }

        Ok(Self {
            days: rows.len(),
            hours_per_day,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Whether the grid has the given shape.
    pub fn has_shape(&self, days: usize, hours_per_day: usize) -> bool {
        self.days == days
            && self.hours_per_day == hours_per_day
            && self.cells.len() == days * hours_per_day
    }

    /// Reads a slot.
    ///
    /// # Panics
    /// Panics if `(day, hour)` lies outside the grid.
    #[inline]
    pub fn get(&self, day: usize, hour: usize) -> bool {
        assert!(
            day < self.days && hour < self.hours_per_day,
            "slot ({day}, {hour}) outside {}x{} grid",
            self.days,
            self.hours_per_day
        );
        self.cells[day * self.hours_per_day + hour]
    }

    /// Writes a slot.
    ///
    /// # Panics
    /// Panics if `(day, hour)` lies outside the grid.
    pub fn set(&mut self, day: usize, hour: usize, value: bool) {
        assert!(
            day < self.days && hour < self.hours_per_day,
            "slot ({day}, {hour}) outside {}x{} grid",
            self.days,
            self.hours_per_day
        );
        self.cells[day * self.hours_per_day + hour] = value;
    }

    /// Builder form of [`SlotGrid::set`].
    pub fn with_slot(mut self, day: usize, hour: usize, value: bool) -> Self {
        self.set(day, hour, value);
        self
    }

    /// Number of open (`true`) slots.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Shape and labelling of the scheduling week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekLayout {
    /// Number of scheduling days.
    pub days: usize,
    /// Number of one-hour slots per day.
    pub hours_per_day: usize,
    /// Clock hour of hour index 0 (e.g. 8 → first slot is 08:00).
    pub base_hour: u32,
    /// Display labels for days. Missing labels fall back to `Day N`.
    #[serde(default)]
    pub day_labels: Vec<String>,
}

impl WeekLayout {
    /// Creates a layout with default labels and an 08:00 start.
    pub fn new(days: usize, hours_per_day: usize) -> Self {
        Self {
            days,
            hours_per_day,
            base_hour: 8,
            day_labels: DEFAULT_DAY_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Sets the clock hour of the first slot.
    pub fn with_base_hour(mut self, base_hour: u32) -> Self {
        self.base_hour = base_hour;
        self
    }

    /// Total number of slots in the week.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.days * self.hours_per_day
    }

    /// Linear slot index of `(day, hour)`.
    #[inline]
    pub fn slot_index(&self, day: usize, hour: usize) -> usize {
        day * self.hours_per_day + hour
    }

    /// Display label for a day index.
    pub fn day_label(&self, day: usize) -> String {
        self.day_labels
            .get(day)
            .cloned()
            .unwrap_or_else(|| format!("Day {}", day + 1))
    }

    /// Wall-clock hour for an hour index.
    pub fn clock_hour(&self, hour: usize) -> u32 {
        self.base_hour + hour as u32
    }

    /// An all-open grid shaped like this week.
    pub fn open_grid(&self) -> SlotGrid {
        SlotGrid::open(self.days, self.hours_per_day)
    }
}

impl Default for WeekLayout {
    fn default() -> Self {
        Self::new(5, 10)
    }
}
