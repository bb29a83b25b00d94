//! Class session model.
//!
//! A class session is one weekly meeting of a student group that needs a
//! teacher, a room large enough for the group, and a slot.

use serde::{Deserialize, Serialize};

use super::SlotGrid;

/// A class session to be placed in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of students (required room capacity).
    pub size: u32,
    /// Slots the class would prefer to meet in.
    pub preferred: SlotGrid,
}

impl ClassSession {
    /// Creates a class session.
    pub fn new(id: impl Into<String>, size: u32, preferred: SlotGrid) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            size,
            preferred,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks one slot as not preferred.
    pub fn with_unpreferred_slot(mut self, day: usize, hour: usize) -> Self {
        self.preferred.set(day, hour, false);
        self
    }

    /// Whether `(day, hour)` is a preferred slot.
    #[inline]
    pub fn prefers(&self, day: usize, hour: usize) -> bool {
        self.preferred.get(day, hour)
    }

    /// Name for display (falls back to the ID).
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_builder() {
        let c = ClassSession::new("C1", 25, SlotGrid::open(5, 10))
            .with_name("Algebra")
            .with_unpreferred_slot(4, 9);

        assert_eq!(c.size, 25);
        assert_eq!(c.display_name(), "Algebra");
        assert!(c.prefers(0, 0));
        assert!(!c.prefers(4, 9));
    }

    #[test]
    fn test_serde_roundtrip_keeps_grid() {
        let c = ClassSession::new("C1", 20, SlotGrid::closed(1, 2).with_slot(0, 1, true));
        let json = serde_json::to_string(&c).unwrap();
        let back: ClassSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(back.prefers(0, 1));
    }
}
