//! Resource models: teachers and rooms.
//!
//! Both resources are bound to weekly slots through an availability grid.
//! Rooms additionally carry a seating capacity.

use serde::{Deserialize, Serialize};

use super::SlotGrid;

/// A teacher who can be assigned to class sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Slots in which the teacher can teach.
    pub availability: SlotGrid,
}

/// A room in which class sessions take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Slots in which the room can be booked.
    pub availability: SlotGrid,
}

impl Teacher {
    /// Creates a teacher with the given availability.
    pub fn new(id: impl Into<String>, availability: SlotGrid) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks one slot unavailable.
    pub fn with_blocked_slot(mut self, day: usize, hour: usize) -> Self {
        self.availability.set(day, hour, false);
        self
    }

    /// Whether the teacher is available at `(day, hour)`.
    #[inline]
    pub fn is_available(&self, day: usize, hour: usize) -> bool {
        self.availability.get(day, hour)
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

impl Room {
    /// Creates a room with the given capacity and availability.
    pub fn new(id: impl Into<String>, capacity: u32, availability: SlotGrid) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            availability,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Marks one slot unavailable.
    pub fn with_blocked_slot(mut self, day: usize, hour: usize) -> Self {
        self.availability.set(day, hour, false);
        self
    }

    /// Whether the room is available at `(day, hour)`.
    #[inline]
    pub fn is_available(&self, day: usize, hour: usize) -> bool {
        self.availability.get(day, hour)
    }

    /// Whether a group of `size` students fits.
    #[inline]
    pub fn fits(&self, size: u32) -> bool {
        self.capacity >= size
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
