//! Random problem instance generator.
//!
//! Builds timetabling instances for experiments and demos. Capacities and
//! class sizes are drawn uniformly from configured ranges; each
//! availability or preference slot is open with a configured probability.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ClassSession, ProblemInstance, Room, SlotGrid, Teacher, WeekLayout};

/// Configuration for generating instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceGeneratorConfig {
    /// Number of class sessions.
    pub num_classes: usize,
    /// Number of teachers.
    pub num_teachers: usize,
    /// Number of rooms.
    pub num_rooms: usize,
    /// Number of days.
    pub num_days: usize,
    /// Hours per day.
    pub hours_per_day: usize,
    /// Clock hour of the first slot.
    pub base_hour: u32,
    /// Room capacity range (inclusive).
    pub room_capacity_range: (u32, u32),
    /// Class size range (inclusive).
    pub class_size_range: (u32, u32),
    /// Probability that a teacher slot is available.
    pub teacher_availability: f64,
    /// Probability that a room slot is available.
    pub room_availability: f64,
    /// Probability that a class prefers a slot.
    pub preference_density: f64,
}

impl Default for InstanceGeneratorConfig {
    fn default() -> Self {
        Self {
            num_classes: 35,
            num_teachers: 25,
            num_rooms: 12,
            num_days: 5,
            hours_per_day: 10,
            base_hour: 8,
            room_capacity_range: (30, 50),
            class_size_range: (20, 40),
            teacher_availability: 1.0,
            room_availability: 1.0,
            preference_density: 1.0,
        }
    }
}

impl InstanceGeneratorConfig {
    /// Small instance for quick runs and tests.
    pub fn small() -> Self {
        Self {
            num_classes: 8,
            num_teachers: 4,
            num_rooms: 3,
            num_days: 5,
            hours_per_day: 6,
            ..Self::default()
        }
    }

    /// Default sizes with partial availability and preferences.
    pub fn constrained() -> Self {
        Self {
            teacher_availability: 0.8,
            room_availability: 0.9,
            preference_density: 0.6,
            ..Self::default()
        }
    }
}

/// Generator for timetabling instances.
pub struct InstanceGenerator {
    config: InstanceGeneratorConfig,
    rng: ChaCha8Rng,
}

impl InstanceGenerator {
    /// Creates a generator with the given config and seed.
    pub fn new(config: InstanceGeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates an instance.
    pub fn generate(&mut self) -> ProblemInstance {
        let week = WeekLayout::new(self.config.num_days, self.config.hours_per_day)
            .with_base_hour(self.config.base_hour);
        let mut instance = ProblemInstance::new(week);

        for i in 1..=self.config.num_teachers {
            let grid = self.random_grid(self.config.teacher_availability);
            instance.teachers.push(Teacher::new(format!("T{i}"), grid).with_name(format!("Teacher {i}")));
        }

        for i in 1..=self.config.num_rooms {
            let capacity = self.draw_in(self.config.room_capacity_range);
            let grid = self.random_grid(self.config.room_availability);
            instance
                .rooms
                .push(Room::new(format!("R{i}"), capacity, grid).with_name(format!("Room {i}")));
        }

        for i in 1..=self.config.num_classes {
            let size = self.draw_in(self.config.class_size_range);
            let grid = self.random_grid(self.config.preference_density);
            instance
                .classes
                .push(ClassSession::new(format!("C{i}"), size, grid).with_name(format!("Class {i}")));
        }

        instance
    }

    fn draw_in(&mut self, (lo, hi): (u32, u32)) -> u32 {
        if lo >= hi {
            lo
        } else {
            self.rng.random_range(lo..=hi)
        }
    }

    fn random_grid(&mut self, p_open: f64) -> SlotGrid {
        let (days, hours) = (self.config.num_days, self.config.hours_per_day);
        if p_open >= 1.0 {
            return SlotGrid::open(days, hours);
        }
        let p = p_open.max(0.0);
        let mut grid = SlotGrid::closed(days, hours);
        for d in 0..days {
            for h in 0..hours {
                grid.set(d, h, self.rng.random_bool(p));
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_instance;

    #[test]
    fn test_default_instance_shape() {
        let instance = InstanceGenerator::new(InstanceGeneratorConfig::default(), 42).generate();
        let dims = instance.dimensions();
        assert_eq!(dims.classes, 35);
        assert_eq!(dims.teachers, 25);
        assert_eq!(dims.rooms, 12);
        assert_eq!(dims.slots(), 50);
        assert!(validate_instance(&instance).is_ok());
    }

    #[test]
    fn test_ranges_respected() {
        let instance = InstanceGenerator::new(InstanceGeneratorConfig::default(), 7).generate();
        assert!(instance.rooms.iter().all(|r| (30..=50).contains(&r.capacity)));
        assert!(instance.classes.iter().all(|c| (20..=40).contains(&c.size)));
        assert!(instance
            .teachers
            .iter()
            .all(|t| t.availability.count_true() == 50));
        assert_eq!(instance.classes[0].display_name(), "Class 1");
        assert_eq!(instance.rooms[11].display_name(), "Room 12");
    }

    #[test]
    fn test_constrained_closes_some_slots() {
        let instance = InstanceGenerator::new(InstanceGeneratorConfig::constrained(), 3).generate();
        let open: usize = instance
            .teachers
            .iter()
            .map(|t| t.availability.count_true())
            .sum();
        let total = instance.teachers.len() * 50;
        assert!(open < total);
        assert!(open > total / 2);
    }

    #[test]
    fn test_same_seed_same_instance() {
        let a = InstanceGenerator::new(InstanceGeneratorConfig::constrained(), 99).generate();
        let b = InstanceGenerator::new(InstanceGeneratorConfig::constrained(), 99).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_range() {
        let config = InstanceGeneratorConfig {
            room_capacity_range: (10, 10),
            ..InstanceGeneratorConfig::small()
        };
        let instance = InstanceGenerator::new(config, 1).generate();
        assert!(instance.rooms.iter().all(|r| r.capacity == 10));
    }
}
