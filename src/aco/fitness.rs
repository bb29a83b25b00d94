//! Penalty-based fitness evaluation.
//!
//! Fitness is maximized. Each class pays additive penalties for the
//! constraints its assignment breaks and earns the pheromone value of its
//! cell as a bonus:
//!
//! | Condition | Default penalty |
//! |-----------|-----------------|
//! | Teacher unavailable at the slot | 1000 |
//! | Room unavailable at the slot | 1000 |
//! | Room capacity below class size | 500 |
//! | Slot not preferred by the class | 100 |
//! | Teacher already used at the slot by an earlier class | 1000 |
//! | Room already used at the slot by an earlier class | 1000 |
//! | Slot already used by any earlier class | 1000 |
//!
//! # Conflict charging
//! Classes are scanned in index order and usage is recorded as they are
//! visited, so a conflicting pair is charged once, to the later class.
//! The scale of the penalty constants depends on this.
//!
//! # Scratch state
//! Usage markers live in stamp arrays owned by the evaluator and are
//! invalidated by bumping a generation counter, so an evaluation does not
//! allocate.

use serde::{Deserialize, Serialize};

use super::PheromoneField;
use crate::models::{ProblemInstance, Schedule};

/// Constraint categories priced by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Teacher not available at the slot.
    TeacherUnavailable,
    /// Room not available at the slot.
    RoomUnavailable,
    /// Room has fewer seats than the class needs.
    RoomTooSmall,
    /// Slot is not one of the class's preferred slots.
    UnpreferredSlot,
    /// Teacher already teaches another class at the slot.
    TeacherDoubleBooked,
    /// Room already hosts another class at the slot.
    RoomDoubleBooked,
    /// Another class already occupies the slot.
    SlotOccupied,
}

impl ViolationKind {
    /// All kinds, in evaluation order.
    pub const ALL: [ViolationKind; 7] = [
        ViolationKind::TeacherUnavailable,
        ViolationKind::RoomUnavailable,
        ViolationKind::RoomTooSmall,
        ViolationKind::UnpreferredSlot,
        ViolationKind::TeacherDoubleBooked,
        ViolationKind::RoomDoubleBooked,
        ViolationKind::SlotOccupied,
    ];

    /// Whether this is a hard constraint (everything but slot preference).
    pub fn is_hard(&self) -> bool {
        !matches!(self, ViolationKind::UnpreferredSlot)
    }
}

/// Penalty charged per violation kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyWeights {
    /// Teacher unavailable.
    pub teacher_unavailable: f64,
    /// Room unavailable.
    pub room_unavailable: f64,
    /// Room too small.
    pub room_too_small: f64,
    /// Slot not preferred.
    pub unpreferred_slot: f64,
    /// Teacher double-booked.
    pub teacher_double_booked: f64,
    /// Room double-booked.
    pub room_double_booked: f64,
    /// Slot already occupied.
    pub slot_occupied: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            teacher_unavailable: 1000.0,
            room_unavailable: 1000.0,
            room_too_small: 500.0,
            unpreferred_slot: 100.0,
            teacher_double_booked: 1000.0,
            room_double_booked: 1000.0,
            slot_occupied: 1000.0,
        }
    }
}

impl PenaltyWeights {
    /// Penalty for one violation of `kind`.
    #[inline]
    pub fn weight(&self, kind: ViolationKind) -> f64 {
        match kind {
            ViolationKind::TeacherUnavailable => self.teacher_unavailable,
            ViolationKind::RoomUnavailable => self.room_unavailable,
            ViolationKind::RoomTooSmall => self.room_too_small,
            ViolationKind::UnpreferredSlot => self.unpreferred_slot,
            ViolationKind::TeacherDoubleBooked => self.teacher_double_booked,
            ViolationKind::RoomDoubleBooked => self.room_double_booked,
            ViolationKind::SlotOccupied => self.slot_occupied,
        }
    }
}

/// One priced violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Class that pays the penalty.
    pub class: usize,
    /// Violated constraint.
    pub kind: ViolationKind,
    /// Penalty charged (positive number, subtracted from fitness).
    pub penalty: f64,
}

/// Itemized fitness of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// Total fitness (bonus minus penalties).
    pub total: f64,
    /// Sum of pheromone bonuses.
    pub pheromone: f64,
    /// Sum of penalties (positive).
    pub penalty: f64,
    /// Violations in scan order.
    pub violations: Vec<Violation>,
}

impl FitnessReport {
    /// Number of violations of `kind`.
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Whether no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violations.iter().all(|v| !v.kind.is_hard())
    }

    /// Violations charged to one class.
    pub fn violations_for_class(&self, class: usize) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.class == class).collect()
    }
}

/// Generation-stamped usage markers.
#[derive(Debug, Clone)]
struct UsageMarks {
    stamp: u32,
    teacher_slot: Vec<u32>,
    room_slot: Vec<u32>,
    slot: Vec<u32>,
}

impl UsageMarks {
    fn new(teachers: usize, rooms: usize, slots: usize) -> Self {
        Self {
            stamp: 0,
            teacher_slot: vec![0; teachers * slots],
            room_slot: vec![0; rooms * slots],
            slot: vec![0; slots],
        }
    }

    /// Invalidates all marks.
    fn begin(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.teacher_slot.fill(0);
            self.room_slot.fill(0);
            self.slot.fill(0);
            self.stamp = 1;
        }
    }

    /// Marks `idx` used; returns `true` if it was already used.
    #[inline]
    fn claim(marks: &mut [u32], idx: usize, stamp: u32) -> bool {
        if marks[idx] == stamp {
            true
        } else {
            marks[idx] = stamp;
            false
        }
    }
}

/// Scores schedules of one problem instance.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    weights: PenaltyWeights,
    slots: usize,
    marks: UsageMarks,
}

impl FitnessEvaluator {
    /// Creates an evaluator sized for `instance`.
    pub fn new(instance: &ProblemInstance, weights: PenaltyWeights) -> Self {
        let dims = instance.dimensions();
        Self {
            weights,
            slots: dims.slots(),
            marks: UsageMarks::new(dims.teachers, dims.rooms, dims.slots()),
        }
    }

    /// Penalty weights in use.
    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    /// Scores a schedule. Higher is better.
    ///
    /// Deterministic for a given schedule, instance, and field snapshot.
    ///
    /// # Panics
    /// Panics if the schedule, instance, and field disagree in shape or an
    /// assignment index is out of range.
    pub fn evaluate(
        &mut self,
        schedule: &Schedule,
        instance: &ProblemInstance,
        field: &PheromoneField,
    ) -> f64 {
        self.scan(schedule, instance, field, |_, _, _| {}).0
    }

    /// Scores a schedule and lists every violation.
    pub fn breakdown(
        &mut self,
        schedule: &Schedule,
        instance: &ProblemInstance,
        field: &PheromoneField,
    ) -> FitnessReport {
        let mut violations = Vec::new();
        let mut penalty = 0.0;
        let (total, pheromone) = self.scan(schedule, instance, field, |class, kind, weight| {
            penalty += weight;
            violations.push(Violation {
                class,
                kind,
                penalty: weight,
            });
        });

        FitnessReport {
            total,
            pheromone,
            penalty,
            violations,
        }
    }

    /// Single ordered pass over the classes.
    ///
    /// Returns `(total, pheromone)`. `on_violation` sees every charged
    /// violation with its weight.
    fn scan<F>(
        &mut self,
        schedule: &Schedule,
        instance: &ProblemInstance,
        field: &PheromoneField,
        mut on_violation: F,
    ) -> (f64, f64)
    where
        F: FnMut(usize, ViolationKind, f64),
    {
        let dims = instance.dimensions();
        assert_eq!(schedule.len(), dims.classes, "schedule length != class count");
        assert_eq!(field.dimensions(), dims, "field shape != instance shape");
        assert_eq!(self.slots, dims.slots(), "evaluator built for another instance");
        assert_eq!(self.marks.teacher_slot.len(), dims.teachers * self.slots);
        assert_eq!(self.marks.room_slot.len(), dims.rooms * self.slots);

        self.marks.begin();
        let stamp = self.marks.stamp;
        let weights = self.weights;

        let mut total = 0.0;
        let mut pheromone = 0.0;

        for (i, a) in schedule.iter() {
            let teacher = &instance.teachers[a.teacher];
            let room = &instance.rooms[a.room];
            let class = &instance.classes[i];
            let (day, hour) = a.slot();
            let slot = instance.week.slot_index(day, hour);

            let mut charge = |kind: ViolationKind| {
                let w = weights.weight(kind);
                total -= w;
                on_violation(i, kind, w);
            };

            if !teacher.is_available(day, hour) {
                charge(ViolationKind::TeacherUnavailable);
            }
            if !room.is_available(day, hour) {
                charge(ViolationKind::RoomUnavailable);
            }
            if !room.fits(class.size) {
                charge(ViolationKind::RoomTooSmall);
            }
            if !class.prefers(day, hour) {
                charge(ViolationKind::UnpreferredSlot);
            }
            if UsageMarks::claim(&mut self.marks.teacher_slot, a.teacher * self.slots + slot, stamp) {
                charge(ViolationKind::TeacherDoubleBooked);
            }
            if UsageMarks::claim(&mut self.marks.room_slot, a.room * self.slots + slot, stamp) {
                charge(ViolationKind::RoomDoubleBooked);
            }
            if UsageMarks::claim(&mut self.marks.slot, slot, stamp) {
                charge(ViolationKind::SlotOccupied);
            }

            let bonus = field.value_at(i, a.teacher, a.room, day, hour);
            total += bonus;
            pheromone += bonus;
        }

        (total, pheromone)
    }
}
