//! Timetabling domain models.
//!
//! Provides the data types of a course timetabling problem and its
//! solutions. Everything is index-addressed: a schedule refers to teachers,
//! rooms, days and hours by position in the [`ProblemInstance`].
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training Center |
//! |-------------|------------|--------|-----------------|
//! | ClassSession | Lecture | Lesson | Workshop |
//! | Teacher | Lecturer | Teacher | Trainer |
//! | Room | Lecture Hall | Classroom | Training Room |
//! | Slot | Period | Period | Session Block |

mod grid;
mod instance;
mod resource;
mod schedule;
mod session;

pub use grid::{SlotGrid, WeekLayout};
pub use instance::{Dimensions, ProblemInstance};
pub use resource::{Room, Teacher};
pub use schedule::{Assignment, Schedule};
pub use session::ClassSession;
