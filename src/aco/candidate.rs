//! Candidate generation.
//!
//! A candidate is a full schedule drawn independently per class: teacher,
//! room, day, and hour are each uniform over their dimension. Nothing is
//! filtered here; conflicts and infeasible slots are priced by the fitness
//! evaluator.
//!
//! The search loop pulls candidates through [`CandidateSource`], so the
//! random stream can be replaced by a scripted one.

use rand::Rng;

use crate::models::{Assignment, Dimensions, ProblemInstance, Schedule};

/// Supplies one candidate schedule per call.
pub trait CandidateSource {
    /// Produces the next candidate for `instance`.
    fn next_candidate(&mut self, instance: &ProblemInstance) -> Schedule;
}

/// Draws a uniformly random schedule.
///
/// # Panics
/// Panics if any dimension other than `classes` is zero.
pub fn random_schedule<R: Rng>(dims: Dimensions, rng: &mut R) -> Schedule {
    let assignments = (0..dims.classes)
        .map(|_| {
            Assignment::new(
                rng.random_range(0..dims.teachers),
                rng.random_range(0..dims.rooms),
                rng.random_range(0..dims.days),
                rng.random_range(0..dims.hours_per_day),
            )
        })
        .collect();
    Schedule::from_assignments(assignments)
}

/// Production candidate source backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomCandidates<R> {
    rng: R,
}

impl<R: Rng> RandomCandidates<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> CandidateSource for RandomCandidates<R> {
    fn next_candidate(&mut self, instance: &ProblemInstance) -> Schedule {
        random_schedule(instance.dimensions(), &mut self.rng)
    }
}

/// Replays a fixed list of schedules in a loop.
///
/// Useful for reproducing a recorded run or driving the search with
/// hand-built candidates.
#[derive(Debug, Clone)]
pub struct ReplayCandidates {
    schedules: Vec<Schedule>,
    next: usize,
}

impl ReplayCandidates {
    /// Creates a replay source.
    ///
    /// # Panics
    /// Panics if `schedules` is empty.
    pub fn new(schedules: Vec<Schedule>) -> Self {
        assert!(!schedules.is_empty(), "replay source needs at least one schedule");
        Self { schedules, next: 0 }
    }

    /// A source that always returns the same schedule.
    pub fn constant(schedule: Schedule) -> Self {
        Self::new(vec![schedule])
    }
}

impl CandidateSource for ReplayCandidates {
    fn next_candidate(&mut self, _instance: &ProblemInstance) -> Schedule {
        let schedule = self.schedules[self.next].clone();
        self.next = (self.next + 1) % self.schedules.len();
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassSession, Room, Teacher, WeekLayout};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_instance() -> ProblemInstance {
        let week = WeekLayout::new(5, 10);
        let mut instance = ProblemInstance::new(week.clone());
        for t in 0..4 {
            instance = instance.with_teacher(Teacher::new(format!("T{t}"), week.open_grid()));
        }
        for r in 0..3 {
            instance = instance.with_room(Room::new(format!("R{r}"), 30, week.open_grid()));
        }
        for c in 0..12 {
            instance = instance.with_class(ClassSession::new(format!("C{c}"), 20, week.open_grid()));
        }
        instance
    }

    #[test]
    fn test_random_schedule_in_range() {
        let instance = make_instance();
        let dims = instance.dimensions();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let s = random_schedule(dims, &mut rng);
            assert_eq!(s.len(), dims.classes);
            assert!(crate::validation::validate_schedule(&s, &instance).is_ok());
        }
    }

    #[test]
    fn test_random_schedule_covers_dimensions() {
        let dims = Dimensions::new(500, 4, 3, 5, 10);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let s = random_schedule(dims, &mut rng);

        let teachers: std::collections::HashSet<_> = s.assignments.iter().map(|a| a.teacher).collect();
        let hours: std::collections::HashSet<_> = s.assignments.iter().map(|a| a.hour).collect();
        assert_eq!(teachers.len(), 4);
        assert_eq!(hours.len(), 10);
    }

    #[test]
    fn test_random_source_is_seed_deterministic() {
        let instance = make_instance();
        let mut a = RandomCandidates::new(ChaCha8Rng::seed_from_u64(99));
        let mut b = RandomCandidates::new(ChaCha8Rng::seed_from_u64(99));
        for _ in 0..10 {
            assert_eq!(a.next_candidate(&instance), b.next_candidate(&instance));
        }
    }

    #[test]
    fn test_replay_cycles() {
        let instance = make_instance();
        let s1 = Schedule::from_assignments(vec![Assignment::new(0, 0, 0, 0); 12]);
        let s2 = Schedule::from_assignments(vec![Assignment::new(1, 1, 1, 1); 12]);
        let mut replay = ReplayCandidates::new(vec![s1.clone(), s2.clone()]);

        assert_eq!(replay.next_candidate(&instance), s1);
        assert_eq!(replay.next_candidate(&instance), s2);
        assert_eq!(replay.next_candidate(&instance), s1);
    }

    #[test]
    #[should_panic]
    fn test_replay_empty_panics() {
        ReplayCandidates::new(Vec::new());
    }
}
