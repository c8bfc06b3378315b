use serde::Serialize;

use crate::planner::constants::DAYS_PER_WEEK;

/// Kind of session scheduled on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutKind {
    FullBodyA,
    FullBodyB,
    FullBodyC,
    Hiit,
    Rest,
}

impl WorkoutKind {
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::FullBodyA => "A",
            WorkoutKind::FullBodyB => "B",
            WorkoutKind::FullBodyC => "C",
            WorkoutKind::Hiit => "HIIT",
            WorkoutKind::Rest => "REST",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WorkoutKind::FullBodyA => "Full-Body A",
            WorkoutKind::FullBodyB => "Full-Body B",
            WorkoutKind::FullBodyC => "Full-Body C",
            WorkoutKind::Hiit => "Cardio / HIIT",
            WorkoutKind::Rest => "Rest / Walk",
        }
    }
}

/// The same rotation every week.
pub const WEEKLY_ROTATION: [WorkoutKind; DAYS_PER_WEEK] = [
    WorkoutKind::FullBodyA,
    WorkoutKind::Hiit,
    WorkoutKind::FullBodyB,
    WorkoutKind::Rest,
    WorkoutKind::FullBodyC,
    WorkoutKind::Hiit,
    WorkoutKind::Rest,
];

/// Workout for a zero-based day index; wraps past the end of the week.
pub fn workout_for_day(day: usize) -> WorkoutKind {
    WEEKLY_ROTATION[day % DAYS_PER_WEEK]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthExercise {
    pub exercise: &'static str,
    pub sets: u32,
    /// Reps or a hold time, e.g. "8-10" or "45s".
    pub reps: &'static str,
    pub rest: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardioBlock {
    pub kind: &'static str,
    pub detail: &'static str,
    pub minutes: u32,
}

/// Steady-state alternative offered on cardio days.
pub const STEADY_ROWING_MINUTES: u32 = 40;

/// Suggested walk on rest days.
pub const REST_WALK_MINUTES: u32 = 30;

const fn lift(
    exercise: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
) -> StrengthExercise {
    StrengthExercise {
        exercise,
        sets,
        reps,
        rest,
    }
}

const FULL_BODY_A: [StrengthExercise; 5] = [
    lift("Goblet Squat", 4, "8-10", "90s"),
    lift("DB Bench / Floor Press", 4, "8-10", "90s"),
    lift("One-Arm DB Row (each)", 4, "10", "60s"),
    lift("DB Romanian Deadlift", 3, "12", "90s"),
    lift("Plank", 3, "45s", "45s"),
];

const FULL_BODY_B: [StrengthExercise; 5] = [
    lift("Split Squat (each)", 3, "10", "60-75s"),
    lift("DB Overhead Press", 4, "8-10", "90s"),
    lift("Renegade Row", 3, "10", "60s"),
    lift("Hip Thrust (DB on hips)", 3, "12", "90s"),
    lift("Side Plank (each)", 3, "30s", "45s"),
];

const FULL_BODY_C: [StrengthExercise; 5] = [
    lift("Step-Ups (each)", 3, "10", "60s"),
    lift("Incline Push-Ups (feet up)", 4, "12", "60s"),
    lift("DB Deadlift", 4, "8", "90s"),
    lift("DB Curl", 3, "12", "60s"),
    lift("Russian Twists (total)", 3, "20", "45s"),
];

pub const HIIT_BLOCKS: [CardioBlock; 2] = [
    CardioBlock {
        kind: "Rowing Intervals",
        detail: "10 x (1 min hard / 1 min easy)",
        minutes: 20,
    },
    CardioBlock {
        kind: "Bodyweight HIIT",
        detail: "4 rounds: Jump Squats 15, Push-Ups 12, DB Thrusters 12, Mountain Climbers 30s, Rest 60s",
        minutes: 20,
    },
];

/// Strength table for a lifting day; empty for cardio and rest days.
pub fn strength_exercises(kind: WorkoutKind) -> &'static [StrengthExercise] {
    match kind {
        WorkoutKind::FullBodyA => &FULL_BODY_A,
        WorkoutKind::FullBodyB => &FULL_BODY_B,
        WorkoutKind::FullBodyC => &FULL_BODY_C,
        WorkoutKind::Hiit | WorkoutKind::Rest => &[],
    }
}

/// Cardio blocks for a cardio day; empty otherwise.
pub fn cardio_blocks(kind: WorkoutKind) -> &'static [CardioBlock] {
    match kind {
        WorkoutKind::Hiit => &HIIT_BLOCKS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation() {
        let codes: Vec<&str> = (0..7).map(|d| workout_for_day(d).code()).collect();
        assert_eq!(codes, ["A", "HIIT", "B", "REST", "C", "HIIT", "REST"]);
        assert_eq!(workout_for_day(7), WorkoutKind::FullBodyA);
    }

    #[test]
    fn test_tables_match_kind() {
        assert_eq!(strength_exercises(WorkoutKind::FullBodyB).len(), 5);
        assert!(strength_exercises(WorkoutKind::Hiit).is_empty());
        assert_eq!(cardio_blocks(WorkoutKind::Hiit).len(), 2);
        assert!(cardio_blocks(WorkoutKind::Rest).is_empty());
    }
}
