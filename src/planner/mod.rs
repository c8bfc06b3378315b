pub mod constants;
pub mod energy;
pub mod generator;
pub mod grocery;
pub mod macros;
pub mod rng;
pub mod session;
pub mod share;
pub mod workouts;

pub use constants::*;
pub use energy::{bmr, energy_targets, goal_calories, macro_targets, tdee};
pub use generator::{
    auto_scale_day, build_day, generate_week, generate_weekly_plan, scale_factor, PlanInputs,
    WeeklyPlan,
};
pub use grocery::{aggregate_groceries, export_grocery_csv, grocery_csv_string, write_grocery_csv};
pub use macros::{day_macros, ingredient_macros, recipe_macros};
pub use rng::{fresh_seed, Mulberry32};
pub use session::PlanSession;
pub use share::{auto_share, cheat_makeup, resolve_share, steady_rowing_minutes, CheatMakeup};
pub use workouts::{workout_for_day, WorkoutKind, WEEKLY_ROTATION};
