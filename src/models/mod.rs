pub mod log;
pub mod macros;
pub mod meal;
pub mod plan;
pub mod profile;

pub use log::{
    BodyStatEntry, MealEntry, NewBodyStat, NewMeal, NewWorkout, SyncEvent, WorkoutEntry,
};
pub use macros::{MacroTotals, SplitMacros};
pub use meal::{Day, Ingredient, Meal, MealLabel, Owner, Recipe, Unit, Week};
pub use plan::{EnergyTargets, GroceryLine};
pub use profile::{ActivityLevel, Goal, Person, Profile, Sex};
