use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// Daily energy and macro targets derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Basal metabolic rate (kcal).
    pub bmr: f64,

    /// Total daily energy expenditure (kcal).
    pub tdee: f64,

    /// TDEE adjusted for the goal (kcal).
    pub goal_kcal: f64,

    pub protein_g: f64,
    pub fat_g: f64,

    /// Whatever energy is left after protein and fat, never negative.
    pub carb_g: f64,
}

/// One row of the weekly shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryLine {
    /// Lower-cased item name.
    pub item: String,

    pub unit: Unit,

    /// Total across the week, rounded to a whole unit.
    pub quantity: f64,
}

impl GroceryLine {
    pub fn new(item: String, unit: Unit, quantity: f64) -> Self {
        Self {
            item,
            unit,
            quantity,
        }
    }
}
