use crate::models::{EnergyTargets, Goal, Profile, Sex};
use crate::planner::constants::*;

/// Lean body mass in kg, if a usable body-fat percentage is present.
pub fn lean_mass_kg(weight_kg: f64, body_fat_pct: Option<f64>) -> Option<f64> {
    body_fat_pct
        .filter(|bf| *bf > 0.0 && *bf < BODY_FAT_PCT_MAX)
        .map(|bf| weight_kg * (1.0 - bf / 100.0))
}

/// Mifflin-St Jeor BMR.
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let sex_term = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + sex_term
}

/// Katch-McArdle BMR from lean mass.
pub fn katch_mcardle(lean_mass_kg: f64) -> f64 {
    370.0 + 21.6 * lean_mass_kg
}

/// BMR, preferring Katch-McArdle when body fat is known.
pub fn bmr(profile: &Profile) -> f64 {
    match lean_mass_kg(profile.weight_kg, profile.body_fat_pct) {
        Some(lean) => katch_mcardle(lean),
        None => mifflin_st_jeor(
            profile.sex,
            profile.weight_kg,
            profile.height_cm,
            profile.age,
        ),
    }
}

pub fn tdee(profile: &Profile) -> f64 {
    bmr(profile) * activity_multiplier(profile.activity_level)
}

/// Calories to eat per day for a goal.
pub fn goal_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Cut => tdee * CUT_FACTOR,
        Goal::Bulk => tdee * BULK_FACTOR,
        Goal::Recomp => tdee,
    }
}

/// Protein and fat grams; carbs fill the remaining calories.
pub fn macro_targets(profile: &Profile, goal_kcal: f64) -> (f64, f64, f64) {
    let protein_per_kg = match profile.goal {
        Goal::Cut => PROTEIN_PER_KG_CUT,
        Goal::Recomp | Goal::Bulk => PROTEIN_PER_KG_DEFAULT,
    };
    let protein_g = protein_per_kg * profile.weight_kg;
    let fat_g = FAT_PER_KG * profile.weight_kg;

    let remaining = (goal_kcal - fat_g * KCAL_PER_G_FAT - protein_g * KCAL_PER_G_PROTEIN).max(0.0);
    let carb_g = remaining / KCAL_PER_G_CARB;

    (protein_g, fat_g, carb_g)
}

/// Everything the planner needs to know about one person's energy budget.
pub fn energy_targets(profile: &Profile) -> EnergyTargets {
    let bmr = bmr(profile);
    let tdee = bmr * activity_multiplier(profile.activity_level);
    let goal_kcal = goal_calories(tdee, profile.goal);
    let (protein_g, fat_g, carb_g) = macro_targets(profile, goal_kcal);

    EnergyTargets {
        bmr,
        tdee,
        goal_kcal,
        protein_g,
        fat_g,
        carb_g,
    }
}
