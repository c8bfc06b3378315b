use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Day, GroceryLine, Meal, MealLabel, Recipe, Week};
use crate::planner::constants::*;
use crate::planner::grocery::aggregate_groceries;
use crate::planner::macros::day_macros;
use crate::planner::rng::Mulberry32;
use crate::planner::workouts::{WorkoutKind, WEEKLY_ROTATION};

/// Everything a week depends on. Same inputs, same week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    pub seed: u32,
    /// First person's share of shared ingredients, already clamped.
    pub you_share: f64,
    pub you_target_kcal: f64,
    pub partner_target_kcal: f64,
}

/// Draw a template from a pool. An empty pool yields an empty recipe.
fn draw(rng: &mut Mulberry32, pool: &[Recipe]) -> Recipe {
    rng.choose(pool)
        .cloned()
        .unwrap_or_else(|| Recipe::new("", Vec::new()))
}

/// Pick one unscaled day of meals.
///
/// Draw order is fixed: breakfast (you), breakfast (partner), snack 1, lunch,
/// snack 2, dinner.
pub fn build_day(rng: &mut Mulberry32) -> [Meal; 5] {
    let breakfast_you = draw(rng, &BREAKFAST_YOU);
    let breakfast_partner = draw(rng, &BREAKFAST_PARTNER);
    let snack1 = draw(rng, &SNACK_POOL);
    let lunch = draw(rng, &LUNCH_POOL);
    let snack2 = draw(rng, &SNACK_POOL);
    let dinner = draw(rng, &DINNER_POOL);

    [
        Meal {
            label: MealLabel::Breakfast,
            recipe: Recipe::combined(&breakfast_you, &breakfast_partner),
        },
        Meal {
            label: MealLabel::Snack1,
            recipe: snack1,
        },
        Meal {
            label: MealLabel::Lunch,
            recipe: lunch,
        },
        Meal {
            label: MealLabel::Snack2,
            recipe: snack2,
        },
        Meal {
            label: MealLabel::Dinner,
            recipe: dinner,
        },
    ]
}

/// Uniform lunch/dinner factor moving both people toward their targets.
///
/// Mean of target/baseline kcal for the two people, clamped to
/// [`SCALE_MIN`, `SCALE_MAX`].
pub fn scale_factor(meals: &[Meal], you_share: f64, you_target: f64, partner_target: f64) -> f64 {
    let base = day_macros(meals, you_share);
    let you_ratio = you_target / base.you.kcal.max(SCALE_KCAL_FLOOR);
    let partner_ratio = partner_target / base.partner.kcal.max(SCALE_KCAL_FLOOR);

    let factor = (you_ratio + partner_ratio) / 2.0;
    if factor.is_nan() {
        return 1.0;
    }
    factor.clamp(SCALE_MIN, SCALE_MAX)
}

/// Scale lunch and dinner of a freshly built day. Other meals are left alone.
pub fn auto_scale_day(meals: [Meal; 5], you_share: f64, you_target: f64, partner_target: f64) -> Day {
    let scale = scale_factor(&meals, you_share, you_target, partner_target);
    let meals = meals.map(|meal| {
        if meal.label.is_scalable() {
            Meal {
                label: meal.label,
                recipe: meal.recipe.scaled(scale),
            }
        } else {
            meal
        }
    });

    Day { meals, scale }
}

/// Generate a whole week from one random stream.
pub fn generate_week(inputs: &PlanInputs) -> Week {
    info!(
        seed = inputs.seed,
        share = inputs.you_share,
        you_target = inputs.you_target_kcal,
        partner_target = inputs.partner_target_kcal,
        "Generating week"
    );

    let mut rng = Mulberry32::new(inputs.seed);
    let days: [Day; DAYS_PER_WEEK] = std::array::from_fn(|i| {
        let meals = build_day(&mut rng);
        let day = auto_scale_day(
            meals,
            inputs.you_share,
            inputs.you_target_kcal,
            inputs.partner_target_kcal,
        );
        debug!(day = i + 1, scale = day.scale, "Day built");
        day
    });

    Week { days }
}

/// Meals, workout rotation and grocery list for one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub week: Week,
    pub workouts: [WorkoutKind; DAYS_PER_WEEK],
    pub groceries: Vec<GroceryLine>,
}

pub fn generate_weekly_plan(inputs: &PlanInputs) -> WeeklyPlan {
    let week = generate_week(inputs);
    let groceries = aggregate_groceries(&week);
    WeeklyPlan {
        week,
        workouts: WEEKLY_ROTATION,
        groceries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    fn inputs(seed: u32) -> PlanInputs {
        PlanInputs {
            seed,
            you_share: 0.45,
            you_target_kcal: 1800.0,
            partner_target_kcal: 2400.0,
        }
    }

    #[test]
    fn test_day_shape() {
        let mut rng = Mulberry32::new(1);
        let meals = build_day(&mut rng);
        let labels: Vec<MealLabel> = meals.iter().map(|m| m.label).collect();
        assert_eq!(labels, MealLabel::ORDER.to_vec());
    }

    #[test]
    fn test_build_day_draws_six_times() {
        let mut a = Mulberry32::new(99);
        build_day(&mut a);

        let mut b = Mulberry32::new(99);
        for _ in 0..6 {
            b.next_unit();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_scale_clamped_high_when_targets_huge() {
        let mut rng = Mulberry32::new(5);
        let meals = build_day(&mut rng);
        assert_eq!(scale_factor(&meals, 0.5, 1e9, 1e9), SCALE_MAX);
        assert_eq!(scale_factor(&meals, 0.5, 0.0, 0.0), SCALE_MIN);
    }

    #[test]
    fn test_only_lunch_and_dinner_scaled() {
        let mut rng = Mulberry32::new(5);
        let meals = build_day(&mut rng);
        let original = meals.clone();
        let day = auto_scale_day(meals, 0.5, 1e9, 1e9);

        for (scaled, base) in day.meals.iter().zip(original.iter()) {
            for (s, b) in scaled.recipe.ingredients.iter().zip(base.recipe.ingredients.iter()) {
                if scaled.label.is_scalable() && s.owner == Owner::Shared {
                    assert!((s.quantity - b.quantity * SCALE_MAX).abs() < 1e-9);
                } else {
                    assert_eq!(s.quantity, b.quantity);
                }
            }
        }
    }

    #[test]
    fn test_week_is_deterministic() {
        let a = generate_week(&inputs(12345));
        let b = generate_week(&inputs(12345));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_scale_bounds_for_many_seeds() {
        for seed in 0..200 {
            let week = generate_week(&inputs(seed));
            for day in &week.days {
                assert!((SCALE_MIN..=SCALE_MAX).contains(&day.scale));
            }
        }
    }

    #[test]
    fn test_weekly_plan_bundles_rotation_and_groceries() {
        let plan = generate_weekly_plan(&inputs(12345));
        assert_eq!(plan.week, generate_week(&inputs(12345)));
        assert_eq!(plan.workouts[1], WorkoutKind::Hiit);
        assert_eq!(plan.groceries, aggregate_groceries(&plan.week));
    }
}
