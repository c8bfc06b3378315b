use crate::models::{Ingredient, MacroTotals, Meal, Owner, Recipe, SplitMacros};
use crate::planner::constants::nutrition_facts;

/// Macros for an ingredient's full quantity.
///
/// Unknown items and units that don't fit the item's table entry contribute zero.
pub fn ingredient_macros(ingredient: &Ingredient) -> MacroTotals {
    let Some(facts) = nutrition_facts(&ingredient.item) else {
        return MacroTotals::default();
    };

    match facts.basis_amount(ingredient.quantity, ingredient.unit) {
        Some(amount) => MacroTotals::new(
            facts.kcal * amount,
            facts.protein * amount,
            facts.carbs * amount,
            facts.fat * amount,
        ),
        None => MacroTotals::default(),
    }
}

/// Split an ingredient's macros across both plates.
pub fn split_ingredient(ingredient: &Ingredient, you_share: f64) -> SplitMacros {
    let m = ingredient_macros(ingredient);
    match ingredient.owner {
        Owner::Shared => SplitMacros {
            you: m * you_share,
            partner: m * (1.0 - you_share),
            total: m,
        },
        Owner::You => SplitMacros {
            you: m,
            partner: MacroTotals::default(),
            total: m,
        },
        Owner::Partner => SplitMacros {
            you: MacroTotals::default(),
            partner: m,
            total: m,
        },
    }
}

pub fn recipe_macros(recipe: &Recipe, you_share: f64) -> SplitMacros {
    recipe
        .ingredients
        .iter()
        .map(|ing| split_ingredient(ing, you_share))
        .sum()
}

/// Fold every meal of a day, in order.
pub fn day_macros(meals: &[Meal], you_share: f64) -> SplitMacros {
    meals
        .iter()
        .map(|meal| recipe_macros(&meal.recipe, you_share))
        .sum()
}
