use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Ingredient, Person, Recipe, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Energy formulas
// ─────────────────────────────────────────────────────────────────────────────

/// Body-fat percentages outside (0, 60) fall back to Mifflin-St Jeor.
pub const BODY_FAT_PCT_MAX: f64 = 60.0;

/// Goal calorie multipliers.
pub const CUT_FACTOR: f64 = 0.8;
pub const BULK_FACTOR: f64 = 1.1;

/// Protein per kg body weight.
pub const PROTEIN_PER_KG_CUT: f64 = 2.0;
pub const PROTEIN_PER_KG_DEFAULT: f64 = 1.8;

/// Fat per kg body weight.
pub const FAT_PER_KG: f64 = 0.8;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Portioning
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds for the first person's share of shared ingredients.
pub const SHARE_MIN: f64 = 0.30;
pub const SHARE_MAX: f64 = 0.70;

/// Share used when neither person has a positive energy target.
pub const SHARE_FALLBACK: f64 = 0.5;

/// Bounds for the lunch/dinner portion scale factor.
pub const SCALE_MIN: f64 = 0.85;
pub const SCALE_MAX: f64 = 1.25;

/// Floor for a day's baseline kcal when computing the scale ratio.
pub const SCALE_KCAL_FLOOR: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Workouts
// ─────────────────────────────────────────────────────────────────────────────

/// Rowing burn used to convert cheat calories into minutes.
pub const KCAL_PER_ROWING_MINUTE: f64 = 8.0;

/// Base steady-rowing minutes, scaled by each person's share of the energy total.
pub const BASE_ROWING_MINUTES: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────────────────────────

pub const DAYS_PER_WEEK: usize = 7;

pub const DEFAULT_SEED: u32 = 12345;

/// Upper bound (exclusive) for freshly drawn seeds.
pub const RANDOM_SEED_MAX: u32 = 1_000_000_000;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition table
// ─────────────────────────────────────────────────────────────────────────────

/// What one "unit" of a nutrition table entry refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Basis {
    /// Values per gram (or ml). `slice_g` converts slices into grams.
    PerGram { slice_g: Option<f64> },
    PerPiece,
    PerCan,
}

/// Energy and macros for one basis unit of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionFacts {
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub basis: Basis,
}

impl NutritionFacts {
    /// How many basis units `quantity` of `unit` amounts to, if the unit applies.
    pub fn basis_amount(&self, quantity: f64, unit: Unit) -> Option<f64> {
        match (self.basis, unit) {
            (Basis::PerGram { .. }, Unit::G | Unit::Ml) => Some(quantity),
            (Basis::PerGram { slice_g }, Unit::Slice) => slice_g.map(|g| g * quantity),
            (Basis::PerPiece, Unit::Pcs) => Some(quantity),
            (Basis::PerCan, Unit::Can) => Some(quantity),
            _ => None,
        }
    }
}

const fn per_gram(kcal: f64, protein: f64, carbs: f64, fat: f64) -> NutritionFacts {
    NutritionFacts {
        kcal,
        protein,
        carbs,
        fat,
        basis: Basis::PerGram { slice_g: None },
    }
}

const fn per_piece(kcal: f64, protein: f64, carbs: f64, fat: f64) -> NutritionFacts {
    NutritionFacts {
        kcal,
        protein,
        carbs,
        fat,
        basis: Basis::PerPiece,
    }
}

/// Bread is listed per gram; one slice weighs 30 g.
pub const BREAD_SLICE_G: f64 = 30.0;

/// Nutrition table keyed by lower-case item name.
pub static NUTRITION: LazyLock<HashMap<&'static str, NutritionFacts>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("oats", per_gram(3.8, 0.135, 0.62, 0.07));
    m.insert("7-granenontbijt", per_gram(3.6, 0.11, 0.72, 0.05));
    m.insert("muesli krokant 4 noten", per_gram(4.3, 0.09, 0.65, 0.17));
    m.insert("milk", per_gram(0.64, 0.033, 0.05, 0.036));
    m.insert("yoghurt", per_gram(0.6, 0.036, 0.047, 0.032));
    m.insert("cottage cheese", per_gram(0.85, 0.11, 0.03, 0.02));
    m.insert(
        "bread",
        NutritionFacts {
            kcal: 2.5 / 30.0,
            protein: 0.03,
            carbs: 0.12,
            fat: 0.015,
            basis: Basis::PerGram {
                slice_g: Some(BREAD_SLICE_G),
            },
        },
    );
    m.insert("young cheese", per_gram(4.0, 0.25, 0.02, 0.33));
    m.insert("butter", per_gram(7.2, 0.01, 0.0, 0.81));
    m.insert("peanut butter", per_gram(5.9, 0.25, 0.20, 0.50));
    m.insert("chicken breast", per_gram(1.1, 0.23, 0.0, 0.02));
    m.insert("chicken drumsticks", per_gram(1.9, 0.20, 0.0, 0.13));
    m.insert("salmon", per_gram(2.1, 0.20, 0.0, 0.13));
    m.insert("white fish (koolvis)", per_gram(0.8, 0.18, 0.0, 0.01));
    m.insert(
        "tuna (canned)",
        NutritionFacts {
            kcal: 150.0,
            protein: 30.0,
            carbs: 0.0,
            fat: 2.0,
            basis: Basis::PerCan,
        },
    );
    m.insert("egg", per_piece(78.0, 6.5, 0.6, 5.3));
    m.insert("white rice (raw)", per_gram(3.6, 0.07, 0.80, 0.01));
    m.insert("rice noodles (raw)", per_gram(3.6, 0.07, 0.80, 0.01));
    m.insert("wheat noodles (raw)", per_gram(3.5, 0.12, 0.72, 0.02));
    m.insert("wholewheat pasta (raw)", per_gram(3.5, 0.12, 0.71, 0.02));
    m.insert("potato (raw)", per_gram(0.77, 0.02, 0.17, 0.0));
    m.insert("sweet potato (raw)", per_gram(0.86, 0.015, 0.20, 0.0));
    m.insert("pumpkin", per_gram(0.26, 0.01, 0.06, 0.0));
    m.insert("broccoli", per_gram(0.35, 0.028, 0.07, 0.004));
    m.insert("spinach", per_gram(0.23, 0.029, 0.036, 0.004));
    // Capitalised key: lookups lower-case the item, so this never resolves.
    m.insert("Chinese cabbage", per_gram(0.16, 0.009, 0.03, 0.002));
    m.insert("courgette", per_gram(0.17, 0.012, 0.035, 0.003));
    m.insert("paprika", per_gram(0.31, 0.01, 0.06, 0.003));
    m.insert("tomato", per_gram(0.18, 0.009, 0.039, 0.002));
    m.insert("snijbonen", per_gram(0.31, 0.018, 0.05, 0.002));
    m.insert("sperziebonen", per_gram(0.31, 0.018, 0.05, 0.002));
    m.insert("carrots", per_gram(0.41, 0.009, 0.10, 0.002));
    m.insert("champignons", per_gram(0.22, 0.031, 0.03, 0.003));
    m.insert("cucumber", per_gram(0.16, 0.007, 0.037, 0.001));
    m.insert("apple", per_piece(95.0, 0.3, 25.0, 0.3));
    m.insert("pear", per_piece(100.0, 0.4, 27.0, 0.2));
    m.insert("orange", per_piece(62.0, 1.2, 15.4, 0.2));
    m.insert("grapes", per_gram(0.69, 0.006, 0.18, 0.0));
    m.insert("nuts", per_gram(6.0, 0.20, 0.20, 0.55));
    m
});

/// Look up an item (case-insensitive).
pub fn nutrition_facts(item: &str) -> Option<&'static NutritionFacts> {
    NUTRITION.get(item.to_lowercase().as_str())
}

// ─────────────────────────────────────────────────────────────────────────────
// Recipe pools
// ─────────────────────────────────────────────────────────────────────────────

fn you(item: &str, quantity: f64, unit: Unit) -> Ingredient {
    Ingredient::owned(item, quantity, unit, Person::You)
}

fn partner(item: &str, quantity: f64, unit: Unit) -> Ingredient {
    Ingredient::owned(item, quantity, unit, Person::Partner)
}

fn shared(item: &str, quantity: f64, unit: Unit) -> Ingredient {
    Ingredient::shared(item, quantity, unit)
}

pub static BREAKFAST_YOU: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe::new(
            "Oats + milk + egg",
            vec![
                you("oats", 55.0, Unit::G),
                you("milk", 220.0, Unit::Ml),
                you("egg", 1.0, Unit::Pcs),
            ],
        ),
        Recipe::new(
            "7-granenontbijt + milk",
            vec![
                you("7-granenontbijt", 60.0, Unit::G),
                you("milk", 220.0, Unit::Ml),
            ],
        ),
        Recipe::new(
            "Muesli krokant + milk",
            vec![
                you("muesli krokant 4 noten", 55.0, Unit::G),
                you("milk", 220.0, Unit::Ml),
            ],
        ),
        Recipe::new(
            "Oats + milk + peanut butter",
            vec![
                you("oats", 50.0, Unit::G),
                you("milk", 220.0, Unit::Ml),
                you("peanut butter", 20.0, Unit::G),
            ],
        ),
    ]
});

pub static BREAKFAST_PARTNER: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![Recipe::new(
        "Bread + butter + young cheese",
        vec![
            partner("bread", 4.0, Unit::Slice),
            partner("butter", 10.0, Unit::G),
            partner("young cheese", 40.0, Unit::G),
        ],
    )]
});

pub static SNACK_POOL: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe::new(
            "Apple / Pear",
            vec![you("apple", 1.0, Unit::Pcs), partner("pear", 1.0, Unit::Pcs)],
        ),
        Recipe::new(
            "Yoghurt + nuts",
            vec![
                you("yoghurt", 150.0, Unit::G),
                partner("yoghurt", 200.0, Unit::G),
                you("nuts", 15.0, Unit::G),
                partner("nuts", 15.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Cottage cheese + nuts",
            vec![
                you("cottage cheese", 150.0, Unit::G),
                partner("cottage cheese", 200.0, Unit::G),
                you("nuts", 15.0, Unit::G),
                partner("nuts", 15.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Orange / Grapes",
            vec![
                you("orange", 1.0, Unit::Pcs),
                partner("grapes", 150.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Apple + peanut butter (you)",
            vec![
                you("apple", 1.0, Unit::Pcs),
                you("peanut butter", 15.0, Unit::G),
            ],
        ),
    ]
});

pub static LUNCH_POOL: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe::new(
            "Chicken + rice + broccoli",
            vec![
                shared("chicken breast", 220.0, Unit::G),
                shared("white rice (raw)", 160.0, Unit::G),
                shared("broccoli", 220.0, Unit::G),
            ],
        ),
        Recipe::new(
            "White fish + rice noodles + Chinese cabbage",
            vec![
                shared("white fish (koolvis)", 260.0, Unit::G),
                shared("rice noodles (raw)", 150.0, Unit::G),
                shared("Chinese cabbage", 220.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Chicken + noodles stir fry",
            vec![
                shared("chicken breast", 260.0, Unit::G),
                shared("wheat noodles (raw)", 170.0, Unit::G),
                shared("champignons", 150.0, Unit::G),
                shared("paprika", 150.0, Unit::G),
                shared("spinach", 150.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Tuna salad bowl",
            vec![
                shared("tuna (canned)", 1.0, Unit::Can),
                shared("cucumber", 200.0, Unit::G),
                shared("tomato", 200.0, Unit::G),
                shared("feta", 60.0, Unit::G),
            ],
        ),
    ]
});

pub static DINNER_POOL: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe::new(
            "Salmon + potatoes + spinach",
            vec![
                shared("salmon", 320.0, Unit::G),
                shared("potato (raw)", 420.0, Unit::G),
                shared("spinach", 260.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Chicken drumsticks + sweet potato + veg",
            vec![
                shared("chicken drumsticks", 360.0, Unit::G),
                shared("sweet potato (raw)", 420.0, Unit::G),
                shared("courgette", 160.0, Unit::G),
                shared("paprika", 160.0, Unit::G),
            ],
        ),
        Recipe::new(
            "Chicken breast + pumpkin + snijbonen",
            vec![
                shared("chicken breast", 320.0, Unit::G),
                shared("pumpkin", 420.0, Unit::G),
                shared("snijbonen", 260.0, Unit::G),
            ],
        ),
        Recipe::new(
            "White fish + tomato/courgette + beans",
            vec![
                shared("white fish (koolvis)", 280.0, Unit::G),
                shared("courgette", 160.0, Unit::G),
                shared("tomato", 160.0, Unit::G),
                shared("sperziebonen", 220.0, Unit::G),
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(nutrition_facts("OATS").is_some());
        assert!(nutrition_facts("Chinese cabbage").is_none());
        assert!(nutrition_facts("chinese cabbage").is_none());
        assert!(nutrition_facts("feta").is_none());
    }

    #[test]
    fn test_basis_amount() {
        let bread = nutrition_facts("bread").unwrap();
        assert_eq!(bread.basis_amount(4.0, Unit::Slice), Some(120.0));
        assert_eq!(bread.basis_amount(50.0, Unit::G), Some(50.0));

        let egg = nutrition_facts("egg").unwrap();
        assert_eq!(egg.basis_amount(2.0, Unit::Pcs), Some(2.0));
        assert_eq!(egg.basis_amount(50.0, Unit::G), None);

        let oats = nutrition_facts("oats").unwrap();
        assert_eq!(oats.basis_amount(1.0, Unit::Slice), None);
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(BREAKFAST_YOU.len(), 4);
        assert_eq!(BREAKFAST_PARTNER.len(), 1);
        assert_eq!(SNACK_POOL.len(), 5);
        assert_eq!(LUNCH_POOL.len(), 4);
        assert_eq!(DINNER_POOL.len(), 4);
    }

    #[test]
    fn test_lunch_and_dinner_are_shared() {
        for recipe in LUNCH_POOL.iter().chain(DINNER_POOL.iter()) {
            assert!(recipe.ingredients.iter().all(|i| i.owner.is_shared()));
        }
    }
}
