use serde::{Deserialize, Serialize};

use crate::models::Person;

/// Unit an ingredient quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Ml,
    Slice,
    Pcs,
    Can,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Ml => "ml",
            Unit::Slice => "slice",
            Unit::Pcs => "pcs",
            Unit::Can => "can",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who eats an ingredient.
///
/// Shared ingredients are split by the portion share; owned ones go wholly to one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Owner {
    Shared,
    You,
    Partner,
}

impl Owner {
    pub fn person(self) -> Option<Person> {
        match self {
            Owner::Shared => None,
            Owner::You => Some(Person::You),
            Owner::Partner => Some(Person::Partner),
        }
    }

    pub fn is_shared(self) -> bool {
        self == Owner::Shared
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Key into the nutrition table (matched case-insensitively).
    pub item: String,
    pub quantity: f64,
    pub unit: Unit,
    pub owner: Owner,
}

impl Ingredient {
    pub fn shared(item: &str, quantity: f64, unit: Unit) -> Self {
        Self::new(item, quantity, unit, Owner::Shared)
    }

    pub fn owned(item: &str, quantity: f64, unit: Unit, person: Person) -> Self {
        let owner = match person {
            Person::You => Owner::You,
            Person::Partner => Owner::Partner,
        };
        Self::new(item, quantity, unit, owner)
    }

    fn new(item: &str, quantity: f64, unit: Unit, owner: Owner) -> Self {
        Self {
            item: item.to_string(),
            quantity,
            unit,
            owner,
        }
    }

    /// Quantity that ends up on one person's plate.
    pub fn quantity_for(&self, person: Person, you_share: f64) -> f64 {
        match (self.owner.person(), person) {
            (None, Person::You) => self.quantity * you_share,
            (None, Person::Partner) => self.quantity * (1.0 - you_share),
            (Some(owner), p) if owner == p => self.quantity,
            _ => 0.0,
        }
    }
}

/// A named list of ingredients. Templates are never mutated; scaling yields a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: &str, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.to_string(),
            ingredients,
        }
    }

    /// Copy with every shared quantity multiplied by `factor`. Owned quantities are kept.
    pub fn scaled(&self, factor: f64) -> Recipe {
        let ingredients = self
            .ingredients
            .iter()
            .map(|ing| {
                let mut ing = ing.clone();
                if ing.owner.is_shared() {
                    ing.quantity *= factor;
                }
                ing
            })
            .collect();

        Recipe {
            name: self.name.clone(),
            ingredients,
        }
    }

    /// Merge two templates into one recipe ("A / B"), keeping ingredient order.
    pub fn combined(first: &Recipe, second: &Recipe) -> Recipe {
        let mut ingredients = first.ingredients.clone();
        ingredients.extend(second.ingredients.iter().cloned());
        Recipe {
            name: format!("{} / {}", first.name, second.name),
            ingredients,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealLabel {
    Breakfast,
    Snack1,
    Lunch,
    Snack2,
    Dinner,
}

impl MealLabel {
    /// Fixed order of meals within a day.
    pub const ORDER: [MealLabel; 5] = [
        MealLabel::Breakfast,
        MealLabel::Snack1,
        MealLabel::Lunch,
        MealLabel::Snack2,
        MealLabel::Dinner,
    ];

    /// Position within a day.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealLabel::Breakfast => "Breakfast",
            MealLabel::Snack1 => "Snack 1",
            MealLabel::Lunch => "Lunch",
            MealLabel::Snack2 => "Snack 2",
            MealLabel::Dinner => "Dinner",
        }
    }

    /// Lunch and dinner get portion-scaled toward the energy targets.
    pub fn is_scalable(self) -> bool {
        matches!(self, MealLabel::Lunch | MealLabel::Dinner)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub label: MealLabel,
    pub recipe: Recipe,
}

/// Five meals in [`MealLabel::ORDER`], plus the factor applied to lunch and dinner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub meals: [Meal; 5],
    pub scale: f64,
}

impl Day {
    pub fn meal(&self, label: MealLabel) -> &Meal {
        &self.meals[label.index()]
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.meals.iter().flat_map(|m| m.recipe.ingredients.iter())
    }
}

/// Seven days generated together from one seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub days: [Day; 7],
}

impl Week {
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.days.iter().flat_map(|d| d.ingredients())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> Recipe {
        Recipe::new(
            "Bowl",
            vec![
                Ingredient::shared("chicken breast", 200.0, Unit::G),
                Ingredient::owned("nuts", 15.0, Unit::G, Person::You),
            ],
        )
    }

    #[test]
    fn test_scaled_only_touches_shared() {
        let scaled = lunch().scaled(1.2);
        assert!((scaled.ingredients[0].quantity - 240.0).abs() < 1e-9);
        assert_eq!(scaled.ingredients[1].quantity, 15.0);
        // template untouched
        assert_eq!(lunch().ingredients[0].quantity, 200.0);
    }

    #[test]
    fn test_quantity_for() {
        let r = lunch();
        assert!((r.ingredients[0].quantity_for(Person::You, 0.4) - 80.0).abs() < 1e-9);
        assert!((r.ingredients[0].quantity_for(Person::Partner, 0.4) - 120.0).abs() < 1e-9);
        assert_eq!(r.ingredients[1].quantity_for(Person::You, 0.4), 15.0);
        assert_eq!(r.ingredients[1].quantity_for(Person::Partner, 0.4), 0.0);
    }

    #[test]
    fn test_combined_name_and_order() {
        let a = Recipe::new("A", vec![Ingredient::shared("oats", 1.0, Unit::G)]);
        let b = Recipe::new("B", vec![Ingredient::shared("milk", 2.0, Unit::Ml)]);
        let c = Recipe::combined(&a, &b);
        assert_eq!(c.name, "A / B");
        assert_eq!(c.ingredients[0].item, "oats");
        assert_eq!(c.ingredients[1].item, "milk");
    }
}
