use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

use crate::models::Person;

/// Energy and macronutrient totals. Adds component-wise; `Default` is the zero element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

impl MacroTotals {
    pub fn new(kcal: f64, protein_g: f64, carb_g: f64, fat_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            carb_g,
            fat_g,
        }
    }

    /// True when every component is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &MacroTotals, tolerance: f64) -> bool {
        (self.kcal - other.kcal).abs() <= tolerance
            && (self.protein_g - other.protein_g).abs() <= tolerance
            && (self.carb_g - other.carb_g).abs() <= tolerance
            && (self.fat_g - other.fat_g).abs() <= tolerance
    }
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: MacroTotals) -> MacroTotals {
        MacroTotals {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            carb_g: self.carb_g + rhs.carb_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: MacroTotals) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for MacroTotals {
    type Output = MacroTotals;

    fn mul(self, factor: f64) -> MacroTotals {
        MacroTotals {
            kcal: self.kcal * factor,
            protein_g: self.protein_g * factor,
            carb_g: self.carb_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = MacroTotals>>(iter: I) -> Self {
        iter.fold(MacroTotals::default(), Add::add)
    }
}

/// Macros split across the household: each person's plate plus the whole pot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitMacros {
    pub you: MacroTotals,
    pub partner: MacroTotals,
    pub total: MacroTotals,
}

impl SplitMacros {
    pub fn for_person(&self, person: Person) -> &MacroTotals {
        match person {
            Person::You => &self.you,
            Person::Partner => &self.partner,
        }
    }
}

impl Add for SplitMacros {
    type Output = SplitMacros;

    fn add(self, rhs: SplitMacros) -> SplitMacros {
        SplitMacros {
            you: self.you + rhs.you,
            partner: self.partner + rhs.partner,
            total: self.total + rhs.total,
        }
    }
}

impl Sum for SplitMacros {
    fn sum<I: Iterator<Item = SplitMacros>>(iter: I) -> Self {
        iter.fold(SplitMacros::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_identity() {
        let m = MacroTotals::new(100.0, 10.0, 5.0, 2.0);
        assert_eq!(m + MacroTotals::default(), m);
    }

    #[test]
    fn test_sum() {
        let parts = vec![
            MacroTotals::new(100.0, 10.0, 5.0, 2.0),
            MacroTotals::new(50.0, 1.0, 2.0, 3.0),
        ];
        let total: MacroTotals = parts.into_iter().sum();
        assert_eq!(total, MacroTotals::new(150.0, 11.0, 7.0, 5.0));
    }

    #[test]
    fn test_scale() {
        let m = MacroTotals::new(100.0, 10.0, 5.0, 2.0) * 0.5;
        assert!(m.approx_eq(&MacroTotals::new(50.0, 5.0, 2.5, 1.0), 1e-12));
    }
}
