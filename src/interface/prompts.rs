use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Goal, NewBodyStat, NewMeal, NewWorkout, Profile, Sex};

/// Minimum Jaro-Winkler similarity for suggesting an earlier meal name.
pub const MEAL_NAME_SIMILARITY: f64 = 0.85;

/// Best earlier spelling of a meal name.
///
/// An exact case-insensitive match wins outright; otherwise the most similar
/// name above [`MEAL_NAME_SIMILARITY`] is returned.
pub fn suggest_meal_name<'a>(input: &str, known: &'a [String]) -> Option<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = known.iter().find(|k| k.to_lowercase() == needle) {
        return Some(exact.as_str());
    }

    known
        .iter()
        .map(|k| (k, jaro_winkler(&k.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > MEAL_NAME_SIMILARITY)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k.as_str())
}

fn parse_number(input: &str, field: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PlannerError::InvalidInput(format!("{}: '{}' is not a number", field, input)))
}

fn parse_optional_number(input: &str, field: &str) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(input, field).map(Some)
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid date '{}', use YYYY-MM-DD", input)))
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    parse_number(&input, prompt)
}

fn prompt_optional_number(prompt: &str, current: Option<f64>) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (blank to skip)", prompt))
        .with_initial_text(current.map(|v| v.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    parse_optional_number(&input, prompt)
}

fn prompt_date(today: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today.format("%Y-%m-%d").to_string())
        .interact_text()?;
    parse_date(&input)
}

pub fn prompt_household_code() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Household code (at least 4 characters)")
        .interact_text()?;
    Ok(input)
}

/// Walk through every profile field, starting from the current values.
pub fn prompt_profile(current: &Profile) -> Result<Profile> {
    let name: String = Input::new()
        .with_prompt("Name")
        .default(current.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let sexes = ["female", "male"];
    let sex_idx = Select::new()
        .with_prompt("Sex")
        .items(&sexes)
        .default(match current.sex {
            Sex::Female => 0,
            Sex::Male => 1,
        })
        .interact()?;
    let sex = if sex_idx == 0 { Sex::Female } else { Sex::Male };

    let age = prompt_number("Age (years)", f64::from(current.age))?;
    if age < 0.0 {
        return Err(PlannerError::InvalidInput("Age must be >= 0".to_string()));
    }
    let height_cm = prompt_number("Height (cm)", current.height_cm)?;
    let weight_kg = prompt_number("Weight (kg)", current.weight_kg)?;
    let body_fat_pct = prompt_optional_number("Body fat %", current.body_fat_pct)?;

    let activity_labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&activity_labels)
        .default(
            ActivityLevel::ALL
                .iter()
                .position(|a| *a == current.activity_level)
                .unwrap_or(0),
        )
        .interact()?;

    let goal_labels: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();
    let goal_idx = Select::new()
        .with_prompt("Goal")
        .items(&goal_labels)
        .default(Goal::ALL.iter().position(|g| *g == current.goal).unwrap_or(0))
        .interact()?;

    Ok(Profile {
        name: name.trim().to_string(),
        sex,
        age: age.round() as u32,
        height_cm,
        weight_kg,
        body_fat_pct,
        activity_level: ActivityLevel::ALL[activity_idx],
        goal: Goal::ALL[goal_idx],
    })
}

/// Offer an earlier spelling of the meal name, if one is close enough.
pub fn confirm_meal_name(input: &str, known: &[String]) -> Result<String> {
    let input = input.trim();
    match suggest_meal_name(input, known) {
        Some(suggestion) if suggestion == input => Ok(input.to_string()),
        Some(suggestion) => {
            let accept = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", suggestion))
                .default(true)
                .interact()?;
            Ok(if accept { suggestion } else { input }.to_string())
        }
        None => Ok(input.to_string()),
    }
}

pub fn prompt_meal(known: &[String], today: NaiveDate) -> Result<NewMeal> {
    let raw: String = Input::new().with_prompt("Meal name").interact_text()?;
    let meal_name = confirm_meal_name(&raw, known)?;

    let calories = prompt_number("Calories", 0.0)?;
    let protein = prompt_optional_number("Protein (g)", None)?;
    let carbs = prompt_optional_number("Carbs (g)", None)?;
    let fat = prompt_optional_number("Fat (g)", None)?;
    let date = prompt_date(today)?;

    Ok(NewMeal {
        meal_name,
        calories,
        protein,
        carbs,
        fat,
        date,
    })
}

pub fn prompt_workout(today: NaiveDate) -> Result<NewWorkout> {
    let exercise: String = Input::new().with_prompt("Exercise").interact_text()?;
    let duration_minutes: u32 = Input::new()
        .with_prompt("Duration (minutes)")
        .default(30)
        .interact_text()?;
    let calories_burned = prompt_optional_number("Calories burned", None)?;
    let date = prompt_date(today)?;

    Ok(NewWorkout {
        exercise,
        duration_minutes,
        calories_burned,
        date,
    })
}

pub fn prompt_body_stat(today: NaiveDate) -> Result<NewBodyStat> {
    let date = prompt_date(today)?;
    let weight_kg = prompt_optional_number("Weight (kg)", None)?;
    let body_fat = prompt_optional_number("Body fat %", None)?;
    let muscle_mass = prompt_optional_number("Muscle mass (kg)", None)?;

    Ok(NewBodyStat {
        date,
        weight_kg,
        body_fat,
        muscle_mass,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec![
            "Chicken Salad".to_string(),
            "Tuna salad bowl".to_string(),
            "Oats + milk".to_string(),
        ]
    }

    #[test]
    fn test_suggest_exact_match_keeps_stored_spelling() {
        let names = known();
        assert_eq!(suggest_meal_name("chicken salad", &names), Some("Chicken Salad"));
    }

    #[test]
    fn test_suggest_close_typo() {
        let names = known();
        assert_eq!(suggest_meal_name("Tuna salad bowel", &names), Some("Tuna salad bowl"));
    }

    #[test]
    fn test_suggest_nothing_for_unrelated_name() {
        let names = known();
        assert_eq!(suggest_meal_name("Pizza", &names), None);
        assert_eq!(suggest_meal_name("   ", &names), None);
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_optional_number("", "x").unwrap(), None);
        assert_eq!(parse_optional_number(" 12.5 ", "x").unwrap(), Some(12.5));
        assert!(parse_number("abc", "x").is_err());
        assert!(parse_number("NaN", "x").is_err());
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("01/03/2025").is_err());
    }
}
