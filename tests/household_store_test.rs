use chrono::{Duration, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use couples_planner_rs::models::{NewMeal, NewWorkout, Person};
use couples_planner_rs::state::{load_store, save_store, HouseholdStateManager};
use couples_planner_rs::PlannerError;

fn meal(name: &str, kcal: f64, date: NaiveDate) -> NewMeal {
    NewMeal {
        meal_name: name.to_string(),
        calories: kcal,
        protein: None,
        carbs: None,
        fat: None,
        date,
    }
}

#[test]
fn test_store_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("households.json");
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let date = now.date_naive();

    let mut manager = HouseholdStateManager::new(load_store(&path).unwrap());
    assert!(manager.is_empty());

    let code = manager.ensure_household("Fit-Us 2025!", now).unwrap();
    assert_eq!(code.as_str(), "fit-us2025");

    let mut partner = manager.record(&code).unwrap().partner.clone();
    partner.weight_kg = 82.0;
    manager.update_profile(&code, Person::Partner, partner).unwrap();
    manager.set_seed(&code, 99).unwrap();

    manager.insert_meal(&code, meal("Tuna salad bowl", 540.0, date), now).unwrap();
    manager
        .insert_workout(
            &code,
            NewWorkout {
                exercise: "Full-Body A".to_string(),
                duration_minutes: 45,
                calories_burned: None,
                date,
            },
            now + Duration::minutes(5),
        )
        .unwrap();
    save_store(&path, manager.store()).unwrap();

    let reloaded = HouseholdStateManager::new(load_store(&path).unwrap());
    let code = reloaded.resolve(None).unwrap();
    let record = reloaded.record(&code).unwrap();
    assert_eq!(record.partner.weight_kg, 82.0);
    assert_eq!(record.seed, 99);
    assert_eq!(reloaded.recent_meals(&code, 10).unwrap()[0].meal_name, "Tuna salad bowl");
    assert_eq!(reloaded.recent_workouts(&code, 10).unwrap().len(), 1);
    assert_eq!(
        reloaded.last_sync_at(&code).unwrap(),
        Some(now + Duration::minutes(5))
    );
}

#[test]
fn test_same_code_same_plan() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let mut manager = HouseholdStateManager::new(Default::default());
    let a = manager.ensure_household("our-home", now).unwrap();
    let b = manager.ensure_household("OUR-HOME", now).unwrap();
    assert_eq!(a, b);

    let first = manager.plan_session(&a).unwrap();
    let second = manager.plan_session(&b).unwrap();
    assert_eq!(first.week(), second.week());
}

#[test]
fn test_rejects_short_code() {
    let mut manager = HouseholdStateManager::new(Default::default());
    let err = manager.ensure_household("ab!", Utc::now()).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidHouseholdCode(_)));
    assert!(manager.is_empty());
}
