use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A meal someone in the household ate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: u64,
    pub meal_name: String,
    pub calories: f64,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: u64,
    pub exercise: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub calories_burned: Option<f64>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A body measurement. Every metric is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStatEntry {
    pub id: u64,
    pub date: NaiveDate,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub body_fat: Option<f64>,
    #[serde(default)]
    pub muscle_mass: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Heartbeat written whenever the household's data changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncEvent {
    pub event: String,
    pub at: DateTime<Utc>,
}

/// Fields for a new meal; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub meal_name: String,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub exercise: String,
    pub duration_minutes: u32,
    pub calories_burned: Option<f64>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewBodyStat {
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
}
