use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::models::{
    BodyStatEntry, MealEntry, NewBodyStat, NewMeal, NewWorkout, Person, Profile, SyncEvent,
    WorkoutEntry,
};
use crate::planner::constants::DEFAULT_SEED;
use crate::planner::PlanSession;
use crate::state::household::HouseholdCode;

/// Default number of rows returned by history selects.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Longest single workout accepted, in minutes.
pub const MAX_WORKOUT_MINUTES: u32 = 24 * 60;

/// Sync events kept per household; older ones are dropped.
pub const SYNC_EVENT_LIMIT: usize = 50;

/// Everything stored for one household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub code: HouseholdCode,
    pub created_at: DateTime<Utc>,
    pub you: Profile,
    pub partner: Profile,
    #[serde(default = "default_seed")]
    pub seed: u32,
    #[serde(default)]
    pub share_override: Option<f64>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default)]
    pub body_stats: Vec<BodyStatEntry>,
    #[serde(default)]
    pub sync_events: Vec<SyncEvent>,
    #[serde(default)]
    next_id: u64,
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

impl HouseholdRecord {
    fn new(code: HouseholdCode, now: DateTime<Utc>) -> Self {
        Self {
            code,
            created_at: now,
            you: Profile::default_you(),
            partner: Profile::default_partner(),
            seed: DEFAULT_SEED,
            share_override: None,
            meals: Vec::new(),
            workouts: Vec::new(),
            body_stats: Vec::new(),
            sync_events: Vec::new(),
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    pub fn profile(&self, person: Person) -> &Profile {
        match person {
            Person::You => &self.you,
            Person::Partner => &self.partner,
        }
    }
}

/// On-disk shape of the store file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdStore {
    /// Last household joined; used when no code is given.
    #[serde(default)]
    pub current: Option<HouseholdCode>,
    #[serde(default)]
    pub households: BTreeMap<HouseholdCode, HouseholdRecord>,
}

/// Logged intake and burn for one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailySummary {
    pub meals: usize,
    pub kcal_eaten: f64,
    pub workouts: usize,
    pub workout_minutes: u32,
    pub kcal_burned: f64,
}

/// Manages household records, their profiles, and their logs.
pub struct HouseholdStateManager {
    store: HouseholdStore,
}

impl HouseholdStateManager {
    pub fn new(store: HouseholdStore) -> Self {
        Self { store }
    }

    /// Create the household if it doesn't exist and make it current.
    ///
    /// The same raw code always resolves to the same household.
    pub fn ensure_household(&mut self, raw: &str, now: DateTime<Utc>) -> Result<HouseholdCode> {
        let code = HouseholdCode::parse(raw)?;
        if !self.store.households.contains_key(&code) {
            info!(household = %code, "Creating household");
            self.store
                .households
                .insert(code.clone(), HouseholdRecord::new(code.clone(), now));
        }
        self.store.current = Some(code.clone());
        Ok(code)
    }

    /// Resolve an explicit code, or fall back to the current household.
    pub fn resolve(&self, raw: Option<&str>) -> Result<HouseholdCode> {
        let code = match raw {
            Some(raw) => HouseholdCode::parse(raw)?,
            None => self.store.current.clone().ok_or(PlannerError::NoHousehold)?,
        };
        if !self.store.households.contains_key(&code) {
            return Err(PlannerError::HouseholdNotFound(code.to_string()));
        }
        Ok(code)
    }

    pub fn current(&self) -> Option<&HouseholdCode> {
        self.store.current.as_ref()
    }

    pub fn record(&self, code: &HouseholdCode) -> Result<&HouseholdRecord> {
        self.store
            .households
            .get(code)
            .ok_or_else(|| PlannerError::HouseholdNotFound(code.to_string()))
    }

    fn record_mut(&mut self, code: &HouseholdCode) -> Result<&mut HouseholdRecord> {
        self.store
            .households
            .get_mut(code)
            .ok_or_else(|| PlannerError::HouseholdNotFound(code.to_string()))
    }

    pub fn update_profile(
        &mut self,
        code: &HouseholdCode,
        person: Person,
        profile: Profile,
    ) -> Result<()> {
        let record = self.record_mut(code)?;
        match person {
            Person::You => record.you = profile,
            Person::Partner => record.partner = profile,
        }
        debug!(household = %code, ?person, "Profile updated");
        Ok(())
    }

    pub fn set_seed(&mut self, code: &HouseholdCode, seed: u32) -> Result<()> {
        self.record_mut(code)?.seed = seed;
        Ok(())
    }

    /// `None` returns the household to the derived share.
    pub fn set_share_override(&mut self, code: &HouseholdCode, share: Option<f64>) -> Result<()> {
        self.record_mut(code)?.share_override = share;
        Ok(())
    }

    /// Planner session built from the stored profiles, seed, and share.
    pub fn plan_session(&self, code: &HouseholdCode) -> Result<PlanSession> {
        let record = self.record(code)?;
        Ok(PlanSession::new(
            record.you.clone(),
            record.partner.clone(),
            record.seed,
            record.share_override,
        ))
    }

    pub fn insert_meal(
        &mut self,
        code: &HouseholdCode,
        meal: NewMeal,
        now: DateTime<Utc>,
    ) -> Result<MealEntry> {
        let name = meal.meal_name.trim();
        if name.is_empty() {
            return Err(PlannerError::InvalidInput("Meal name is required".to_string()));
        }
        require_non_negative("Calories", Some(meal.calories))?;
        require_non_negative("Protein", meal.protein)?;
        require_non_negative("Carbs", meal.carbs)?;
        require_non_negative("Fat", meal.fat)?;

        let record = self.record_mut(code)?;
        let entry = MealEntry {
            id: record.take_id(),
            meal_name: name.to_string(),
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fat: meal.fat,
            date: meal.date,
            created_at: now,
        };
        record.meals.push(entry.clone());
        info!(household = %code, id = entry.id, kcal = entry.calories, "Meal logged");
        self.log_sync(code, "meal", now)?;
        Ok(entry)
    }

    pub fn insert_workout(
        &mut self,
        code: &HouseholdCode,
        workout: NewWorkout,
        now: DateTime<Utc>,
    ) -> Result<WorkoutEntry> {
        let exercise = workout.exercise.trim();
        if exercise.is_empty() {
            return Err(PlannerError::InvalidInput("Exercise is required".to_string()));
        }
        require_non_negative("Calories burned", workout.calories_burned)?;
        if workout.duration_minutes > MAX_WORKOUT_MINUTES {
            return Err(PlannerError::InvalidInput(format!(
                "Duration must be at most {} minutes",
                MAX_WORKOUT_MINUTES
            )));
        }

        let record = self.record_mut(code)?;
        let entry = WorkoutEntry {
            id: record.take_id(),
            exercise: exercise.to_string(),
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            date: workout.date,
            created_at: now,
        };
        record.workouts.push(entry.clone());
        info!(household = %code, id = entry.id, minutes = entry.duration_minutes, "Workout logged");
        self.log_sync(code, "workout", now)?;
        Ok(entry)
    }

    pub fn insert_body_stat(
        &mut self,
        code: &HouseholdCode,
        stat: NewBodyStat,
        now: DateTime<Utc>,
    ) -> Result<BodyStatEntry> {
        require_non_negative("Weight", stat.weight_kg)?;
        require_non_negative("Body fat", stat.body_fat)?;
        require_non_negative("Muscle mass", stat.muscle_mass)?;
        if stat.body_fat.is_some_and(|bf| bf > 100.0) {
            return Err(PlannerError::InvalidInput(
                "Body fat must be a percentage (0-100)".to_string(),
            ));
        }

        let record = self.record_mut(code)?;
        let entry = BodyStatEntry {
            id: record.take_id(),
            date: stat.date,
            weight_kg: stat.weight_kg,
            body_fat: stat.body_fat,
            muscle_mass: stat.muscle_mass,
            created_at: now,
        };
        record.body_stats.push(entry.clone());
        info!(household = %code, id = entry.id, "Body stats logged");
        self.log_sync(code, "stats", now)?;
        Ok(entry)
    }

    /// Newest meals first.
    pub fn recent_meals(&self, code: &HouseholdCode, limit: usize) -> Result<Vec<&MealEntry>> {
        let mut meals: Vec<&MealEntry> = self.record(code)?.meals.iter().collect();
        meals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        meals.truncate(limit);
        Ok(meals)
    }

    /// Newest workouts first.
    pub fn recent_workouts(
        &self,
        code: &HouseholdCode,
        limit: usize,
    ) -> Result<Vec<&WorkoutEntry>> {
        let mut workouts: Vec<&WorkoutEntry> = self.record(code)?.workouts.iter().collect();
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        workouts.truncate(limit);
        Ok(workouts)
    }

    /// Body stats by measurement date, newest first.
    pub fn body_stats(&self, code: &HouseholdCode, limit: usize) -> Result<Vec<&BodyStatEntry>> {
        let mut stats: Vec<&BodyStatEntry> = self.record(code)?.body_stats.iter().collect();
        stats.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        stats.truncate(limit);
        Ok(stats)
    }

    /// Distinct meal names logged before, most recent spelling first.
    pub fn known_meal_names(&self, code: &HouseholdCode) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for meal in self.recent_meals(code, usize::MAX)? {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&meal.meal_name)) {
                names.push(meal.meal_name.clone());
            }
        }
        Ok(names)
    }

    pub fn daily_summary(&self, code: &HouseholdCode, date: NaiveDate) -> Result<DailySummary> {
        let record = self.record(code)?;
        let mut summary = DailySummary::default();

        for meal in record.meals.iter().filter(|m| m.date == date) {
            summary.meals += 1;
            summary.kcal_eaten += meal.calories;
        }
        for workout in record.workouts.iter().filter(|w| w.date == date) {
            summary.workouts += 1;
            summary.workout_minutes = summary
                .workout_minutes
                .saturating_add(workout.duration_minutes);
            summary.kcal_burned += workout.calories_burned.unwrap_or(0.0);
        }

        Ok(summary)
    }

    pub fn log_sync(&mut self, code: &HouseholdCode, event: &str, now: DateTime<Utc>) -> Result<()> {
        let events = &mut self.record_mut(code)?.sync_events;
        events.push(SyncEvent {
            event: event.to_string(),
            at: now,
        });
        if events.len() > SYNC_EVENT_LIMIT {
            let excess = events.len() - SYNC_EVENT_LIMIT;
            events.drain(..excess);
        }
        Ok(())
    }

    pub fn last_sync_at(&self, code: &HouseholdCode) -> Result<Option<DateTime<Utc>>> {
        Ok(self.record(code)?.sync_events.iter().map(|e| e.at).max())
    }

    pub fn store(&self) -> &HouseholdStore {
        &self.store
    }

    pub fn into_store(self) -> HouseholdStore {
        self.store
    }

    pub fn len(&self) -> usize {
        self.store.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.households.is_empty()
    }
}

fn require_non_negative(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(PlannerError::InvalidInput(format!(
            "{} must be a non-negative number",
            field
        ))),
        _ => Ok(()),
    }
}
