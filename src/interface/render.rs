use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    BodyStatEntry, Day, EnergyTargets, GroceryLine, MacroTotals, MealEntry, Person, WorkoutEntry,
};
use crate::planner::workouts::{
    cardio_blocks, strength_exercises, workout_for_day, REST_WALK_MINUTES, STEADY_ROWING_MINUTES,
};
use crate::planner::{CheatMakeup, PlanSession};
use crate::state::{DailySummary, HouseholdCode};

/// Human label for how long ago the household last synced.
pub fn time_ago(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last) = last else {
        return "never".to_string();
    };

    let millis = (now - last).num_milliseconds() as f64;
    let secs = (millis / 1000.0).round().max(1.0);
    if secs < 60.0 {
        return format!("{}s ago", secs);
    }
    let mins = (secs / 60.0).round();
    if mins < 60.0 {
        return format!("{}m ago", mins);
    }
    format!("{}h ago", (mins / 60.0).round())
}

fn person_name(session: &PlanSession, person: Person) -> &str {
    let fallback = match person {
        Person::You => "You",
        Person::Partner => "Partner",
    };
    session.profile(person).display_name(fallback)
}

fn display_targets(name: &str, targets: &EnergyTargets) {
    println!(
        "  {:<10} BMR {:>5.0} | TDEE {:>5.0} | Goal {:>5.0} kcal | P {:>3.0}g F {:>3.0}g C {:>3.0}g",
        name,
        targets.bmr,
        targets.tdee,
        targets.goal_kcal,
        targets.protein_g,
        targets.fat_g,
        targets.carb_g
    );
}

/// Profiles and derived energy targets for both people.
pub fn display_profile_summary(session: &PlanSession) {
    println!();
    println!("=== Profiles ===");
    println!();

    for person in [Person::You, Person::Partner] {
        let profile = session.profile(person);
        let body_fat = profile
            .body_fat_pct
            .map(|bf| format!(", {:.0}% body fat", bf))
            .unwrap_or_default();
        println!(
            "  {}: {:?}, {} y, {:.0} cm, {:.1} kg{}, {}, goal {}",
            person_name(session, person),
            profile.sex,
            profile.age,
            profile.height_cm,
            profile.weight_kg,
            body_fat,
            profile.activity_level.label(),
            profile.goal.label()
        );
    }

    println!();
    println!("--- Targets ---");
    for person in [Person::You, Person::Partner] {
        display_targets(person_name(session, person), session.targets(person));
    }

    let share_kind = if session.is_manual_share() { "manual" } else { "auto" };
    println!();
    println!(
        "Shared portion split: {:.0}% / {:.0}% ({})",
        session.share() * 100.0,
        (1.0 - session.share()) * 100.0,
        share_kind
    );
    if session.is_stale() {
        println!("Profiles changed since the last plan; recompute to refresh.");
    }
    println!();
}

fn display_totals_line(label: &str, totals: &MacroTotals, target_kcal: Option<f64>) {
    let target = target_kcal
        .map(|t| format!(" / {:.0} target", t))
        .unwrap_or_default();
    println!(
        "  {:<10} {:>5.0} kcal{} | P {:>3.0}g C {:>3.0}g F {:>3.0}g",
        label, totals.kcal, target, totals.protein_g, totals.carb_g, totals.fat_g
    );
}

/// One day of the plan: meals, per-person quantities, and day totals.
pub fn display_day(session: &PlanSession, index: usize) {
    let Some(day) = session.week().days.get(index) else {
        println!("No day {} in this plan.", index + 1);
        return;
    };
    let you = person_name(session, Person::You);
    let partner = person_name(session, Person::Partner);

    println!();
    println!(
        "=== Day {} ({}) === scale x{:.2}",
        index + 1,
        workout_for_day(index).title(),
        day.scale
    );

    for meal in &day.meals {
        println!();
        println!("{}: {}", meal.label.as_str(), meal.recipe.name);

        if meal.recipe.ingredients.is_empty() {
            println!("  (nothing drawn)");
            continue;
        }

        let width = meal
            .recipe
            .ingredients
            .iter()
            .map(|i| i.item.len())
            .max()
            .unwrap_or(10);

        println!(
            "  {:<width$}  {:>7}  {:>7}  {:>7}  unit",
            "item",
            "total",
            truncate(you, 7),
            truncate(partner, 7),
            width = width
        );
        for ing in &meal.recipe.ingredients {
            println!(
                "  {:<width$}  {:>7.0}  {:>7.0}  {:>7.0}  {}",
                ing.item,
                ing.quantity,
                ing.quantity_for(Person::You, session.share()),
                ing.quantity_for(Person::Partner, session.share()),
                ing.unit,
                width = width
            );
        }
    }

    if let Some(macros) = session.day_macros(index) {
        println!();
        println!("--- Day totals ---");
        display_totals_line(
            you,
            &macros.you,
            Some(session.targets(Person::You).goal_kcal),
        );
        display_totals_line(
            partner,
            &macros.partner,
            Some(session.targets(Person::Partner).goal_kcal),
        );
        display_totals_line("Together", &macros.total, None);
    }
    println!();
}

fn truncate(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}

/// Compact overview: meal names and kcal per day.
pub fn display_week(session: &PlanSession) {
    println!();
    println!(
        "=== Week plan (seed {}, share {:.2}) ===",
        session.seed(),
        session.share()
    );

    for (index, day) in session.week().days.iter().enumerate() {
        display_day_overview(session, index, day);
    }
    println!();
}

fn display_day_overview(session: &PlanSession, index: usize, day: &Day) {
    println!();
    println!(
        "Day {} [{}] x{:.2}",
        index + 1,
        workout_for_day(index).code(),
        day.scale
    );
    for meal in &day.meals {
        println!("  {:<10} {}", meal.label.as_str(), meal.recipe.name);
    }
    if let Some(macros) = session.day_macros(index) {
        println!(
            "  kcal: {} {:.0}/{:.0}, {} {:.0}/{:.0}",
            person_name(session, Person::You),
            macros.you.kcal,
            session.targets(Person::You).goal_kcal,
            person_name(session, Person::Partner),
            macros.partner.kcal,
            session.targets(Person::Partner).goal_kcal
        );
    }
}

/// Workout for a zero-based day index.
pub fn display_workout(session: &PlanSession, index: usize) {
    let kind = workout_for_day(index);
    println!();
    println!("=== Day {}: {} ===", index + 1, kind.title());

    let lifts = strength_exercises(kind);
    if !lifts.is_empty() {
        let width = lifts.iter().map(|l| l.exercise.len()).max().unwrap_or(10);
        println!("  {:<width$}  sets  reps    rest", "exercise", width = width);
        for lift in lifts {
            println!(
                "  {:<width$}  {:>4}  {:<6}  {}",
                lift.exercise,
                lift.sets,
                lift.reps,
                lift.rest,
                width = width
            );
        }
    }

    let blocks = cardio_blocks(kind);
    if !blocks.is_empty() {
        for block in blocks {
            println!("  {} ({} min): {}", block.kind, block.minutes, block.detail);
        }
        let (you, partner) = session.rowing_minutes();
        println!(
            "  Or steady rowing {} min. Energy-weighted: {} {} min, {} {} min",
            STEADY_ROWING_MINUTES,
            person_name(session, Person::You),
            you,
            person_name(session, Person::Partner),
            partner
        );
    }

    if lifts.is_empty() && blocks.is_empty() {
        println!("  Rest / {} min easy walk", REST_WALK_MINUTES);
    }
    println!();
}

/// Aggregated grocery list for the week.
pub fn display_groceries(lines: &[GroceryLine]) {
    if lines.is_empty() {
        println!("Grocery list is empty.");
        return;
    }

    println!();
    println!("=== Groceries ({} items) ===", lines.len());
    println!();

    let width = lines.iter().map(|l| l.item.len()).max().unwrap_or(10);
    for line in lines {
        println!(
            "  {:<width$}  {:>6}  {}",
            line.item,
            line.quantity,
            line.unit,
            width = width
        );
    }
    println!();
}

pub fn display_cheat(session: &PlanSession, extra_kcal: f64, makeup: &CheatMakeup) {
    println!();
    println!("Extra {:.0} kcal split by share {:.2}:", extra_kcal, session.share());
    println!(
        "  {}: {} min rowing",
        person_name(session, Person::You),
        makeup.you_minutes
    );
    println!(
        "  {}: {} min rowing",
        person_name(session, Person::Partner),
        makeup.partner_minutes
    );
    println!();
}

pub fn display_meal_history(meals: &[&MealEntry]) {
    if meals.is_empty() {
        println!("No meals logged yet.");
        return;
    }

    println!();
    println!("=== Meals ({}) ===", meals.len());
    for meal in meals {
        let macros = match (meal.protein, meal.carbs, meal.fat) {
            (None, None, None) => String::new(),
            (p, c, f) => format!(
                " | P {} C {} F {}",
                optional_grams(p),
                optional_grams(c),
                optional_grams(f)
            ),
        };
        println!(
            "  {}  {:<30} {:>5.0} kcal{}",
            meal.date, meal.meal_name, meal.calories, macros
        );
    }
    println!();
}

fn optional_grams(value: Option<f64>) -> String {
    value.map(|v| format!("{:.0}g", v)).unwrap_or_else(|| "-".to_string())
}

pub fn display_workout_history(workouts: &[&WorkoutEntry]) {
    if workouts.is_empty() {
        println!("No workouts logged yet.");
        return;
    }

    println!();
    println!("=== Workouts ({}) ===", workouts.len());
    for workout in workouts {
        let burned = workout
            .calories_burned
            .map(|k| format!(", {:.0} kcal", k))
            .unwrap_or_default();
        println!(
            "  {}  {:<30} {:>3} min{}",
            workout.date, workout.exercise, workout.duration_minutes, burned
        );
    }
    println!();
}

pub fn display_body_stats(stats: &[&BodyStatEntry]) {
    if stats.is_empty() {
        println!("No body stats logged yet.");
        return;
    }

    println!();
    println!("=== Body stats ({}) ===", stats.len());
    for stat in stats {
        let fmt = |v: Option<f64>, unit: &str| {
            v.map(|v| format!("{:.1}{}", v, unit))
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "  {}  weight {:>8}  body fat {:>6}  muscle {:>8}",
            stat.date,
            fmt(stat.weight_kg, " kg"),
            fmt(stat.body_fat, "%"),
            fmt(stat.muscle_mass, " kg")
        );
    }
    println!();
}

pub fn display_daily_summary(date: NaiveDate, summary: &DailySummary) {
    println!();
    println!("=== {} ===", date);
    println!(
        "  Eaten:  {:.0} kcal over {} meal(s)",
        summary.kcal_eaten, summary.meals
    );
    println!(
        "  Burned: {:.0} kcal over {} workout(s), {} min",
        summary.kcal_burned, summary.workouts, summary.workout_minutes
    );
    println!();
}

pub fn display_status(
    code: &HouseholdCode,
    session: &PlanSession,
    last_sync: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) {
    println!();
    println!("Household: {}", code);
    println!("Last sync: {}", time_ago(last_sync, now));
    println!("Seed: {}", session.seed());
    println!(
        "Share: {:.2} ({})",
        session.share(),
        if session.is_manual_share() { "manual" } else { "auto" }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_ago_never() {
        assert_eq!(time_ago(None, now()), "never");
    }

    #[test]
    fn test_time_ago_seconds() {
        assert_eq!(time_ago(Some(now()), now()), "1s ago");
        assert_eq!(time_ago(Some(now() - Duration::seconds(42)), now()), "42s ago");
    }

    #[test]
    fn test_time_ago_minutes_and_hours() {
        assert_eq!(time_ago(Some(now() - Duration::seconds(90)), now()), "2m ago");
        assert_eq!(time_ago(Some(now() - Duration::minutes(59)), now()), "59m ago");
        assert_eq!(time_ago(Some(now() - Duration::minutes(60)), now()), "1h ago");
        assert_eq!(time_ago(Some(now() - Duration::hours(5)), now()), "5h ago");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Partner", 4), "Part");
        assert_eq!(truncate("You", 7), "You");
    }
}
