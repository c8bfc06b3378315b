use std::io;
use std::path::Path;

use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use tracing::info;

use couples_planner_rs::cli::{Cli, Command, HistoryCommand, LogCommand, PlanArgs, ProfileCommand};
use couples_planner_rs::error::{PlannerError, Result};
use couples_planner_rs::interface::{
    confirm_meal_name, display_body_stats, display_cheat, display_daily_summary, display_day,
    display_groceries, display_meal_history, display_profile_summary, display_status,
    display_week, display_workout, display_workout_history, parse_date, prompt_body_stat,
    prompt_household_code, prompt_meal, prompt_profile, prompt_workout, prompt_yes_no,
};
use couples_planner_rs::logging::init_logging;
use couples_planner_rs::models::{NewBodyStat, NewMeal, NewWorkout, Person};
use couples_planner_rs::planner::{export_grocery_csv, write_grocery_csv, PlanSession, DAYS_PER_WEEK};
use couples_planner_rs::state::{load_store, save_store, HouseholdCode, HouseholdStateManager};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut manager = HouseholdStateManager::new(load_store(&cli.data)?);
    let household = cli.household.as_deref();
    let command = cli.command.unwrap_or_default();

    let changed = match command {
        Command::Join { code } => cmd_join(&mut manager, code)?,
        Command::Status => cmd_status(&manager, household)?,
        Command::Profile(ProfileCommand::Show) => cmd_profile_show(&manager, household)?,
        Command::Profile(ProfileCommand::Edit { partner }) => {
            cmd_profile_edit(&mut manager, household, partner)?
        }
        Command::Plan {
            plan,
            day,
            regenerate,
            save,
            reset_share,
            json,
        } => cmd_plan(
            &mut manager,
            household,
            plan,
            day,
            PlanFlags {
                regenerate,
                save,
                reset_share,
                json,
            },
        )?,
        Command::Groceries { plan, csv, stdout } => {
            cmd_groceries(&manager, household, plan, csv.as_deref(), stdout)?
        }
        Command::Workouts { day } => cmd_workouts(&manager, household, day)?,
        Command::Cheat { kcal, share } => cmd_cheat(&manager, household, kcal, share)?,
        Command::Log(log) => cmd_log(&mut manager, household, log)?,
        Command::History(history) => cmd_history(&manager, household, history)?,
        Command::Today => cmd_today(&manager, household)?,
    };

    if changed {
        save_store(&cli.data, manager.store())?;
        info!(path = %cli.data.display(), "Store saved");
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn date_or_today(date: Option<String>) -> Result<NaiveDate> {
    date.as_deref().map(parse_date).unwrap_or_else(|| Ok(today()))
}

/// Session for the household, with per-command seed/share overrides applied.
fn session_for(
    manager: &HouseholdStateManager,
    code: &HouseholdCode,
    plan: PlanArgs,
) -> Result<PlanSession> {
    let mut session = manager.plan_session(code)?;
    if let Some(seed) = plan.seed {
        session.set_seed(seed);
    }
    if let Some(share) = plan.share {
        session.set_share(share);
    }
    Ok(session)
}

/// Join (or create) a household.
fn cmd_join(manager: &mut HouseholdStateManager, code: Option<String>) -> Result<bool> {
    let raw = match code {
        Some(code) => code,
        None => prompt_household_code()?,
    };
    let existed = HouseholdCode::parse(&raw)
        .map(|c| manager.record(&c).is_ok())
        .unwrap_or(false);

    let code = manager.ensure_household(&raw, Utc::now())?;
    manager.log_sync(&code, "join", Utc::now())?;

    if existed {
        println!("Joined household '{}'.", code);
    } else {
        println!("Created household '{}' with default profiles.", code);
        println!("Edit them with 'profile edit' and 'profile edit --partner'.");
    }
    Ok(true)
}

fn cmd_status(manager: &HouseholdStateManager, household: Option<&str>) -> Result<bool> {
    let code = manager.resolve(household)?;
    let session = manager.plan_session(&code)?;
    display_status(&code, &session, manager.last_sync_at(&code)?, Utc::now());
    display_daily_summary(today(), &manager.daily_summary(&code, today())?);
    Ok(false)
}

fn cmd_profile_show(manager: &HouseholdStateManager, household: Option<&str>) -> Result<bool> {
    let code = manager.resolve(household)?;
    display_profile_summary(&manager.plan_session(&code)?);
    Ok(false)
}

/// Edit one profile, then recompute targets and the plan before saving.
fn cmd_profile_edit(
    manager: &mut HouseholdStateManager,
    household: Option<&str>,
    partner: bool,
) -> Result<bool> {
    let code = manager.resolve(household)?;
    let person = if partner { Person::Partner } else { Person::You };

    let mut session = manager.plan_session(&code)?;
    let edited = prompt_profile(session.profile(person))?;
    session.set_profile(person, edited.clone());
    session.recompute();
    display_profile_summary(&session);

    if !prompt_yes_no("Save profile?", true)? {
        println!("Profile not saved.");
        return Ok(false);
    }

    manager.update_profile(&code, person, edited)?;
    if !session.is_manual_share() {
        manager.set_share_override(&code, None)?;
    }
    manager.log_sync(&code, "profile", Utc::now())?;
    println!("Profile saved.");
    Ok(true)
}

struct PlanFlags {
    regenerate: bool,
    save: bool,
    reset_share: bool,
    json: bool,
}

fn cmd_plan(
    manager: &mut HouseholdStateManager,
    household: Option<&str>,
    plan: PlanArgs,
    day: Option<u8>,
    flags: PlanFlags,
) -> Result<bool> {
    let code = manager.resolve(household)?;
    let mut session = session_for(manager, &code, plan)?;
    let mut changed = false;

    if flags.reset_share {
        session.reset_share();
        manager.set_share_override(&code, None)?;
        changed = true;
    }
    if flags.regenerate {
        let seed = session.regenerate();
        manager.set_seed(&code, seed)?;
        println!("New seed: {}", seed);
        changed = true;
    }
    if flags.save {
        manager.set_seed(&code, session.seed())?;
        let share = session.is_manual_share().then(|| session.share());
        manager.set_share_override(&code, share)?;
        changed = true;
    }
    if changed {
        manager.log_sync(&code, "plan", Utc::now())?;
    }

    if flags.json {
        println!("{}", serde_json::to_string_pretty(&session.weekly_plan())?);
        return Ok(changed);
    }

    match day {
        Some(day) => display_day(&session, usize::from(day) - 1),
        None => display_week(&session),
    }
    Ok(changed)
}

fn cmd_groceries(
    manager: &HouseholdStateManager,
    household: Option<&str>,
    plan: PlanArgs,
    csv: Option<&Path>,
    stdout: bool,
) -> Result<bool> {
    let code = manager.resolve(household)?;
    let lines = session_for(manager, &code, plan)?.groceries();

    if let Some(path) = csv {
        export_grocery_csv(&lines, path)?;
        println!("Wrote {} items to {}", lines.len(), path.display());
    } else if stdout {
        write_grocery_csv(&lines, io::stdout().lock())?;
    } else {
        display_groceries(&lines);
    }
    Ok(false)
}

fn cmd_workouts(
    manager: &HouseholdStateManager,
    household: Option<&str>,
    day: Option<u8>,
) -> Result<bool> {
    let code = manager.resolve(household)?;
    let session = manager.plan_session(&code)?;
    match day {
        Some(day) => display_workout(&session, usize::from(day) - 1),
        None => (0..DAYS_PER_WEEK).for_each(|d| display_workout(&session, d)),
    }
    Ok(false)
}

fn cmd_cheat(
    manager: &HouseholdStateManager,
    household: Option<&str>,
    kcal: f64,
    share: Option<f64>,
) -> Result<bool> {
    if !kcal.is_finite() || kcal < 0.0 {
        return Err(PlannerError::InvalidInput(
            "Extra calories must be a non-negative number".to_string(),
        ));
    }
    let code = manager.resolve(household)?;
    let session = session_for(manager, &code, PlanArgs { seed: None, share })?;
    display_cheat(&session, kcal, &session.cheat_makeup(kcal));
    Ok(false)
}

fn cmd_log(
    manager: &mut HouseholdStateManager,
    household: Option<&str>,
    log: LogCommand,
) -> Result<bool> {
    let code = manager.resolve(household)?;
    let now = Utc::now();

    match log {
        LogCommand::Meal {
            name,
            kcal,
            protein,
            carbs,
            fat,
            date,
        } => {
            let known = manager.known_meal_names(&code)?;
            let meal = match (name, kcal) {
                (Some(name), Some(calories)) => NewMeal {
                    meal_name: confirm_meal_name(&name, &known)?,
                    calories,
                    protein,
                    carbs,
                    fat,
                    date: date_or_today(date)?,
                },
                _ => prompt_meal(&known, today())?,
            };
            let entry = manager.insert_meal(&code, meal, now)?;
            println!("Logged '{}' ({:.0} kcal).", entry.meal_name, entry.calories);
        }
        LogCommand::Workout {
            exercise,
            minutes,
            kcal,
            date,
        } => {
            let workout = match (exercise, minutes) {
                (Some(exercise), Some(duration_minutes)) => NewWorkout {
                    exercise,
                    duration_minutes,
                    calories_burned: kcal,
                    date: date_or_today(date)?,
                },
                _ => prompt_workout(today())?,
            };
            let entry = manager.insert_workout(&code, workout, now)?;
            println!(
                "Logged '{}' ({} min).",
                entry.exercise, entry.duration_minutes
            );
        }
        LogCommand::Stats {
            weight,
            body_fat,
            muscle,
            date,
        } => {
            let stat = if weight.is_none() && body_fat.is_none() && muscle.is_none() {
                prompt_body_stat(today())?
            } else {
                NewBodyStat {
                    date: date_or_today(date)?,
                    weight_kg: weight,
                    body_fat,
                    muscle_mass: muscle,
                }
            };
            let entry = manager.insert_body_stat(&code, stat, now)?;
            println!("Logged body stats for {}.", entry.date);
        }
    }
    Ok(true)
}

fn cmd_history(
    manager: &HouseholdStateManager,
    household: Option<&str>,
    history: HistoryCommand,
) -> Result<bool> {
    let code = manager.resolve(household)?;
    match history {
        HistoryCommand::Meals { limit } => display_meal_history(&manager.recent_meals(&code, limit)?),
        HistoryCommand::Workouts { limit } => {
            display_workout_history(&manager.recent_workouts(&code, limit)?)
        }
        HistoryCommand::Stats { limit } => display_body_stats(&manager.body_stats(&code, limit)?),
    }
    Ok(false)
}

fn cmd_today(manager: &HouseholdStateManager, household: Option<&str>) -> Result<bool> {
    let code = manager.resolve(household)?;
    let date = today();
    display_daily_summary(date, &manager.daily_summary(&code, date)?);
    Ok(false)
}
