use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Couples Planner: seeded weekly meal plans and workouts for two people sharing a kitchen.
#[derive(Parser, Debug)]
#[command(name = "couples_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the household store JSON file.
    #[arg(long, global = true, env = "COUPLES_PLANNER_DATA", default_value = "households.json")]
    pub data: PathBuf,

    /// Household code to use instead of the last joined one.
    #[arg(long, global = true, env = "COUPLES_PLANNER_HOUSEHOLD")]
    pub household: Option<String>,

    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Seed and share overrides shared by the plan-derived commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PlanArgs {
    /// Seed for the week; defaults to the household's saved seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Share of shared ingredients for the first person (clamped to 0.30-0.70).
    #[arg(long)]
    pub share: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join (or create) a household and make it the current one.
    Join {
        /// Household code; prompted for when omitted.
        code: Option<String>,
    },

    /// Show the current household, sync time and plan inputs.
    Status,

    /// Show or edit the two profiles.
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Show the week plan, or one day of it.
    Plan {
        #[command(flatten)]
        plan: PlanArgs,

        /// Show only this day (1-7).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        day: Option<u8>,

        /// Draw a fresh random seed and save it.
        #[arg(long, conflicts_with = "seed")]
        regenerate: bool,

        /// Save --seed/--share as the household defaults.
        #[arg(long)]
        save: bool,

        /// Drop a saved share override and go back to the derived share.
        #[arg(long, conflicts_with = "share")]
        reset_share: bool,

        /// Print meals, workouts and groceries as JSON.
        #[arg(long, conflicts_with = "day")]
        json: bool,
    },

    /// Aggregated grocery list for the week.
    Groceries {
        #[command(flatten)]
        plan: PlanArgs,

        /// Write the list as CSV to this file.
        #[arg(long, conflicts_with = "stdout")]
        csv: Option<PathBuf>,

        /// Write the list as CSV to stdout.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the workout rotation, or one day of it.
    Workouts {
        /// Show only this day (1-7).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        day: Option<u8>,
    },

    /// Rowing minutes each person needs to burn off extra calories.
    Cheat {
        /// Extra kcal eaten together.
        kcal: f64,

        /// Share override for the split.
        #[arg(long)]
        share: Option<f64>,
    },

    /// Log a meal, workout or body measurement.
    #[command(subcommand)]
    Log(LogCommand),

    /// List logged entries, newest first.
    #[command(subcommand)]
    History(HistoryCommand),

    /// Logged intake and burn for today.
    Today,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            plan: PlanArgs::default(),
            day: None,
            regenerate: false,
            save: false,
            reset_share: false,
            json: false,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show profiles and energy targets.
    Show,

    /// Edit a profile interactively.
    Edit {
        /// Edit the partner's profile instead of yours.
        #[arg(long)]
        partner: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommand {
    /// Log a meal. Prompts for anything not given.
    Meal {
        /// Meal name.
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        kcal: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        /// Date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// Log a workout. Prompts for anything not given.
    Workout {
        #[arg(long)]
        exercise: Option<String>,

        #[arg(long)]
        minutes: Option<u32>,

        #[arg(long)]
        kcal: Option<f64>,

        /// Date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// Log body measurements. Prompts when no metric is given.
    Stats {
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        body_fat: Option<f64>,

        #[arg(long)]
        muscle: Option<f64>,

        /// Date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    Meals {
        #[arg(long, default_value_t = crate::state::DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
    Workouts {
        #[arg(long, default_value_t = crate::state::DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
    Stats {
        #[arg(long, default_value_t = crate::state::DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
}
