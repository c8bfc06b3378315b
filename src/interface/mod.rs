pub mod prompts;
pub mod render;

pub use prompts::{
    confirm_meal_name, parse_date, prompt_body_stat, prompt_household_code, prompt_meal,
    prompt_profile, prompt_workout, prompt_yes_no, suggest_meal_name,
};
pub use render::{
    display_body_stats, display_cheat, display_daily_summary, display_day, display_groceries,
    display_meal_history, display_profile_summary, display_status, display_week, display_workout,
    display_workout_history, time_ago,
};
