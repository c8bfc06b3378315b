pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Day, Profile, Week};
pub use planner::{generate_week, PlanInputs, PlanSession};
