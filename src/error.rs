use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Household not found: {0}")]
    HouseholdNotFound(String),

    #[error("Invalid household code '{0}': use at least 4 characters (a-z, 0-9, _ or -)")]
    InvalidHouseholdCode(String),

    #[error("No household selected. Run 'join <code>' first.")]
    NoHousehold,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
