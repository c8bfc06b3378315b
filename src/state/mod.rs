mod household;
mod manager;
mod persistence;

pub use household::{HouseholdCode, HOUSEHOLD_CODE_MIN_LEN};
pub use manager::{
    DailySummary, HouseholdRecord, HouseholdStateManager, HouseholdStore, DEFAULT_HISTORY_LIMIT,
    MAX_WORKOUT_MINUTES, SYNC_EVENT_LIMIT,
};
pub use persistence::{load_store, save_store};
