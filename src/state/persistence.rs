use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::state::manager::HouseholdStore;

/// Load the household store from a JSON file.
///
/// A missing file is an empty store; the first `join` creates it.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<HouseholdStore> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "Store file not found, starting empty");
        return Ok(HouseholdStore::default());
    }

    let content = fs::read_to_string(path)?;
    let store: HouseholdStore = serde_json::from_str(&content)?;
    debug!(path = %path.display(), households = store.households.len(), "Store loaded");
    Ok(store)
}

/// Save the household store as pretty-printed JSON.
pub fn save_store<P: AsRef<Path>>(path: P, store: &HouseholdStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    use crate::models::NewMeal;
    use crate::state::manager::HouseholdStateManager;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = load_store(dir.path().join("households.json")).unwrap();
        assert!(store.households.is_empty());
        assert!(store.current.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut manager = HouseholdStateManager::new(HouseholdStore::default());
        let code = manager.ensure_household("our-home", now).unwrap();
        manager
            .insert_meal(
                &code,
                NewMeal {
                    meal_name: "Tuna salad bowl".to_string(),
                    calories: 520.0,
                    protein: Some(40.0),
                    carbs: None,
                    fat: None,
                    date: now.date_naive(),
                },
                now,
            )
            .unwrap();

        let file = NamedTempFile::new().unwrap();
        save_store(file.path(), manager.store()).unwrap();

        let reloaded = load_store(file.path()).unwrap();
        assert_eq!(&reloaded, manager.store());
        assert_eq!(reloaded.current.as_ref(), Some(&code));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_store(file.path()).is_err());
    }
}
