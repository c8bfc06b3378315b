use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Minimum length of a cleaned household code.
pub const HOUSEHOLD_CODE_MIN_LEN: usize = 4;

/// Shared token scoping every stored record to one household.
///
/// Always lower-case `[a-z0-9_-]`, at least four characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdCode(String);

impl HouseholdCode {
    /// Clean user input: lower-case it and drop anything outside `[a-z0-9_-]`.
    ///
    /// Parsing an already clean code returns the same code.
    pub fn parse(raw: &str) -> Result<Self> {
        let clean: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
            .collect();

        if clean.len() < HOUSEHOLD_CODE_MIN_LEN {
            return Err(PlannerError::InvalidHouseholdCode(raw.to_string()));
        }
        Ok(Self(clean))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HouseholdCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cleans_input() {
        let code = HouseholdCode::parse("Fit-Us 2025!").unwrap();
        assert_eq!(code.as_str(), "fit-us2025");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let once = HouseholdCode::parse("Our_Home").unwrap();
        let twice = HouseholdCode::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_rejects_short_codes() {
        assert!(HouseholdCode::parse("ab!").is_err());
        assert!(HouseholdCode::parse("a b c").is_err());
        assert!(HouseholdCode::parse("").is_err());
        // non-ascii letters are dropped, not folded
        assert!(HouseholdCode::parse("ééé1").is_err());
    }
}
