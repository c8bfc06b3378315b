use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    Female,
    Male,
}

/// Activity level, mapped to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light (1-3x/wk)",
            ActivityLevel::Moderate => "Moderate (3-5x/wk)",
            ActivityLevel::Active => "Active (6-7x/wk)",
            ActivityLevel::VeryActive => "Very active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    Cut,
    Recomp,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Recomp, Goal::Bulk];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Cut => "Cut",
            Goal::Recomp => "Recomp",
            Goal::Bulk => "Bulk",
        }
    }
}

/// One person's body profile.
///
/// Treated as immutable while a plan is computed; edits replace the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    /// Starting profile for the first person of a new household.
    pub fn default_you() -> Self {
        Self {
            name: "You".to_string(),
            sex: Sex::Female,
            age: 30,
            height_cm: 170.0,
            weight_kg: 65.0,
            body_fat_pct: None,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Cut,
        }
    }

    /// Starting profile for the partner of a new household.
    pub fn default_partner() -> Self {
        Self {
            name: "Partner".to_string(),
            sex: Sex::Male,
            age: 32,
            height_cm: 180.0,
            weight_kg: 78.0,
            body_fat_pct: None,
            activity_level: ActivityLevel::Light,
            goal: Goal::Recomp,
        }
    }

    /// Name to show in tables, falling back when left blank.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            fallback
        } else {
            trimmed
        }
    }
}

/// Which of the two household members something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Person {
    You,
    Partner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_original_spellings() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"veryActive\"");

        let profile: Profile = serde_json::from_str(
            r#"{"name":"A","sex":"male","age":40,"heightCm":182,"weightKg":90,
                "activityLevel":"active","goal":"bulk"}"#,
        )
        .unwrap();
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.body_fat_pct, None);
        assert_eq!(profile.goal, Goal::Bulk);
    }

    #[test]
    fn test_display_name_fallback() {
        let mut p = Profile::default_you();
        p.name = "   ".to_string();
        assert_eq!(p.display_name("You"), "You");
        p.name = " Sam ".to_string();
        assert_eq!(p.display_name("You"), "Sam");
    }
}
