use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// the attributes of a single traveler that decide their concession.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelerProfile {
    pub age: u32,
    pub lives_in_london: bool,
    pub has_railcard: bool,
    /// only asked of, and only relevant to, travelers aged 18-25.
    pub is_care_leaver: bool,
}

impl TravelerProfile {
    pub fn new(age: u32) -> TravelerProfile {
        TravelerProfile {
            age,
            ..Default::default()
        }
    }

    pub fn with_london_residency(mut self) -> TravelerProfile {
        self.lives_in_london = true;
        self
    }

    pub fn with_railcard(mut self) -> TravelerProfile {
        self.has_railcard = true;
        self
    }

    pub fn as_care_leaver(mut self) -> TravelerProfile {
        self.is_care_leaver = true;
        self
    }
}

/// parses `AGE[:flag]*` where flags are `london`, `railcard` and `care-leaver`,
/// for example `22:london:care-leaver`.
impl FromStr for TravelerProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let age_str = parts.next().unwrap_or_default().trim();
        let age = age_str
            .parse::<u32>()
            .map_err(|e| format!("invalid traveler age '{age_str}': {e}"))?;
        let mut profile = TravelerProfile::new(age);
        for flag in parts {
            match flag.trim().to_lowercase().as_str() {
                "london" => profile.lives_in_london = true,
                "railcard" => profile.has_railcard = true,
                "care-leaver" | "care_leaver" => profile.is_care_leaver = true,
                other => return Err(format!("unknown traveler flag '{other}' in '{s}'")),
            }
        }
        Ok(profile)
    }
}
