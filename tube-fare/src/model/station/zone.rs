use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// a fare zone. zone 1 is central London, numbers grow outward.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zone(pub u32);

impl Zone {
    /// number of zones a trip between two zones passes through, counting both ends.
    pub fn span(&self, other: &Zone) -> u32 {
        self.0.abs_diff(other.0) + 1
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
