use crate::model::trip::TravelerProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the discount a traveler is entitled to. exactly one applies per traveler.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Concession {
    /// under 11, travels free
    Child,
    /// 11 to 17, half fare
    Youth,
    /// 18 to 30 holding a railcard
    Railcard,
    /// 18 to 25, London resident, formerly in care
    CareLeaver,
    /// 60 and over, London resident, travels free
    LondonSenior,
    FullFare,
}

impl Concession {
    /// rules are tested in order and the first match wins, so a railcard
    /// holder who is also a care leaver pays the railcard rate.
    pub fn for_traveler(traveler: &TravelerProfile) -> Concession {
        match traveler.age {
            0..=10 => Concession::Child,
            11..=17 => Concession::Youth,
            18..=30 if traveler.has_railcard => Concession::Railcard,
            18..=25 if traveler.lives_in_london && traveler.is_care_leaver => {
                Concession::CareLeaver
            }
            60.. if traveler.lives_in_london => Concession::LondonSenior,
            _ => Concession::FullFare,
        }
    }

    /// fraction of the base fare charged.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Concession::Child | Concession::LondonSenior => Decimal::ZERO,
            Concession::Youth | Concession::CareLeaver => Decimal::new(5, 1),
            Concession::Railcard => Decimal::new(66, 2),
            Concession::FullFare => Decimal::ONE,
        }
    }

    pub fn charge(&self, base_fare: Decimal) -> Decimal {
        base_fare * self.multiplier()
    }
}

impl Display for Concession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Concession::Child => "child",
            Concession::Youth => "youth",
            Concession::Railcard => "railcard",
            Concession::CareLeaver => "care leaver",
            Concession::LondonSenior => "london senior",
            Concession::FullFare => "full fare",
        };
        write!(f, "{s}")
    }
}
