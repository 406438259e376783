//! Ranked ladder coordinates and their scalar rating.
//!
//! [`tier_rating`] is the only place a tier/division/LP triple becomes a
//! number; both the rank lookup and the MMR baseline go through it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rating used as MMR baseline when a player has no league entries at all.
pub const UNRANKED_BASE_RATING: i32 = 800;

/// Queue preferred when a player has several league entries.
pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

const TIER_STEP: i32 = 400;
const DIVISION_STEP: i32 = 100;

// == Tier ==
/// The ten ranked tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }

    /// Master and above have no divisions.
    pub fn is_apex(self) -> bool {
        matches!(self, Tier::Master | Tier::Grandmaster | Tier::Challenger)
    }

    fn base(self) -> i32 {
        self as i32 * TIER_STEP
    }
}

impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Division ==
/// Division within a non-apex tier, IV lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    IV,
    III,
    II,
    I,
}

impl Division {
    pub const ALL: [Division; 4] = [Division::IV, Division::III, Division::II, Division::I];

    pub fn as_str(self) -> &'static str {
        match self {
            Division::IV => "IV",
            Division::III => "III",
            Division::II => "II",
            Division::I => "I",
        }
    }

    fn offset(self) -> i32 {
        self as i32 * DIVISION_STEP
    }
}

impl FromStr for Division {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Division::ALL
            .into_iter()
            .find(|division| division.as_str() == s)
            .ok_or(())
    }
}

// == Tier Rating ==
/// Converts ladder coordinates into a single rating.
///
/// Tier contributes 400 per step (Iron 0 to Challenger 3600), division 100
/// per step from IV to I, and LP is added as-is. Apex tiers ignore the
/// division. An unknown tier or division contributes 0. The sum saturates
/// instead of overflowing on absurd LP values.
pub fn tier_rating(tier: &str, division: &str, league_points: i32) -> i32 {
    let tier = tier.parse::<Tier>().ok();
    let tier_value = tier.map(Tier::base).unwrap_or(0);
    let division_value = match tier {
        Some(t) if t.is_apex() => 0,
        _ => division.parse::<Division>().map(Division::offset).unwrap_or(0),
    };
    (tier_value + division_value).saturating_add(league_points)
}
