//! The five canonical lane roles and the position synonym table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// == Role ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUPPORT",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                format!("Invalid role '{}'. Must be one of: TOP, JUNGLE, MID, ADC, SUPPORT", s)
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an upstream lane position onto a canonical role name.
///
/// `MIDDLE` becomes `MID`, `BOTTOM`/`BOT` become `ADC`, `UTILITY` becomes
/// `SUPPORT`; anything else passes through unchanged.
pub fn normalize_position(position: &str) -> &str {
    match position {
        "MIDDLE" => "MID",
        "BOTTOM" | "BOT" => "ADC",
        "UTILITY" => "SUPPORT",
        other => other,
    }
}

/// True when an upstream position normalizes to `role`.
pub fn position_matches(position: &str, role: Role) -> bool {
    normalize_position(position) == role.as_str()
}
