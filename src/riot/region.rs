//! Platform and continental routing values.

use std::fmt;
use std::str::FromStr;

// == Continent ==
/// Continental routing value, used by account and match endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Continent {
    pub fn host(self) -> &'static str {
        match self {
            Continent::Americas => "americas",
            Continent::Asia => "asia",
            Continent::Europe => "europe",
            Continent::Sea => "sea",
        }
    }
}

// == Platform ==
/// Platform routing value, used by summoner and league endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Jp1,
    Kr,
    Na1,
    Euw1,
    Eun1,
    Br1,
    La1,
    La2,
    Oc1,
    Tr1,
    Ru,
}

impl Platform {
    /// Order in which platforms are tried when the player's home is unknown.
    // TODO: seed this from the account's active shard once product confirms
    // that lookups should prefer the player's home region.
    pub const PROBE_ORDER: [Platform; 11] = [
        Platform::Jp1,
        Platform::Kr,
        Platform::Na1,
        Platform::Euw1,
        Platform::Eun1,
        Platform::Br1,
        Platform::La1,
        Platform::La2,
        Platform::Oc1,
        Platform::Tr1,
        Platform::Ru,
    ];

    pub fn host(self) -> &'static str {
        match self {
            Platform::Jp1 => "jp1",
            Platform::Kr => "kr",
            Platform::Na1 => "na1",
            Platform::Euw1 => "euw1",
            Platform::Eun1 => "eun1",
            Platform::Br1 => "br1",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Oc1 => "oc1",
            Platform::Tr1 => "tr1",
            Platform::Ru => "ru",
        }
    }

    pub fn continent(self) -> Continent {
        match self {
            Platform::Jp1 | Platform::Kr => Continent::Asia,
            Platform::Na1 | Platform::Br1 | Platform::La1 | Platform::La2 => Continent::Americas,
            Platform::Euw1 | Platform::Eun1 | Platform::Tr1 | Platform::Ru => Continent::Europe,
            Platform::Oc1 => Continent::Sea,
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::PROBE_ORDER
            .into_iter()
            .find(|p| p.host().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown platform '{}'", s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}
