//! Player identity accepted by the lookup entry points.

use std::fmt;

// == Player Identity ==
/// Either a Riot ID (display name + tag) or an opaque player id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerIdentity {
    RiotId { game_name: String, tag_line: String },
    Puuid(String),
}

impl PlayerIdentity {
    pub fn riot_id(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        PlayerIdentity::RiotId {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    pub fn puuid(puuid: impl Into<String>) -> Self {
        PlayerIdentity::Puuid(puuid.into())
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerIdentity::RiotId {
                game_name,
                tag_line,
            } => write!(f, "{}#{}", game_name, tag_line),
            PlayerIdentity::Puuid(puuid) => write!(f, "puuid:{}", puuid),
        }
    }
}
