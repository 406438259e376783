//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::{PlayerIdentity, Role};

/// Maximum accepted length for any identity component
const MAX_IDENTITY_LENGTH: usize = 128;

/// Request body for the rank lookup (POST /api/rank)
///
/// Either `gameName` + `tagLine` or `puuid` must be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
    #[serde(default)]
    pub puuid: Option<String>,
}

impl RankRequest {
    /// Validates the request and extracts the identity to look up.
    pub fn identity(&self) -> Result<PlayerIdentity, String> {
        identity_from(&self.game_name, &self.tag_line, self.puuid.as_deref())
    }
}

/// Request body for the role MMR computation (POST /api/role-mmr)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMmrRequest {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
    pub role: String,
    /// Desired sample size; non-positive means the default
    #[serde(default)]
    pub match_count: i64,
}

impl RoleMmrRequest {
    /// Validates the request and extracts identity and role.
    pub fn validate(&self) -> Result<(PlayerIdentity, Role), String> {
        let role = self.role.parse::<Role>()?;
        let identity = identity_from(&self.game_name, &self.tag_line, self.puuid.as_deref())?;
        Ok((identity, role))
    }
}

fn identity_from(
    game_name: &str,
    tag_line: &str,
    puuid: Option<&str>,
) -> Result<PlayerIdentity, String> {
    if let Some(puuid) = puuid.filter(|p| !p.is_empty()) {
        if puuid.len() > MAX_IDENTITY_LENGTH {
            return Err("puuid is too long".to_string());
        }
        return Ok(PlayerIdentity::puuid(puuid));
    }

    if game_name.is_empty() || tag_line.is_empty() {
        return Err("gameName and tagLine (or puuid) are required".to_string());
    }
    if game_name.len() > MAX_IDENTITY_LENGTH || tag_line.len() > MAX_IDENTITY_LENGTH {
        return Err("gameName or tagLine is too long".to_string());
    }

    Ok(PlayerIdentity::riot_id(game_name, tag_line))
}
