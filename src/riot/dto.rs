//! Upstream payload shapes.
//!
//! Only the fields the gateway reads are declared. Unknown fields are
//! ignored and missing ones fall back to their zero value, so additive
//! schema changes upstream never break decoding.

use serde::{Deserialize, Serialize};

use crate::models::{tier_rating, SOLO_QUEUE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Summoner {
    pub puuid: String,
    pub profile_icon_id: i64,
    pub summoner_level: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    /// Division, `I`..`IV`
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl LeagueEntry {
    /// Scalar rating of this entry's ladder position.
    pub fn rating(&self) -> i32 {
        tier_rating(&self.tier, &self.rank, self.league_points)
    }
}

/// Picks the solo-queue entry if there is one, else the first entry.
pub fn preferred_entry(entries: &[LeagueEntry]) -> Option<&LeagueEntry> {
    entries
        .iter()
        .find(|e| e.queue_type == SOLO_QUEUE)
        .or_else(|| entries.first())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchInfo {
    /// Game length in seconds
    pub game_duration: i64,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Participant {
    pub puuid: String,
    pub team_position: String,
    pub win: bool,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub total_minions_killed: i64,
    pub neutral_minions_killed: i64,
}

/// Error body sent with upstream failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub status: ErrorStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorStatus {
    pub message: String,
    #[serde(default)]
    pub status_code: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_tolerates_unknown_and_missing_fields() {
        let json = r#"{
            "puuid": "p-1",
            "teamPosition": "UTILITY",
            "win": true,
            "kills": 3,
            "championName": "Lulu",
            "someFutureField": {"nested": [1, 2, 3]}
        }"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.team_position, "UTILITY");
        assert_eq!(p.kills, 3);
        assert_eq!(p.deaths, 0);
        assert_eq!(p.neutral_minions_killed, 0);
    }

    fn entry(queue: &str, tier: &str, rank: &str, lp: i32) -> LeagueEntry {
        LeagueEntry {
            queue_type: queue.to_string(),
            tier: tier.to_string(),
            rank: rank.to_string(),
            league_points: lp,
            ..Default::default()
        }
    }

    #[test]
    fn test_preferred_entry_picks_solo_queue() {
        let entries = vec![
            entry("RANKED_FLEX_SR", "DIAMOND", "I", 10),
            entry("RANKED_SOLO_5x5", "GOLD", "II", 50),
        ];
        let best = preferred_entry(&entries).unwrap();
        assert_eq!(best.tier, "GOLD");
        assert_eq!(best.rating(), 1450);
    }

    #[test]
    fn test_preferred_entry_falls_back_to_first() {
        let entries = vec![
            entry("RANKED_FLEX_SR", "SILVER", "IV", 0),
            entry("CHERRY", "BRONZE", "I", 0),
        ];
        assert_eq!(preferred_entry(&entries).unwrap().tier, "SILVER");
        assert!(preferred_entry(&[]).is_none());
    }

    #[test]
    fn test_match_decodes() {
        let json = r#"{
            "metadata": {"matchId": "JP1_1", "participants": ["p-1"]},
            "info": {"gameDuration": 1800, "participants": [{"puuid": "p-1"}]}
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.metadata.match_id, "JP1_1");
        assert_eq!(m.info.game_duration, 1800);
        assert_eq!(m.info.participants.len(), 1);
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"status": {"message": "Data not found", "status_code": 404}}"#;
        let env: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.status.message, "Data not found");
        assert_eq!(env.status.status_code, Some(404));

        assert!(serde_json::from_str::<ErrorEnvelope>(r#"{"error": "nope"}"#).is_err());
        assert!(serde_json::from_str::<ErrorEnvelope>("<html>bad gateway</html>").is_err());
    }
}
