//! Walks a player's recent matches and accumulates stats for one role.

use tracing::{debug, info};

use crate::error::Result;
use crate::mmr::calculator::{self, clamp_sample_size, RoleMmrResult};
use crate::mmr::stats::RoleStats;
use crate::models::{position_matches, Role, UNRANKED_BASE_RATING};
use crate::riot::dto::preferred_entry;
use crate::riot::{Platform, RiotClient};

// == Role Stats Aggregator ==
/// Computes role MMR for players on one platform through a shared client.
#[derive(Debug, Clone, Copy)]
pub struct RoleStatsAggregator<'a> {
    client: &'a RiotClient,
    platform: Platform,
}

impl<'a> RoleStatsAggregator<'a> {
    pub fn new(client: &'a RiotClient, platform: Platform) -> Self {
        Self { client, platform }
    }

    /// Estimates `puuid`'s MMR in `role` from up to `requested` recent matches.
    ///
    /// Failing to fetch the rank or the match list aborts the computation.
    /// A match whose detail cannot be fetched is skipped and only shrinks the
    /// effective sample.
    pub async fn compute_role_mmr(
        &self,
        puuid: &str,
        role: Role,
        requested: i64,
    ) -> Result<RoleMmrResult> {
        let sample_size = clamp_sample_size(requested);
        info!(
            platform = %self.platform,
            %role,
            sample_size,
            "Computing role MMR"
        );

        let base_rating = self.base_rating(puuid).await?;
        let match_ids = self
            .client
            .match_ids_by_puuid(self.platform, puuid, 0, sample_size)
            .await?;

        let stats = self.collect(puuid, role, &match_ids).await;
        let result = calculator::calculate(role, base_rating, &stats, sample_size);

        info!(
            platform = %self.platform,
            %role,
            mmr = result.mmr,
            games = result.games_played,
            fetched = match_ids.len(),
            "Role MMR computed"
        );
        Ok(result)
    }

    /// Rating of the player's solo-queue entry, else first entry, else the unranked default.
    pub async fn base_rating(&self, puuid: &str) -> Result<i32> {
        let entries = self
            .client
            .league_entries_by_puuid(self.platform, puuid)
            .await?;
        Ok(preferred_entry(&entries)
            .map(|entry| entry.rating())
            .unwrap_or(UNRANKED_BASE_RATING))
    }

    /// Folds every fetched match where `puuid` played `role`, one fetch at a time.
    async fn collect(&self, puuid: &str, role: Role, match_ids: &[String]) -> RoleStats {
        let mut stats = RoleStats::default();

        for match_id in match_ids {
            let game = match self.client.match_by_id(self.platform, match_id).await {
                Ok(game) => game,
                Err(err) => {
                    debug!(%match_id, error = %err, "Skipping match that failed to load");
                    continue;
                }
            };

            let Some(participant) = game.info.participants.iter().find(|p| p.puuid == puuid)
            else {
                debug!(%match_id, "Player not among participants, skipping");
                continue;
            };

            if !position_matches(&participant.team_position, role) {
                continue;
            }

            stats.record(participant, game.info.game_duration);
        }

        stats
    }
}
