//! Player Lookup Module
//!
//! Entry points that find a player without knowing their home platform, by
//! probing platforms in a fixed order through one shared client.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{ApiError, Result};
use crate::mmr::{RoleMmrResult, RoleStatsAggregator};
use crate::models::{PlayerIdentity, RankResponse, Role};
use crate::riot::dto::preferred_entry;
use crate::riot::{Platform, RiotClient};

// == Player Lookup ==
#[derive(Debug, Clone)]
pub struct PlayerLookup {
    client: Arc<RiotClient>,
    probe_order: Vec<Platform>,
}

impl PlayerLookup {
    pub fn new(client: Arc<RiotClient>) -> Self {
        Self {
            client,
            probe_order: Platform::PROBE_ORDER.to_vec(),
        }
    }

    /// Replaces the platform probe order.
    pub fn with_probe_order(mut self, probe_order: Vec<Platform>) -> Self {
        self.probe_order = probe_order;
        self
    }

    pub fn client(&self) -> &Arc<RiotClient> {
        &self.client
    }

    async fn resolve_puuid(&self, platform: Platform, identity: &PlayerIdentity) -> Result<String> {
        match identity {
            PlayerIdentity::Puuid(puuid) => Ok(puuid.clone()),
            PlayerIdentity::RiotId {
                game_name,
                tag_line,
            } => {
                let account = self
                    .client
                    .account_by_riot_id(platform, game_name, tag_line)
                    .await?;
                Ok(account.puuid)
            }
        }
    }

    // == Rank Lookup ==
    /// Finds the player's current rank.
    ///
    /// The first platform where account, summoner and league entries all load
    /// wins, even when it has no entries; later platforms are not tried.
    pub async fn lookup_rank(&self, identity: &PlayerIdentity) -> Result<RankResponse> {
        let mut last_error = None;

        for &platform in &self.probe_order {
            debug!(%platform, %identity, "Trying platform for rank");
            match self.rank_on(platform, identity).await {
                Ok(rank) => {
                    info!(%platform, %identity, tier = %rank.tier, rating = rank.rating, "Rank found");
                    return Ok(rank);
                }
                Err(err) => {
                    debug!(%platform, error = %err, "Rank not available on platform");
                    last_error = Some(Box::new(err));
                }
            }
        }

        warn!(%identity, "Rank lookup failed on every platform");
        Err(ApiError::NotFound {
            attempted: self.probe_order.len(),
            last: last_error,
        })
    }

    async fn rank_on(&self, platform: Platform, identity: &PlayerIdentity) -> Result<RankResponse> {
        let puuid = self.resolve_puuid(platform, identity).await?;
        let summoner = self.client.summoner_by_puuid(platform, &puuid).await?;
        let entries = self.client.league_entries_by_puuid(platform, &puuid).await?;

        Ok(match preferred_entry(&entries) {
            Some(entry) => RankResponse {
                tier: entry.tier.clone(),
                rank: entry.rank.clone(),
                lp: entry.league_points,
                rating: entry.rating(),
                profile_icon: summoner.profile_icon_id,
            },
            None => RankResponse::unranked(summoner.profile_icon_id),
        })
    }

    // == Role MMR ==
    /// Computes role MMR on the first platform where the player has games in `role`.
    ///
    /// When no platform has any, the first successful empty result is returned.
    pub async fn role_mmr(
        &self,
        identity: &PlayerIdentity,
        role: Role,
        requested: i64,
    ) -> Result<RoleMmrResult> {
        let mut first_empty = None;
        let mut last_error = None;

        for &platform in &self.probe_order {
            debug!(%platform, %identity, %role, "Trying platform for role MMR");
            let outcome = match self.resolve_puuid(platform, identity).await {
                Ok(puuid) => {
                    RoleStatsAggregator::new(&self.client, platform)
                        .compute_role_mmr(&puuid, role, requested)
                        .await
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok(result) if result.games_played > 0 => return Ok(result),
                Ok(result) => {
                    first_empty.get_or_insert(result);
                }
                Err(err) => {
                    debug!(%platform, error = %err, "Role MMR not available on platform");
                    last_error = Some(Box::new(err));
                }
            }
        }

        first_empty.ok_or(ApiError::NotFound {
            attempted: self.probe_order.len(),
            last: last_error,
        })
    }
}
