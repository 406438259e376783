//! Typed endpoint helpers on top of [`RiotClient::fetch`].

use crate::error::Result;
use crate::riot::call::UpstreamCall;
use crate::riot::client::RiotClient;
use crate::riot::dto::{Account, LeagueEntry, Match, Summoner};
use crate::riot::region::Platform;

impl RiotClient {
    /// GET /riot/account/v1/accounts/by-riot-id/{gameName}/{tagLine}
    pub async fn account_by_riot_id(
        &self,
        platform: Platform,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account> {
        let call = UpstreamCall::continental(
            platform,
            &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
        );
        self.fetch(&call).await
    }

    /// GET /lol/summoner/v4/summoners/by-puuid/{puuid}
    pub async fn summoner_by_puuid(&self, platform: Platform, puuid: &str) -> Result<Summoner> {
        let call = UpstreamCall::regional(
            platform,
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        );
        self.fetch(&call).await
    }

    /// GET /lol/league/v4/entries/by-puuid/{puuid}
    pub async fn league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<Vec<LeagueEntry>> {
        let call =
            UpstreamCall::regional(platform, &["lol", "league", "v4", "entries", "by-puuid", puuid]);
        self.fetch(&call).await
    }

    /// GET /lol/match/v5/matches/by-puuid/{puuid}/ids, newest first
    pub async fn match_ids_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
        start: usize,
        count: usize,
    ) -> Result<Vec<String>> {
        let call = UpstreamCall::continental(
            platform,
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        )
        .query("start", start)
        .query("count", count);
        self.fetch(&call).await
    }

    /// GET /lol/match/v5/matches/{matchId}
    pub async fn match_by_id(&self, platform: Platform, match_id: &str) -> Result<Match> {
        let call = UpstreamCall::continental(platform, &["lol", "match", "v5", "matches", match_id]);
        self.fetch(&call).await
    }
}
