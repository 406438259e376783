//! Role MMR formula.
//!
//! Pure functions blending a baseline rating with accumulated role stats.
//! The adjustment is damped by a confidence factor that grows quadratically
//! with the number of matched games relative to the requested sample.

use serde::Serialize;

use crate::mmr::stats::RoleStats;
use crate::models::Role;

pub const MMR_FLOOR: i32 = 0;
pub const MMR_CEILING: i32 = 4000;

/// Sample size used when the caller asks for zero or fewer matches.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;
/// Largest sample a single computation will fetch.
pub const MAX_SAMPLE_SIZE: usize = 100;

// == Role MMR Result ==
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMmrResult {
    pub role: Role,
    pub mmr: i32,
    pub games_played: u32,
    /// Percentage, 0 to 100
    pub win_rate: f64,
    pub average_kda: f64,
    /// Creep score per minute
    pub average_cs: f64,
    pub base_rating: i32,
    /// Damping factor in [0, 1]
    pub confidence: f64,
}

impl RoleMmrResult {
    /// Result for a player with no games in the role: baseline, zero confidence.
    pub fn empty(role: Role, base_rating: i32) -> Self {
        Self {
            role,
            mmr: base_rating,
            games_played: 0,
            win_rate: 0.0,
            average_kda: 0.0,
            average_cs: 0.0,
            base_rating,
            confidence: 0.0,
        }
    }
}

/// Maps a requested sample size onto `1..=100`, non-positive meaning the default.
pub fn clamp_sample_size(requested: i64) -> usize {
    if requested <= 0 {
        DEFAULT_SAMPLE_SIZE
    } else {
        (requested as u64).min(MAX_SAMPLE_SIZE as u64) as usize
    }
}

/// (kills + assists) / deaths, or kills + assists for a deathless record.
pub fn kda(kills: i64, deaths: i64, assists: i64) -> f64 {
    let takedowns = kills.saturating_add(assists) as f64;
    if deaths == 0 {
        takedowns
    } else {
        takedowns / deaths as f64
    }
}

pub fn cs_per_minute(creep_score: i64, duration_seconds: i64) -> f64 {
    if duration_seconds == 0 {
        return 0.0;
    }
    creep_score as f64 / (duration_seconds as f64 / 60.0)
}

pub fn confidence(matched: usize, requested: usize) -> f64 {
    if requested == 0 {
        return 1.0;
    }
    let ratio = matched as f64 / requested as f64;
    (ratio * ratio).min(1.0)
}

/// Between -200 and +200 for win rates from 0% to 100%.
pub fn win_rate_adjustment(win_rate_pct: f64) -> f64 {
    (win_rate_pct / 100.0 - 0.5) * 400.0
}

/// Penalty below 2.0 KDA, bonus above 3.0 capped at +100.
pub fn kda_adjustment(kda: f64) -> f64 {
    if kda < 2.0 {
        (kda - 2.0) * 50.0
    } else if kda > 3.0 {
        ((kda - 3.0) * 50.0).min(100.0)
    } else {
        0.0
    }
}

/// Penalty below 5 CS/min, bonus above 7 CS/min capped at +50.
pub fn cs_adjustment(cs_per_min: f64) -> f64 {
    if cs_per_min < 5.0 {
        (cs_per_min - 5.0) * 10.0
    } else if cs_per_min > 7.0 {
        ((cs_per_min - 7.0) * 25.0).min(50.0)
    } else {
        0.0
    }
}

/// Combines `base_rating` with `stats` gathered over up to `requested` matches.
///
/// With no matched games the baseline is returned untouched. Otherwise the
/// blended rating is rounded and clamped to `[MMR_FLOOR, MMR_CEILING]`.
pub fn calculate(role: Role, base_rating: i32, stats: &RoleStats, requested: usize) -> RoleMmrResult {
    let matched = stats.games();
    if matched == 0 {
        return RoleMmrResult::empty(role, base_rating);
    }

    let win_rate = stats.wins as f64 / matched as f64 * 100.0;
    let average_kda = kda(stats.kills, stats.deaths, stats.assists);
    let average_cs = cs_per_minute(stats.creep_score, stats.total_duration_seconds);
    let confidence = confidence(matched as usize, requested);

    let adjustment =
        win_rate_adjustment(win_rate) + kda_adjustment(average_kda) + cs_adjustment(average_cs);
    let mmr = (base_rating as f64 + (confidence * adjustment).round())
        .clamp(MMR_FLOOR as f64, MMR_CEILING as f64) as i32;

    RoleMmrResult {
        role,
        mmr,
        games_played: matched,
        win_rate,
        average_kda,
        average_cs,
        base_rating,
        confidence,
    }
}
