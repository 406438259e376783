//! Per-role match statistics accumulator.

use crate::riot::dto::Participant;

// == Role Stats ==
/// Running totals over the matches played in one role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleStats {
    pub wins: u32,
    pub losses: u32,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    /// Lane minions plus neutral monsters
    pub creep_score: i64,
    pub total_duration_seconds: i64,
}

impl RoleStats {
    /// Folds one participant's line from a match lasting `duration_seconds`.
    pub fn record(&mut self, participant: &Participant, duration_seconds: i64) {
        if participant.win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.kills = self.kills.saturating_add(participant.kills);
        self.deaths = self.deaths.saturating_add(participant.deaths);
        self.assists = self.assists.saturating_add(participant.assists);
        self.creep_score = self
            .creep_score
            .saturating_add(participant.total_minions_killed)
            .saturating_add(participant.neutral_minions_killed);
        self.total_duration_seconds = self.total_duration_seconds.saturating_add(duration_seconds);
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}
