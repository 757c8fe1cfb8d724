use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trioduel_engine::{
    MatchRules, Mode, RecentTeams, Roster, RosterLookupError, Side, Team, TeamKey, TeamSlot,
};
use trioduel_rating::{
    elo::{MatchOutcome, RatingUpdate},
    standing::PlayerStanding,
};

/// Persistent state of a duel session between CLI invocations.
///
/// Holds everything the interactive flow keeps between actions: the selected
/// players, generation settings, both teams with their lock flags, each side's
/// recent rosters, player standings and the match log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_b: Option<String>,
    pub mode: Mode,
    pub rules: MatchRules,
    pub team_a: Vec<SlotRecord>,
    pub team_b: Vec<SlotRecord>,
    pub recent_teams_a: RecentTeams,
    pub recent_teams_b: RecentTeams,
    pub standings: BTreeMap<String, PlayerStanding>,
    pub matches: Vec<MatchRecord>,
}

/// A team slot stored by character id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub id: String,
    #[serde(default)]
    pub locked: bool,
}

/// A finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Timestamp when the result was recorded
    pub played_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_id: Option<String>,
    pub player_a: String,
    pub player_b: String,
    pub winner: String,
    pub mode: Mode,
    pub rules: MatchRules,
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
    /// Ratings of both players after the match
    pub ratings: RatingUpdate,
}

impl SessionFile {
    pub fn slots(&self, side: Side) -> &[SlotRecord] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    fn slots_mut(&mut self, side: Side) -> &mut Vec<SlotRecord> {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    pub fn recent_teams(&self, side: Side) -> &RecentTeams {
        match side {
            Side::A => &self.recent_teams_a,
            Side::B => &self.recent_teams_b,
        }
    }

    pub fn has_teams(&self) -> bool {
        !self.team_a.is_empty() && !self.team_b.is_empty()
    }

    /// Resolves a side's slots against the roster.
    pub fn resolve_slots(
        &self,
        side: Side,
        roster: &Roster,
    ) -> Result<Vec<TeamSlot>, RosterLookupError> {
        self.slots(side)
            .iter()
            .map(|slot| {
                let character = roster.resolve(&slot.id)?.clone();
                Ok(TeamSlot {
                    character,
                    locked: slot.locked,
                })
            })
            .collect()
    }

    /// Replaces both teams. Every slot comes back unlocked.
    pub fn set_teams(&mut self, team_a: &Team, team_b: &Team) {
        let unlocked = |team: &Team| -> Vec<SlotRecord> {
            team.ids()
                .map(|id| SlotRecord {
                    id: id.to_owned(),
                    locked: false,
                })
                .collect()
        };
        self.team_a = unlocked(team_a);
        self.team_b = unlocked(team_b);
    }

    /// Flips the lock of one slot. Returns the new state, or `None` if the
    /// slot does not exist.
    pub fn toggle_lock(&mut self, side: Side, index: usize) -> Option<bool> {
        let slot = self.slots_mut(side).get_mut(index)?;
        slot.locked = !slot.locked;
        Some(slot.locked)
    }

    /// Pushes both current rosters onto their side's history.
    pub fn register_match(&mut self) {
        let key = |slots: &[SlotRecord]| TeamKey::from_ids(slots.iter().map(|s| s.id.clone()));
        let key_a = key(&self.team_a);
        let key_b = key(&self.team_b);
        self.recent_teams_a.register(key_a);
        self.recent_teams_b.register(key_b);
    }

    pub fn standing(&self, player: &str) -> PlayerStanding {
        self.standings.get(player).copied().unwrap_or_default()
    }

    /// Records a result between the selected players: updates both standings,
    /// appends the match to the log and registers the rosters as recent.
    pub fn record_match(
        &mut self,
        player_a: &str,
        player_b: &str,
        winning_side: Side,
        played_at: DateTime<Utc>,
    ) -> MatchRecord {
        let outcome = match winning_side {
            Side::A => MatchOutcome::AWins,
            Side::B => MatchOutcome::BWins,
        };
        let mut standing_a = self.standing(player_a);
        let mut standing_b = self.standing(player_b);
        let ratings = PlayerStanding::record_match(&mut standing_a, &mut standing_b, outcome);
        self.standings.insert(player_a.to_owned(), standing_a);
        self.standings.insert(player_b.to_owned(), standing_b);

        let ids = |slots: &[SlotRecord]| -> Vec<String> {
            slots.iter().map(|s| s.id.clone()).collect()
        };
        let record = MatchRecord {
            played_at,
            league_id: self.league_id.clone(),
            player_a: player_a.to_owned(),
            player_b: player_b.to_owned(),
            winner: match winning_side {
                Side::A => player_a.to_owned(),
                Side::B => player_b.to_owned(),
            },
            mode: self.mode,
            rules: self.rules,
            team_a: ids(&self.team_a),
            team_b: ids(&self.team_b),
            ratings,
        };
        self.matches.push(record.clone());
        self.register_match();
        record
    }
}
