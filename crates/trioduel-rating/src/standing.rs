use serde::{Deserialize, Serialize};

use crate::elo::{DEFAULT_RATING, MatchOutcome, RatingUpdate, update_ratings};

/// A player's rating and match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStanding {
    pub rating: i32,
    pub wins: u32,
    pub losses: u32,
    pub games: u32,
}

impl Default for PlayerStanding {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            wins: 0,
            losses: 0,
            games: 0,
        }
    }
}

impl PlayerStanding {
    fn apply(&mut self, rating: i32, won: bool) {
        self.rating = rating;
        self.games += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Share of games won, or `None` before the first game.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        (self.games > 0).then(|| f64::from(self.wins) / f64::from(self.games))
    }

    /// Updates both standings from one match between `a` and `b`.
    pub fn record_match(a: &mut Self, b: &mut Self, outcome: MatchOutcome) -> RatingUpdate {
        let update = update_ratings(a.rating, b.rating, outcome);
        a.apply(update.rating_a, outcome == MatchOutcome::AWins);
        b.apply(update.rating_b, outcome == MatchOutcome::BWins);
        update
    }
}
