use serde::{Deserialize, Serialize};

use crate::{RecentTeams, TeamSlot};

/// Team generation strategy.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Uniform random assembly.
    #[default]
    #[display("random")]
    Random,
    /// Shortlist-and-combine search for the best balanced pair.
    #[display("optimized")]
    #[serde(alias = "incredibles")]
    Optimized,
}

/// Which side of the duel a team belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[display("A")]
    A,
    #[display("B")]
    B,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Rule toggles applied to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Team A and team B may not share any character.
    pub no_duplicates_across_teams: bool,
    /// Redraw random teams that repeat the side's recent history. Optimized
    /// search penalizes repeats whether or not this is set.
    pub avoid_recent_teams: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            no_duplicates_across_teams: true,
            avoid_recent_teams: true,
        }
    }
}

/// Inputs for one side of a generation call.
///
/// `slots` is the team currently shown for this side; only the locked slots
/// matter to the generator. An empty `slots` means nothing is pinned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideConfig {
    pub slots: Vec<TeamSlot>,
    pub recent_teams: RecentTeams,
}

/// Everything a generation call needs besides the roster itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    pub mode: Mode,
    pub rules: MatchRules,
    pub side_a: SideConfig,
    pub side_b: SideConfig,
}

impl GenerationConfig {
    #[must_use]
    pub fn side(&self, side: Side) -> &SideConfig {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }
}
