//! Team generation for head-to-head duels.
//!
//! Given an immutable roster and a [`GenerationConfig`], this crate assembles
//! two three-member teams. Three operations are provided:
//!
//! - [`random::generate_random_teams`] - Uniform random assembly honoring locks
//!   and cross-team duplicate rules, redrawing rosters that repeat recent history
//! - [`optimized::generate_optimized_teams`] - Bounded shortlist-and-combine search
//!   for the strongest, most balanced pair of teams
//! - [`swap::smart_swap`] - Single-slot local search that replaces one member to
//!   maximize the team score
//!
//! All operations are pure functions of their inputs plus the random number
//! generator handed in by the caller. Nothing is cached between calls: locks and
//! recent-team history travel in through [`GenerationConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use trioduel_engine::{GenerationConfig, Mode};
//! use trioduel_evaluator::team_evaluator::SynergyEvaluator;
//! use trioduel_generator::{GeneratorParams, generate_teams};
//! # let roster: Vec<trioduel_engine::Character> = todo!();
//!
//! let config = GenerationConfig {
//!     mode: Mode::Optimized,
//!     ..GenerationConfig::default()
//! };
//! let evaluator = SynergyEvaluator::default();
//! let pair = generate_teams(&roster, &config, &evaluator, &GeneratorParams::DEFAULT, &mut rand::rng())?;
//! println!("{:?} vs {:?}", pair.team_a.key(), pair.team_b.key());
//! # Ok::<(), trioduel_generator::GenerationError>(())
//! ```
//!
//! # Current Limitations
//!
//! - **Bounded search**: The optimized generator only combines the top
//!   [`GeneratorParams::shortlist_size`] characters, so the true best pair over the
//!   full roster may be missed.
//! - **Best-effort repetition avoidance**: Random generation gives up after
//!   [`GeneratorParams::max_random_attempts`] draws and returns the last one.

use rand::Rng;
use trioduel_engine::{Character, GenerationConfig, Mode, Team, TeamError};
use trioduel_evaluator::team_evaluator::TeamEvaluator;

pub use self::params::GeneratorParams;

pub mod optimized;
mod params;
pub mod random;
mod selection;
pub mod swap;

pub use self::selection::{is_team_repeated, repeat_penalty};

/// Precondition violations reported by the generators.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GenerationError {
    #[display("not enough characters to fill a team: needed {needed}, {available} available")]
    InsufficientCharacters { needed: usize, available: usize },
    #[display("{count} members are locked, but a team only has 3 slots")]
    TooManyLocked { count: usize },
    #[display("character '{id}' is locked more than once on the same side")]
    DuplicateLock { id: String },
    #[display("character '{id}' is locked on both sides while duplicates are disallowed")]
    ConflictingLocks { id: String },
    #[display("slot index {index} is out of range for a team of {len}")]
    SlotOutOfRange { index: usize, len: usize },
    #[display("no pair of candidate teams without shared members was found")]
    NoDisjointPair,
    #[display("invalid team: {_0}")]
    InvalidTeam(TeamError),
}

impl From<TeamError> for GenerationError {
    fn from(err: TeamError) -> Self {
        Self::InvalidTeam(err)
    }
}

/// The two teams produced by one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPair {
    pub team_a: Team,
    pub team_b: Team,
}

/// Generates a pair of teams with the strategy selected by `config.mode`.
pub fn generate_teams<E, R>(
    roster: &[Character],
    config: &GenerationConfig,
    evaluator: &E,
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<TeamPair, GenerationError>
where
    E: TeamEvaluator + ?Sized,
    R: Rng + ?Sized,
{
    match config.mode {
        Mode::Random => random::generate_random_teams(roster, config, params, rng),
        Mode::Optimized => optimized::generate_optimized_teams(roster, config, evaluator, params),
    }
}
