//! Synergy scoring for characters and teams.
//!
//! This crate implements a two-level evaluation architecture:
//!
//! 1. **Tag Mapping** ([`tag_mapping`]) - Translates a character's free-form synergy
//!    tags into weighted [`CanonicalTag`](tag_mapping::CanonicalTag)s.
//!
//! 2. **Team Evaluation** ([`team_evaluator`]) - Scores a single character or an
//!    assembled team from those weighted tags and returns a labeled breakdown.
//!
//! # Architecture
//!
//! ```text
//! Team Generator (trioduel-generator)
//!     ↓ uses
//! Team Evaluation (score character / team)
//!     ↓ uses
//! Tag Mapping (raw tags → weighted canonical tags)
//! ```
//!
//! # Design Principles
//!
//! ## Closed Taxonomy
//!
//! Roster data carries arbitrary tag strings. Scoring only understands six canonical
//! tags; a fixed lookup table folds a handful of common non-canonical tags into them
//! at reduced weight, and everything else is ignored.
//!
//! ## Caller-Owned Repetition Policy
//!
//! Team scores accept a `recent_penalty` computed by the caller. The evaluator never
//! looks at match history, which keeps taxonomy scoring independent of the rules
//! that decide when a roster counts as "repeated".
//!
//! # Example
//!
//! ```rust,no_run
//! use trioduel_evaluator::team_evaluator::{SynergyEvaluator, TeamEvaluator};
//! # let members: Vec<trioduel_engine::Character> = todo!();
//!
//! let evaluator = SynergyEvaluator::default();
//! let result = evaluator.score_team(&members, 0.0);
//! println!("score = {:.2}", result.score());
//! ```
//!
//! # Current Limitations
//!
//! - **Linear model**: Scores are weighted sums of tag totals; tag interactions
//!   (e.g. "lockdown is worth more next to damage") are not modeled.
//! - **Hand-picked weights**: Multipliers are fixed defaults, overridable through
//!   [`SynergyWeights`](team_evaluator::SynergyWeights) but not learned from match
//!   outcomes.

pub mod tag_mapping;
pub mod team_evaluator;
