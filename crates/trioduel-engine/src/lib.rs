//! Data model for two-team duel sessions.
//!
//! This crate defines the values that flow through team generation, scoring and
//! rating updates. It performs no I/O and holds no state between calls:
//!
//! - [`Character`] - An immutable roster entry with its scoring heuristics
//! - [`Roster`] - The ordered, id-unique character list loaded once per process
//! - [`Team`] - Exactly three distinct characters fielded by one side
//! - [`TeamKey`] - Order-independent identity of a team (its sorted member ids)
//! - [`TeamSlot`] - A team member plus the "locked" flag used to pin it across rerolls
//! - [`GenerationConfig`] - Mode, rules and per-side locks/history for a generation call
//! - [`RecentTeams`] - The last few rosters a side has fielded
//! - [`GenerationSeed`] - Seed for deterministic random generation
//!
//! # Session Flow
//!
//! 1. Load the [`Roster`]
//! 2. Build a [`GenerationConfig`] from the caller's session (locks, history, rules)
//! 3. Generate two teams (see the `trioduel-generator` crate)
//! 4. After the match, register both teams in their side's [`RecentTeams`]
//!
//! # Example
//!
//! ```
//! use trioduel_engine::{RecentTeams, TeamKey};
//!
//! let mut recent = RecentTeams::new();
//! recent.register(TeamKey::from_ids(["ryu", "ken", "chun"]));
//!
//! // Member order does not matter for repetition checks
//! assert!(recent.contains(&TeamKey::from_ids(["chun", "ryu", "ken"])));
//! ```

pub use self::{core::*, session::*};

pub mod core;
pub mod session;
