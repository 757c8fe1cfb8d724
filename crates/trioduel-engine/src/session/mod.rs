//! Per-call generation inputs and the history a caller threads between calls.
//!
//! - [`GenerationConfig`] - Everything a generation call needs besides the roster
//! - [`RecentTeams`] - Bounded, most-recent-first history of fielded rosters
//! - [`GenerationSeed`] - Seed for reproducible random generation
//!
//! Nothing here is global: callers own these values and pass them in and out
//! explicitly.

pub use self::{config::*, recent_teams::*, seed::*};

mod config;
mod recent_teams;
mod seed;
