//! Skill ratings for duel players.
//!
//! This crate provides:
//!
//! - **Elo updates**: Compute both players' new ratings from a binary match outcome
//! - **Standings**: Per-player rating and win/loss record, updated one match at a time
//!
//! # Modules
//!
//! - [`elo`]: Expected scores and rating updates with a fixed K-factor of 24
//! - [`standing`]: Player standings built on top of the Elo update
//!
//! # Examples
//!
//! ## Updating ratings
//!
//! ```
//! use trioduel_rating::elo::calculate_elo;
//!
//! let update = calculate_elo(1000, 1000, 1, 0).unwrap();
//! assert_eq!(update.rating_a, 1012);
//! assert_eq!(update.rating_b, 988);
//! ```
//!
//! ## Recording a match
//!
//! ```
//! use trioduel_rating::{elo::MatchOutcome, standing::PlayerStanding};
//!
//! let mut alice = PlayerStanding::default();
//! let mut bob = PlayerStanding::default();
//! PlayerStanding::record_match(&mut alice, &mut bob, MatchOutcome::BWins);
//! assert_eq!((alice.wins, alice.losses), (0, 1));
//! assert!(bob.rating > alice.rating);
//! ```

pub mod elo;
pub mod standing;
