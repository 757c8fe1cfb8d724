//! Uniform random team assembly.
//!
//! Side A is drawn first, then side B. Each side keeps its locked members as a
//! prefix and fills the remaining slots by sampling without replacement. When
//! duplicates across teams are disallowed, side A also skips side B's locked
//! members and side B skips everything already on side A.
//!
//! With `avoid_recent_teams`, a draw where either team repeats its side's
//! history is discarded and redrawn, up to
//! [`GeneratorParams::max_random_attempts`] draws in total. If every draw
//! repeats, the last one is returned.

use rand::Rng;
use trioduel_engine::{Character, GenerationConfig};

use crate::{
    GenerationError, GeneratorParams, TeamPair,
    selection::{check_lock_conflicts, fill_team, is_team_repeated, locked_members},
};

/// Draws two random teams.
pub fn generate_random_teams<R>(
    roster: &[Character],
    config: &GenerationConfig,
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<TeamPair, GenerationError>
where
    R: Rng + ?Sized,
{
    let no_duplicates = config.rules.no_duplicates_across_teams;
    let locked_a = locked_members(&config.side_a.slots)?;
    let locked_b = locked_members(&config.side_b.slots)?;
    check_lock_conflicts(&locked_a, &locked_b, no_duplicates)?;

    let mut attempt = 0;
    loop {
        attempt += 1;
        let team_a = fill_team(
            &locked_a,
            roster,
            |id| no_duplicates && locked_b.iter().any(|c| c.id == id),
            rng,
        )?;
        let team_b = fill_team(
            &locked_b,
            roster,
            |id| no_duplicates && team_a.contains_id(id),
            rng,
        )?;

        let repeated = config.rules.avoid_recent_teams
            && (is_team_repeated(team_a.members(), &config.side_a.recent_teams)
                || is_team_repeated(team_b.members(), &config.side_b.recent_teams));
        if !repeated {
            log::debug!("random teams drawn after {attempt} attempt(s)");
            return Ok(TeamPair { team_a, team_b });
        }
        if attempt >= params.max_random_attempts {
            log::warn!(
                "every one of {attempt} random draws repeated a recent team; keeping the last draw"
            );
            return Ok(TeamPair { team_a, team_b });
        }
    }
}
