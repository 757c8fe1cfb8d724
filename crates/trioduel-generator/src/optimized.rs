//! Shortlist-and-combine search for a strong, balanced pair of teams.
//!
//! # Algorithm
//!
//! 1. **Shortlist** - Rank the roster by individual character score and keep the
//!    top [`GeneratorParams::shortlist_size`] (stable sort, roster order breaks ties)
//! 2. **Combinations** - Enumerate every unordered triple of shortlist positions
//!    (220 for a shortlist of 12)
//! 3. **Realization** - For each side and each triple, build a team from the side's
//!    locked members, then the triple's unused members, then the shortlist as
//!    backfill
//! 4. **Ranking** - Score every realized team, subtracting
//!    [`GeneratorParams::repeat_penalty`] from rosters in the side's recent history,
//!    and keep the top [`GeneratorParams::top_candidates`] per side
//! 5. **Pairing** - Over the cross product of both candidate lists, skip pairs that
//!    share a member (when duplicates are disallowed) and keep the pair maximizing
//!    [`GeneratorParams::pair_objective`]
//!
//! With the default parameters this is at most 2 × 220 team scores and 30 × 30
//! pair evaluations, independent of roster size beyond the shortlist pass.

use std::cmp::Ordering;

use trioduel_engine::{Character, GenerationConfig, RecentTeams, TEAM_SIZE, Team};
use trioduel_evaluator::team_evaluator::TeamEvaluator;

use crate::{
    GenerationError, GeneratorParams, TeamPair,
    selection::{check_lock_conflicts, locked_members, repeat_penalty},
};

/// A realized team and its (penalized) score.
#[derive(Debug, Clone)]
struct Candidate {
    team: Team,
    score: f32,
}

fn by_score_desc(a: f32, b: f32) -> Ordering {
    b.total_cmp(&a)
}

/// Top `size` characters by individual score, best first.
fn shortlist<'a, E>(roster: &'a [Character], evaluator: &E, size: usize) -> Vec<&'a Character>
where
    E: TeamEvaluator + ?Sized,
{
    let mut scored: Vec<_> = roster
        .iter()
        .map(|c| (c, evaluator.score_character(c).score()))
        .collect();
    scored.sort_by(|a, b| by_score_desc(a.1, b.1));
    scored.into_iter().take(size).map(|(c, _)| c).collect()
}

/// Every `i < j < k` index triple over `len` items.
fn combinations_of_three(len: usize) -> impl Iterator<Item = [usize; TEAM_SIZE]> {
    (0..len).flat_map(move |i| {
        (i + 1..len).flat_map(move |j| (j + 1..len).map(move |k| [i, j, k]))
    })
}

fn realize(
    locked: &[Character],
    combo: [usize; TEAM_SIZE],
    shortlist: &[&Character],
) -> Result<Team, GenerationError> {
    let mut members: Vec<Character> = locked.to_vec();
    let picks = combo.iter().map(|&i| shortlist[i]).chain(shortlist.iter().copied());
    for c in picks {
        if members.len() >= TEAM_SIZE {
            break;
        }
        if !members.iter().any(|m| m.same_as(c)) {
            members.push(c.clone());
        }
    }
    Team::from_members(members).map_err(GenerationError::from)
}

fn rank_candidates<E>(
    locked: &[Character],
    shortlist: &[&Character],
    recent: &RecentTeams,
    evaluator: &E,
    params: &GeneratorParams,
) -> Result<Vec<Candidate>, GenerationError>
where
    E: TeamEvaluator + ?Sized,
{
    let mut candidates = combinations_of_three(shortlist.len())
        .map(|combo| {
            let team = realize(locked, combo, shortlist)?;
            let penalty = repeat_penalty(team.members(), recent, params.repeat_penalty);
            let score = evaluator.score_team(team.members(), penalty).score();
            Ok(Candidate { team, score })
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;
    candidates.sort_by(|a, b| by_score_desc(a.score, b.score));
    candidates.truncate(params.top_candidates);
    Ok(candidates)
}

/// Searches for the best balanced pair of teams.
///
/// Locked members of each side are always part of that side's team. The
/// search fails with [`GenerationError::NoDisjointPair`] when duplicates are
/// disallowed and every candidate pair shares a member.
pub fn generate_optimized_teams<E>(
    roster: &[Character],
    config: &GenerationConfig,
    evaluator: &E,
    params: &GeneratorParams,
) -> Result<TeamPair, GenerationError>
where
    E: TeamEvaluator + ?Sized,
{
    let no_duplicates = config.rules.no_duplicates_across_teams;
    let locked_a = locked_members(&config.side_a.slots)?;
    let locked_b = locked_members(&config.side_b.slots)?;
    check_lock_conflicts(&locked_a, &locked_b, no_duplicates)?;

    let shortlist = shortlist(roster, evaluator, params.shortlist_size);
    if shortlist.len() < TEAM_SIZE {
        return Err(GenerationError::InsufficientCharacters {
            needed: TEAM_SIZE,
            available: shortlist.len(),
        });
    }

    let top_a = rank_candidates(
        &locked_a,
        &shortlist,
        &config.side_a.recent_teams,
        evaluator,
        params,
    )?;
    let top_b = rank_candidates(
        &locked_b,
        &shortlist,
        &config.side_b.recent_teams,
        evaluator,
        params,
    )?;

    let mut best: Option<(&Candidate, &Candidate, f32)> = None;
    let mut evaluated = 0;
    for a in &top_a {
        for b in &top_b {
            if no_duplicates && a.team.shares_member_with(&b.team) {
                continue;
            }
            evaluated += 1;
            let objective = params.pair_objective(a.score, b.score);
            if best.is_none_or(|(_, _, o)| objective > o) {
                best = Some((a, b, objective));
            }
        }
    }

    let (a, b, objective) = best.ok_or(GenerationError::NoDisjointPair)?;
    log::debug!(
        "optimized search: {} x {} candidates, {evaluated} pairs evaluated, best objective {objective:.2} ({:.2} vs {:.2})",
        top_a.len(),
        top_b.len(),
        a.score,
        b.score,
    );
    Ok(TeamPair {
        team_a: a.team.clone(),
        team_b: b.team.clone(),
    })
}
