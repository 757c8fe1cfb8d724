//! Single-slot local search.
//!
//! [`smart_swap`] tries every eligible roster character in one slot and keeps
//! the replacement with the strictly highest team score. Only that slot can
//! change; the other members stay where they are.
//!
//! Candidate teams are scored with their own repetition penalty, while the
//! unmodified team is scored without one. A repeated candidate therefore has
//! to beat the current team by more than the penalty to be chosen, and the
//! current team is kept even if it repeats recent history itself.

use trioduel_engine::{Character, RecentTeams, Team};
use trioduel_evaluator::team_evaluator::TeamEvaluator;

use crate::{GenerationError, GeneratorParams, selection::repeat_penalty};

/// What a swap must respect besides the team itself.
#[derive(Debug, Clone, Copy)]
pub struct SwapConstraints<'a> {
    /// History of the side being edited.
    pub recent_teams: &'a RecentTeams,
    /// Disallow characters fielded by `other_team`.
    pub no_duplicates: bool,
    pub other_team: Option<&'a Team>,
}

/// Replaces the member at `slot_index` with the roster character that
/// maximizes the team score, or returns the team unchanged if nothing beats
/// it.
pub fn smart_swap<E>(
    team: &Team,
    slot_index: usize,
    roster: &[Character],
    constraints: &SwapConstraints<'_>,
    evaluator: &E,
    params: &GeneratorParams,
) -> Result<Team, GenerationError>
where
    E: TeamEvaluator + ?Sized,
{
    let len = team.members().len();
    if slot_index >= len {
        return Err(GenerationError::SlotOutOfRange {
            index: slot_index,
            len,
        });
    }

    let disallowed = |c: &Character| {
        team.contains_id(&c.id)
            || (constraints.no_duplicates
                && constraints.other_team.is_some_and(|o| o.contains_id(&c.id)))
    };

    let mut best = team.clone();
    let mut best_score = evaluator.score_team(team.members(), 0.0).score();
    for candidate in roster.iter().filter(|&c| !disallowed(c)) {
        let next = team.with_member_replaced(slot_index, candidate.clone())?;
        let penalty = repeat_penalty(
            next.members(),
            constraints.recent_teams,
            params.repeat_penalty,
        );
        let score = evaluator.score_team(next.members(), penalty).score();
        if score > best_score {
            best = next;
            best_score = score;
        }
    }
    if best == *team {
        log::debug!("smart swap kept slot {slot_index}: no candidate improved {best_score:.2}");
    } else {
        log::debug!(
            "smart swap replaced slot {slot_index} with '{}' ({best_score:.2})",
            best.members()[slot_index].id
        );
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use trioduel_engine::TeamKey;
    use trioduel_evaluator::team_evaluator::SynergyEvaluator;

    use super::*;
    use crate::test_util::{character, roster};

    fn team_of(roster: &[Character], indices: [usize; 3]) -> Team {
        Team::from_members(indices.map(|i| roster[i].clone())).unwrap()
    }

    fn swap(
        team: &Team,
        slot_index: usize,
        roster: &[Character],
        constraints: &SwapConstraints<'_>,
    ) -> Result<Team, GenerationError> {
        smart_swap(
            team,
            slot_index,
            roster,
            constraints,
            &SynergyEvaluator::default(),
            &GeneratorParams::DEFAULT,
        )
    }

    fn unpenalized(team: &Team) -> f32 {
        SynergyEvaluator::default()
            .score_team(team.members(), 0.0)
            .score()
    }

    #[test]
    fn test_picks_best_replacement_for_slot() {
        let roster = vec![
            character("a", "x", &["entry"], &[]),
            character("b", "x", &["entry"], &[]),
            character("weak", "x", &[], &[]),
            character("mid", "x", &["beam"], &[]),
            character("best", "y", &["entry", "damage"], &[]),
        ];
        let team = team_of(&roster, [0, 1, 2]);
        let recent = RecentTeams::new();
        let constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: true,
            other_team: None,
        };
        let swapped = swap(&team, 2, &roster, &constraints).unwrap();
        assert_eq!(swapped.ids().collect::<Vec<_>>(), ["a", "b", "best"]);
    }

    #[test]
    fn test_never_lowers_unpenalized_score() {
        let roster = roster(14);
        let other = team_of(&roster, [10, 11, 12]);
        let mut recent = RecentTeams::new();
        recent.register(TeamKey::from_ids(["c0", "c1", "c3"]));
        let constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: true,
            other_team: Some(&other),
        };
        for start in [[0, 1, 2], [3, 4, 5], [6, 7, 8], [2, 9, 13]] {
            let team = team_of(&roster, start);
            for slot in 0..3 {
                let swapped = swap(&team, slot, &roster, &constraints).unwrap();
                assert!(unpenalized(&swapped) >= unpenalized(&team));
                for (i, (before, after)) in team.ids().zip(swapped.ids()).enumerate() {
                    if i != slot {
                        assert_eq!(before, after);
                    }
                }
                assert!(!swapped.shares_member_with(&other));
            }
        }
    }

    #[test]
    fn test_other_team_is_excluded_only_without_duplicates() {
        let roster = vec![
            character("a", "x", &[], &[]),
            character("b", "x", &[], &[]),
            character("c", "x", &[], &[]),
            character("star", "x", &["entry", "damage", "lockdown"], &[]),
            character("d", "x", &[], &[]),
            character("e", "x", &[], &[]),
        ];
        let team = team_of(&roster, [0, 1, 2]);
        let other = team_of(&roster, [3, 4, 5]);
        let recent = RecentTeams::new();

        let mut constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: true,
            other_team: Some(&other),
        };
        assert_eq!(swap(&team, 0, &roster, &constraints).unwrap(), team);

        constraints.no_duplicates = false;
        let swapped = swap(&team, 0, &roster, &constraints).unwrap();
        assert_eq!(swapped.members()[0].id, "star");
    }

    #[test]
    fn test_penalty_applies_to_candidates_but_not_baseline() {
        let roster = vec![
            character("a", "x", &["entry"], &[]),
            character("b", "x", &["entry"], &[]),
            character("c", "x", &[], &[]),
            // +3.0 core
            character("d", "x", &["entry"], &[]),
            // +1.2 beam
            character("e", "x", &["beam"], &[]),
            // same score as "c"
            character("f", "x", &[], &[]),
        ];
        let team = team_of(&roster, [0, 1, 2]);

        // Replacing "c" with "d" repeats history but still gains 3.0 - 1.5.
        let recent = RecentTeams::from_keys([TeamKey::from_ids(["a", "b", "d"])]);
        let constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: true,
            other_team: None,
        };
        let swapped = swap(&team, 2, &roster, &constraints).unwrap();
        assert_eq!(swapped.members()[2].id, "d");

        // With only "e" available, its 1.2 gain is eaten by the penalty.
        let small = [roster[0].clone(), roster[1].clone(), roster[2].clone(), roster[4].clone()];
        let recent = RecentTeams::from_keys([TeamKey::from_ids(["a", "b", "e"])]);
        let constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: true,
            other_team: None,
        };
        assert_eq!(swap(&team, 2, &small, &constraints).unwrap(), team);

        // The current team repeats history but is scored without penalty, so
        // an equally strong fresh roster does not replace it.
        let recent = RecentTeams::from_keys([TeamKey::from_ids(["a", "b", "c"])]);
        let constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: true,
            other_team: None,
        };
        let with_f = [roster[0].clone(), roster[1].clone(), roster[2].clone(), roster[5].clone()];
        assert_eq!(swap(&team, 2, &with_f, &constraints).unwrap(), team);
    }

    #[test]
    fn test_slot_out_of_range() {
        let roster = roster(6);
        let team = team_of(&roster, [0, 1, 2]);
        let recent = RecentTeams::new();
        let constraints = SwapConstraints {
            recent_teams: &recent,
            no_duplicates: false,
            other_team: None,
        };
        assert_eq!(
            swap(&team, 3, &roster, &constraints),
            Err(GenerationError::SlotOutOfRange { index: 3, len: 3 })
        );
    }
}
