use rand::{Rng, seq::IndexedRandom as _};
use trioduel_engine::{Character, RecentTeams, TEAM_SIZE, Team, TeamKey, TeamSlot};

use crate::GenerationError;

/// Returns `true` if the id set of `members` equals any roster in `recent`.
///
/// Member order is irrelevant.
///
/// # Example
///
/// ```
/// use trioduel_engine::{RecentTeams, TeamKey};
/// use trioduel_generator::is_team_repeated;
/// # use trioduel_engine::{Availability, Character, Heuristics};
/// # fn character(id: &str) -> Character {
/// #     Character {
/// #         id: id.to_owned(),
/// #         name: id.to_owned(),
/// #         series: "Test".to_owned(),
/// #         availability: Availability { kind: "base".into(), source: "test".into(), pass: None },
/// #         is_dlc: false,
/// #         heuristics: Heuristics {
/// #             archetype: "balanced".into(),
/// #             assist_profile: "rush".into(),
/// #             synergy_tags: vec![],
/// #             team_roles: vec![],
/// #             difficulty: 1.0,
/// #         },
/// #     }
/// # }
///
/// let recent = RecentTeams::from_keys([TeamKey::from_ids(["a", "b", "c"])]);
/// let members = ["c", "a", "b"].map(character);
/// assert!(is_team_repeated(&members, &recent));
/// ```
#[must_use]
pub fn is_team_repeated(members: &[Character], recent: &RecentTeams) -> bool {
    !recent.is_empty() && recent.contains(&TeamKey::from_members(members))
}

/// Penalty to pass to the scorer for `members`: `penalty` if repeated, else zero.
#[must_use]
pub fn repeat_penalty(members: &[Character], recent: &RecentTeams, penalty: f32) -> f32 {
    if is_team_repeated(members, recent) {
        penalty
    } else {
        0.0
    }
}

/// Extracts the locked members of a side, in slot order.
pub(crate) fn locked_members(slots: &[TeamSlot]) -> Result<Vec<Character>, GenerationError> {
    let locked: Vec<Character> = slots
        .iter()
        .filter(|slot| slot.locked)
        .map(|slot| slot.character.clone())
        .collect();
    if locked.len() > TEAM_SIZE {
        return Err(GenerationError::TooManyLocked {
            count: locked.len(),
        });
    }
    for (i, member) in locked.iter().enumerate() {
        if locked[..i].iter().any(|m| m.same_as(member)) {
            return Err(GenerationError::DuplicateLock {
                id: member.id.clone(),
            });
        }
    }
    Ok(locked)
}

/// Fails if both sides lock the same character while duplicates are disallowed.
pub(crate) fn check_lock_conflicts(
    locked_a: &[Character],
    locked_b: &[Character],
    no_duplicates: bool,
) -> Result<(), GenerationError> {
    if !no_duplicates {
        return Ok(());
    }
    match locked_a
        .iter()
        .find(|a| locked_b.iter().any(|b| a.same_as(b)))
    {
        Some(shared) => Err(GenerationError::ConflictingLocks {
            id: shared.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Completes a team: `locked` first, then uniform picks without replacement
/// from the roster characters that are neither locked nor `disallowed`.
pub(crate) fn fill_team<F, R>(
    locked: &[Character],
    roster: &[Character],
    disallowed: F,
    rng: &mut R,
) -> Result<Team, GenerationError>
where
    F: Fn(&str) -> bool,
    R: Rng + ?Sized,
{
    let needed = TEAM_SIZE - locked.len();
    let available: Vec<&Character> = roster
        .iter()
        .filter(|c| !disallowed(&c.id) && !locked.iter().any(|l| l.same_as(c)))
        .collect();
    if available.len() < needed {
        return Err(GenerationError::InsufficientCharacters {
            needed,
            available: available.len(),
        });
    }
    let picked = available.choose_multiple(rng, needed).map(|&c| c.clone());
    let team = Team::from_members(locked.iter().cloned().chain(picked))?;
    Ok(team)
}
