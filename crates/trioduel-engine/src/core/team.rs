use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::character::Character;

/// Number of characters fielded by each side.
pub const TEAM_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TeamError {
    #[display("team must have exactly {} members, got {len}", TEAM_SIZE)]
    WrongSize { len: usize },
    #[display("character '{id}' appears more than once in a team")]
    DuplicateMember { id: String },
    #[display("slot index {index} is out of range for a team of {}", TEAM_SIZE)]
    SlotOutOfRange { index: usize },
}

/// A full team: exactly [`TEAM_SIZE`] characters with distinct ids.
///
/// Member order is preserved as given. Generators place locked members first,
/// so the order carries the "pinned prefix" back to the caller.
///
/// # Example
///
/// ```
/// # use trioduel_engine::{Availability, Character, Heuristics, Team};
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
/// let team = Team::from_members([character("a"), character("b"), character("c")]).unwrap();
/// assert_eq!(team.ids().collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// // Duplicates and wrong sizes are rejected
/// assert!(Team::from_members([character("a"), character("a"), character("c")]).is_err());
/// assert!(Team::from_members([character("a")]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    members: ArrayVec<Character, TEAM_SIZE>,
}

impl Team {
    /// Builds a team, checking the size and id-uniqueness invariants.
    pub fn from_members<I>(members: I) -> Result<Self, TeamError>
    where
        I: IntoIterator<Item = Character>,
    {
        let mut buf = ArrayVec::new();
        let mut len = 0;
        for member in members {
            len += 1;
            if buf.iter().any(|m: &Character| m.same_as(&member)) {
                return Err(TeamError::DuplicateMember { id: member.id });
            }
            // Keep counting past capacity to report the real size
            let _ = buf.try_push(member);
        }
        if len != TEAM_SIZE {
            return Err(TeamError::WrongSize { len });
        }
        Ok(Self { members: buf })
    }

    #[must_use]
    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(|m| m.id.as_str())
    }

    #[must_use]
    pub fn key(&self) -> TeamKey {
        TeamKey::from_members(&self.members)
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Returns `true` if any member of `self` also plays for `other`.
    #[must_use]
    pub fn shares_member_with(&self, other: &Team) -> bool {
        self.members.iter().any(|m| other.contains_id(&m.id))
    }

    /// Returns a copy of this team with the member at `index` replaced.
    pub fn with_member_replaced(
        &self,
        index: usize,
        replacement: Character,
    ) -> Result<Self, TeamError> {
        if index >= self.members.len() {
            return Err(TeamError::SlotOutOfRange { index });
        }
        let duplicated = self
            .members
            .iter()
            .enumerate()
            .any(|(i, m)| i != index && m.same_as(&replacement));
        if duplicated {
            return Err(TeamError::DuplicateMember { id: replacement.id });
        }
        let mut next = self.clone();
        next.members[index] = replacement;
        Ok(next)
    }
}

/// Order-independent identity of a team roster.
///
/// Holds the member ids sorted ascending, so two keys are equal exactly when
/// the id sets are equal. Serialized as a plain list of ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TeamKey(Vec<String>);

impl TeamKey {
    #[must_use]
    pub fn from_members(members: &[Character]) -> Self {
        Self::from_ids(members.iter().map(|m| m.id.as_str()))
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().map(Into::into).collect::<Vec<_>>().into()
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TeamKey {
    fn from(mut ids: Vec<String>) -> Self {
        ids.sort();
        Self(ids)
    }
}

impl From<TeamKey> for Vec<String> {
    fn from(key: TeamKey) -> Self {
        key.0
    }
}

/// A team member as presented to the player, with its lock state.
///
/// Locked slots are handed back to the generator, which keeps those members
/// in place and only fills the remaining slots.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSlot {
    pub character: Character,
    pub locked: bool,
}

impl TeamSlot {
    #[must_use]
    pub fn unlocked(character: Character) -> Self {
        Self {
            character,
            locked: false,
        }
    }

    #[must_use]
    pub fn locked(character: Character) -> Self {
        Self {
            character,
            locked: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Availability, Heuristics};

    fn character(id: &str) -> Character {
        Character {
            id: id.to_owned(),
            name: id.to_uppercase(),
            series: "Test".to_owned(),
            availability: Availability {
                kind: "base".to_owned(),
                source: "test".to_owned(),
                pass: None,
            },
            is_dlc: false,
            heuristics: Heuristics {
                archetype: "balanced".to_owned(),
                assist_profile: "rush".to_owned(),
                synergy_tags: vec![],
                team_roles: vec![],
                difficulty: 1.0,
            },
        }
    }

    fn team(ids: [&str; 3]) -> Team {
        Team::from_members(ids.map(character)).unwrap()
    }

    #[test]
    fn test_from_members_rejects_wrong_size() {
        let err = Team::from_members([character("a"), character("b")]).unwrap_err();
        assert_eq!(err, TeamError::WrongSize { len: 2 });

        let err = Team::from_members(["a", "b", "c", "d"].map(character)).unwrap_err();
        assert_eq!(err, TeamError::WrongSize { len: 4 });
    }

    #[test]
    fn test_from_members_rejects_duplicates() {
        let err = Team::from_members(["a", "b", "a"].map(character)).unwrap_err();
        assert_eq!(err, TeamError::DuplicateMember { id: "a".to_owned() });
    }

    #[test]
    fn test_key_is_order_independent() {
        assert_eq!(team(["a", "b", "c"]).key(), team(["c", "a", "b"]).key());
        assert_ne!(team(["a", "b", "c"]).key(), team(["a", "b", "d"]).key());
    }

    #[test]
    fn test_key_serializes_as_sorted_id_list() {
        let key = TeamKey::from_ids(["c", "a", "b"]);
        assert_eq!(serde_json::to_string(&key).unwrap(), r#"["a","b","c"]"#);

        let parsed: TeamKey = serde_json::from_str(r#"["z","x","y"]"#).unwrap();
        assert_eq!(parsed.ids(), ["x", "y", "z"]);
    }

    #[test]
    fn test_shares_member_with() {
        assert!(team(["a", "b", "c"]).shares_member_with(&team(["c", "d", "e"])));
        assert!(!team(["a", "b", "c"]).shares_member_with(&team(["d", "e", "f"])));
    }

    #[test]
    fn test_with_member_replaced() {
        let original = team(["a", "b", "c"]);
        let replaced = original.with_member_replaced(1, character("x")).unwrap();
        assert_eq!(replaced.ids().collect::<Vec<_>>(), ["a", "x", "c"]);

        // Replacing a member with itself is allowed
        assert!(original.with_member_replaced(1, character("b")).is_ok());

        assert_eq!(
            original.with_member_replaced(0, character("c")).unwrap_err(),
            TeamError::DuplicateMember { id: "c".to_owned() }
        );
        assert_eq!(
            original.with_member_replaced(3, character("x")).unwrap_err(),
            TeamError::SlotOutOfRange { index: 3 }
        );
    }
}
