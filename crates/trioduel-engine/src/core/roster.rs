use serde::{Deserialize, Serialize};

use super::character::Character;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("character '{id}' not found in roster")]
pub struct RosterLookupError {
    pub id: String,
}

/// The full character roster document.
///
/// The roster is loaded once and never mutated. Character order is meaningful:
/// it is the tiebreak used wherever characters are ranked by score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub game: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub characters: Vec<Character>,
}

impl Roster {
    /// Creates a roster with no metadata.
    #[must_use]
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            characters,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Like [`Self::get`], but reports a missing id as an error.
    pub fn resolve(&self, id: &str) -> Result<&Character, RosterLookupError> {
        self.get(id).ok_or_else(|| RosterLookupError { id: id.to_owned() })
    }

    /// Resolves every id in order, failing on the first unknown one.
    pub fn resolve_all<I, S>(&self, ids: I) -> Result<Vec<Character>, RosterLookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| self.resolve(id.as_ref()).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_JSON: &str = r#"{
        "schema_version": 2,
        "game": "duel",
        "characters": [
            {
                "id": "a",
                "name": "Alpha",
                "series": "Test",
                "availability": { "type": "base", "source": "launch" },
                "heuristics": {
                    "archetype": "rushdown",
                    "assist_profile": "rush",
                    "synergy_tags": ["entry"],
                    "team_roles": ["point"],
                    "difficulty": 1
                }
            },
            {
                "id": "b",
                "name": "Bravo",
                "series": "Test",
                "availability": { "type": "dlc", "source": "pass", "pass": 1 },
                "is_dlc": true,
                "heuristics": {
                    "archetype": "zoner",
                    "assist_profile": "beam",
                    "synergy_tags": ["beam", "projectile"],
                    "team_roles": ["anchor"],
                    "difficulty": 3
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_roster_document() {
        let roster: Roster = serde_json::from_str(ROSTER_JSON).unwrap();
        assert_eq!(roster.schema_version, 2);
        assert_eq!(roster.characters().len(), 2);
        assert_eq!(roster.characters()[1].availability.pass, Some(1));
        assert!(roster.characters()[1].is_dlc);
    }

    #[test]
    fn test_resolve_known_and_unknown_ids() {
        let roster: Roster = serde_json::from_str(ROSTER_JSON).unwrap();
        assert_eq!(roster.resolve("b").unwrap().name, "Bravo");

        let err = roster.resolve("zeta").unwrap_err();
        assert_eq!(err.id, "zeta");
        assert!(err.to_string().contains("zeta"));
    }

    #[test]
    fn test_resolve_all_preserves_order() {
        let roster: Roster = serde_json::from_str(ROSTER_JSON).unwrap();
        let members = roster.resolve_all(["b", "a"]).unwrap();
        let ids: Vec<_> = members.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);

        assert!(roster.resolve_all(["a", "missing"]).is_err());
    }
}
