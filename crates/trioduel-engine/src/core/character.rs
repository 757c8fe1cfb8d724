use serde::{Deserialize, Serialize};

/// A playable character as supplied by the roster.
///
/// Characters are read-only for the lifetime of the process. Identity is by
/// [`Character::id`]; two characters with the same id are the same character
/// regardless of their other fields.
///
/// # Example
///
/// ```
/// use trioduel_engine::Character;
///
/// let json = r#"{
///     "id": "ryu",
///     "name": "Ryu",
///     "series": "Street Fighter",
///     "availability": { "type": "base", "source": "launch" },
///     "heuristics": {
///         "archetype": "shoto",
///         "assist_profile": "beam",
///         "synergy_tags": ["entry", "projectile"],
///         "team_roles": ["point"],
///         "difficulty": 2
///     }
/// }"#;
/// let character: Character = serde_json::from_str(json).unwrap();
/// assert_eq!(character.id, "ryu");
/// assert!(!character.is_dlc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub series: String,
    pub availability: Availability,
    #[serde(default)]
    pub is_dlc: bool,
    pub heuristics: Heuristics,
}

/// How a character is obtained. Not used by scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<u32>,
}

/// Hand-curated play-style hints attached to each character.
///
/// `synergy_tags` is free-form: it may contain duplicates and values outside
/// the canonical synergy taxonomy. Unknown values are ignored by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heuristics {
    pub archetype: String,
    pub assist_profile: String,
    #[serde(default)]
    pub synergy_tags: Vec<String>,
    #[serde(default)]
    pub team_roles: Vec<String>,
    pub difficulty: f32,
}

impl Character {
    /// Returns `true` if `self` and `other` refer to the same character.
    #[must_use]
    pub fn same_as(&self, other: &Character) -> bool {
        self.id == other.id
    }
}
