//! Character and team scoring.
//!
//! Both scores are weighted sums over the canonical tag totals produced by
//! [`map_synergy_tags`](crate::tag_mapping::map_synergy_tags):
//!
//! ```text
//! character = 2.0·(entry + lockdown + damage) + 0.8·beam + 0.8·pressure + 0.6·mobility
//! team      = 3.0·(entry + lockdown + damage) + 1.2·beam + 1.2·pressure
//!           + 0.6·distinct_archetypes + 0.4·distinct_roles − recent_penalty
//! ```
//!
//! Every score comes with a [`ScoreBreakdown`] whose entries always sum to
//! the score. The team penalty is recorded as a negative `recentPenalty`
//! entry.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize, ser::SerializeMap as _};
use trioduel_engine::Character;

use crate::tag_mapping::{CanonicalTag, TagTotals, TagWeight, map_synergy_tags};

/// A named additive term of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreComponent {
    Core,
    Beam,
    Pressure,
    Mobility,
    Diversity,
    RoleDiversity,
    RecentPenalty,
}

impl ScoreComponent {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Beam => "beam",
            Self::Pressure => "pressure",
            Self::Mobility => "mobility",
            Self::Diversity => "diversity",
            Self::RoleDiversity => "roleDiversity",
            Self::RecentPenalty => "recentPenalty",
        }
    }
}

impl fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered list of score components and their signed contributions.
///
/// Serialized as a JSON object keyed by component label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown(Vec<(ScoreComponent, f32)>);

impl ScoreBreakdown {
    fn push(&mut self, component: ScoreComponent, value: f32) {
        self.0.push((component, value));
    }

    #[must_use]
    pub fn get(&self, component: ScoreComponent) -> Option<f32> {
        self.0
            .iter()
            .find_map(|(c, v)| (*c == component).then_some(*v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreComponent, f32)> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all contributions.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.0.iter().map(|(_, v)| v).sum()
    }
}

impl Serialize for ScoreBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (component, value) in &self.0 {
            map.serialize_entry(component.label(), value)?;
        }
        map.end()
    }
}

/// Result of scoring a character or a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScore {
    score: f32,
    breakdown: ScoreBreakdown,
    tags: Vec<TagWeight>,
}

impl TeamScore {
    fn from_breakdown(breakdown: ScoreBreakdown, tags: Vec<TagWeight>) -> Self {
        Self {
            score: breakdown.total(),
            breakdown,
            tags,
        }
    }

    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    #[must_use]
    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    /// Every weighted tag that fed the score, in member then tag order.
    #[must_use]
    pub fn tags(&self) -> &[TagWeight] {
        &self.tags
    }
}

/// Multipliers for a single-character score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterWeights {
    pub core: f32,
    pub beam: f32,
    pub pressure: f32,
    pub mobility: f32,
}

impl CharacterWeights {
    pub const DEFAULT: Self = Self {
        core: 2.0,
        beam: 0.8,
        pressure: 0.8,
        mobility: 0.6,
    };
}

impl Default for CharacterWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Multipliers for a team score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamWeights {
    pub core: f32,
    pub beam: f32,
    pub pressure: f32,
    /// Per distinct archetype among members.
    pub diversity: f32,
    /// Per distinct team role across members.
    pub role_diversity: f32,
}

impl TeamWeights {
    pub const DEFAULT: Self = Self {
        core: 3.0,
        beam: 1.2,
        pressure: 1.2,
        diversity: 0.6,
        role_diversity: 0.4,
    };
}

impl Default for TeamWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// All scoring multipliers.
///
/// Missing fields fall back to the defaults when deserialized, so a weights
/// file only needs to list what it overrides:
///
/// ```
/// use trioduel_evaluator::team_evaluator::SynergyWeights;
///
/// let weights: SynergyWeights = serde_json::from_str(r#"{"team": {"beam": 2.0}}"#).unwrap();
/// assert!((weights.team.beam - 2.0).abs() < f32::EPSILON);
/// assert!((weights.team.core - 3.0).abs() < f32::EPSILON);
/// assert_eq!(weights.character, SynergyWeights::DEFAULT.character);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyWeights {
    pub character: CharacterWeights,
    pub team: TeamWeights,
}

impl SynergyWeights {
    pub const DEFAULT: Self = Self {
        character: CharacterWeights::DEFAULT,
        team: TeamWeights::DEFAULT,
    };
}

impl Default for SynergyWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scores characters and teams.
///
/// Implementations must be pure: identical inputs give identical results.
pub trait TeamEvaluator: fmt::Debug + Send + Sync {
    /// Scores a single character on its own merits.
    fn score_character(&self, character: &Character) -> TeamScore;

    /// Scores a group of characters fielded together.
    ///
    /// `recent_penalty` is subtracted from the score as-is. Any number of
    /// members is accepted.
    fn score_team(&self, members: &[Character], recent_penalty: f32) -> TeamScore;
}

/// The tag-based evaluator.
#[derive(Debug, Clone, Default)]
pub struct SynergyEvaluator {
    weights: SynergyWeights,
}

impl SynergyEvaluator {
    #[must_use]
    pub fn new(weights: SynergyWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &SynergyWeights {
        &self.weights
    }
}

fn core_total(totals: &TagTotals) -> f32 {
    totals.get(CanonicalTag::Entry)
        + totals.get(CanonicalTag::Lockdown)
        + totals.get(CanonicalTag::Damage)
}

#[expect(clippy::cast_precision_loss)]
fn distinct_count<'a, I>(values: I) -> f32
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().collect::<BTreeSet<_>>().len() as f32
}

impl TeamEvaluator for SynergyEvaluator {
    fn score_character(&self, character: &Character) -> TeamScore {
        let w = &self.weights.character;
        let tags = map_synergy_tags(&character.heuristics.synergy_tags);
        let totals = TagTotals::from_weights(&tags);

        let mut breakdown = ScoreBreakdown::default();
        breakdown.push(ScoreComponent::Core, core_total(&totals) * w.core);
        breakdown.push(ScoreComponent::Beam, totals.get(CanonicalTag::Beam) * w.beam);
        breakdown.push(
            ScoreComponent::Pressure,
            totals.get(CanonicalTag::Pressure) * w.pressure,
        );
        breakdown.push(
            ScoreComponent::Mobility,
            totals.get(CanonicalTag::Mobility) * w.mobility,
        );
        TeamScore::from_breakdown(breakdown, tags)
    }

    fn score_team(&self, members: &[Character], recent_penalty: f32) -> TeamScore {
        let w = &self.weights.team;
        let tags = map_synergy_tags(members.iter().flat_map(|m| &m.heuristics.synergy_tags));
        let totals = TagTotals::from_weights(&tags);
        let archetypes = distinct_count(members.iter().map(|m| m.heuristics.archetype.as_str()));
        let roles = distinct_count(
            members
                .iter()
                .flat_map(|m| &m.heuristics.team_roles)
                .map(String::as_str),
        );

        let mut breakdown = ScoreBreakdown::default();
        breakdown.push(ScoreComponent::Core, core_total(&totals) * w.core);
        breakdown.push(ScoreComponent::Beam, totals.get(CanonicalTag::Beam) * w.beam);
        breakdown.push(
            ScoreComponent::Pressure,
            totals.get(CanonicalTag::Pressure) * w.pressure,
        );
        breakdown.push(ScoreComponent::Diversity, archetypes * w.diversity);
        breakdown.push(ScoreComponent::RoleDiversity, roles * w.role_diversity);
        breakdown.push(ScoreComponent::RecentPenalty, -recent_penalty);
        TeamScore::from_breakdown(breakdown, tags)
    }
}

#[cfg(test)]
mod tests {
    use trioduel_engine::{Availability, Heuristics};

    use super::*;

    fn character(id: &str, archetype: &str, tags: &[&str], roles: &[&str]) -> Character {
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
                archetype: archetype.to_owned(),
                assist_profile: "rush".to_owned(),
                synergy_tags: tags.iter().map(|&t| t.to_owned()).collect(),
                team_roles: roles.iter().map(|&r| r.to_owned()).collect(),
                difficulty: 1.0,
            },
        }
    }

    fn seed_team() -> Vec<Character> {
        vec![
            character("ryu", "shoto", &["entry", "damage"], &["point"]),
            character("jill", "zoner", &["lockdown", "beam"], &["anchor"]),
            character("wolverine", "rushdown", &["pressure", "mobility"], &["point", "battery"]),
        ]
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    mod character_score {
        use super::*;

        #[test]
        fn test_no_tags_scores_zero() {
            let evaluator = SynergyEvaluator::default();
            let result = evaluator.score_character(&character("x", "a", &[], &[]));
            assert!(approx(result.score(), 0.0));
            assert!(result.tags().is_empty());
            assert_eq!(result.breakdown().iter().count(), 4);
        }

        #[test]
        fn test_component_multipliers() {
            let evaluator = SynergyEvaluator::default();
            let c = character("x", "a", &["entry", "damage", "beam", "trap", "mobility"], &[]);
            let result = evaluator.score_character(&c);
            let b = result.breakdown();
            // core: entry 1 + damage 1 + lockdown 0.5
            assert!(approx(b.get(ScoreComponent::Core).unwrap(), 5.0));
            assert!(approx(b.get(ScoreComponent::Beam).unwrap(), 0.8));
            assert!(approx(b.get(ScoreComponent::Pressure).unwrap(), 0.4));
            assert!(approx(b.get(ScoreComponent::Mobility).unwrap(), 0.6));
            assert!(approx(result.score(), 6.8));
            assert_eq!(b.get(ScoreComponent::Diversity), None);
        }

        #[test]
        fn test_deterministic_and_non_negative() {
            let evaluator = SynergyEvaluator::default();
            for c in seed_team() {
                let first = evaluator.score_character(&c);
                let second = evaluator.score_character(&c);
                assert_eq!(first, second);
                assert!(first.score() >= 0.0);
            }
        }

        #[test]
        fn test_custom_weights() {
            let mut weights = SynergyWeights::DEFAULT;
            weights.character.mobility = 10.0;
            let evaluator = SynergyEvaluator::new(weights);
            let result = evaluator.score_character(&character("x", "a", &["mobility"], &[]));
            assert!(approx(result.score(), 10.0));
        }
    }

    mod team_score {
        use super::*;

        #[test]
        fn test_seed_scenario_has_positive_core() {
            let evaluator = SynergyEvaluator::default();
            let result = evaluator.score_team(&seed_team(), 0.0);
            let b = result.breakdown();
            // entry + damage + lockdown = 3 → 9.0
            assert!(approx(b.get(ScoreComponent::Core).unwrap(), 9.0));
            assert!(approx(b.get(ScoreComponent::Beam).unwrap(), 1.2));
            assert!(approx(b.get(ScoreComponent::Pressure).unwrap(), 1.2));
            assert!(approx(b.get(ScoreComponent::Diversity).unwrap(), 1.8));
            // point, anchor, battery
            assert!(approx(b.get(ScoreComponent::RoleDiversity).unwrap(), 1.2));
            assert!(result.score() > 0.0);
            assert!(approx(result.score(), 14.4));
        }

        #[test]
        fn test_score_equals_breakdown_sum_with_penalty() {
            let evaluator = SynergyEvaluator::default();
            for penalty in [0.0, 1.5, 100.0] {
                let result = evaluator.score_team(&seed_team(), penalty);
                let sum: f32 = result.breakdown().iter().map(|(_, v)| v).sum();
                assert!(approx(result.score(), sum), "penalty {penalty}");
                assert!(approx(
                    result.breakdown().get(ScoreComponent::RecentPenalty).unwrap(),
                    -penalty
                ));
            }
            let unpenalized = evaluator.score_team(&seed_team(), 0.0).score();
            let penalized = evaluator.score_team(&seed_team(), 1.5).score();
            assert!(approx(unpenalized - penalized, 1.5));
        }

        #[test]
        fn test_tolerates_any_length() {
            let evaluator = SynergyEvaluator::default();
            assert!(approx(evaluator.score_team(&[], 0.0).score(), 0.0));

            let mut five = seed_team();
            five.push(character("a", "shoto", &["entry"], &[]));
            five.push(character("b", "grappler", &[], &[]));
            let result = evaluator.score_team(&five, 0.0);
            assert!(approx(
                result.breakdown().get(ScoreComponent::Diversity).unwrap(),
                4.0 * 0.6
            ));
        }

        #[test]
        fn test_tags_collected_across_members() {
            let evaluator = SynergyEvaluator::default();
            let result = evaluator.score_team(&seed_team(), 0.0);
            let tags: Vec<_> = result.tags().iter().map(|w| w.tag).collect();
            assert_eq!(
                tags,
                [
                    CanonicalTag::Entry,
                    CanonicalTag::Damage,
                    CanonicalTag::Lockdown,
                    CanonicalTag::Beam,
                    CanonicalTag::Pressure,
                    CanonicalTag::Mobility,
                ]
            );
        }

        #[test]
        fn test_breakdown_serializes_as_labeled_map() {
            let evaluator = SynergyEvaluator::default();
            let result = evaluator.score_team(&seed_team(), 1.5);
            let json = serde_json::to_value(&result).unwrap();
            let breakdown = json["breakdown"].as_object().unwrap();
            assert_eq!(breakdown.len(), 6);
            assert!(breakdown.contains_key("roleDiversity"));
            assert!((breakdown["recentPenalty"].as_f64().unwrap() + 1.5).abs() < 1e-6);
            assert_eq!(json["tags"][0]["source"], "canon");
        }
    }
}
