//! Tag mapping: free-form synergy tags to the canonical taxonomy.
//!
//! Each raw tag is handled as follows:
//!
//! 1. A canonical tag name yields one [`TagWeight`] of weight 1 ([`TagSource::Canon`])
//! 2. A name in the mapping table yields its listed weights ([`TagSource::Mapped`])
//! 3. Anything else is dropped
//!
//! | raw tag      | mapped weights                  |
//! |--------------|---------------------------------|
//! | `projectile` | `beam: 0.5`                     |
//! | `control`    | `lockdown: 0.5`                 |
//! | `setup`      | `lockdown: 0.5`                 |
//! | `trap`       | `lockdown: 0.5`, `pressure: 0.5` |
//! | `counter`    | `lockdown: 0.5`                 |
//! | `tank`       | `pressure: 0.5`                 |
//! | `utility`    | (none)                          |
//!
//! Output order follows input order, and duplicated raw tags are not
//! deduplicated: each occurrence contributes again.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six synergy categories scoring understands.
///
/// Declaration order is the fixed enumeration order used as a tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalTag {
    Entry,
    Lockdown,
    Beam,
    Damage,
    Pressure,
    Mobility,
}

impl CanonicalTag {
    pub const LEN: usize = 6;

    pub const ALL: [Self; Self::LEN] = [
        Self::Entry,
        Self::Lockdown,
        Self::Beam,
        Self::Damage,
        Self::Pressure,
        Self::Mobility,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Lockdown => "lockdown",
            Self::Beam => "beam",
            Self::Damage => "damage",
            Self::Pressure => "pressure",
            Self::Mobility => "mobility",
        }
    }

    /// Human-readable, capitalized label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Lockdown => "Lockdown",
            Self::Beam => "Beam",
            Self::Damage => "Damage",
            Self::Pressure => "Pressure",
            Self::Mobility => "Mobility",
        }
    }

    /// Parses an exact canonical tag name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a [`TagWeight`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    /// The character declared the canonical tag directly.
    Canon,
    /// Derived from a non-canonical tag through the mapping table.
    Mapped,
}

/// A weighted contribution to one canonical tag. The weight is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TagWeight {
    pub tag: CanonicalTag,
    pub weight: f32,
    pub source: TagSource,
}

impl TagWeight {
    const fn canon(tag: CanonicalTag) -> Self {
        Self {
            tag,
            weight: CANON_WEIGHT,
            source: TagSource::Canon,
        }
    }

    const fn mapped(tag: CanonicalTag) -> Self {
        Self {
            tag,
            weight: MAPPED_WEIGHT,
            source: TagSource::Mapped,
        }
    }
}

const CANON_WEIGHT: f32 = 1.0;
const MAPPED_WEIGHT: f32 = 0.5;

const MAPPED_TAGS: &[(&str, &[TagWeight])] = &[
    ("projectile", &[TagWeight::mapped(CanonicalTag::Beam)]),
    ("control", &[TagWeight::mapped(CanonicalTag::Lockdown)]),
    ("setup", &[TagWeight::mapped(CanonicalTag::Lockdown)]),
    (
        "trap",
        &[
            TagWeight::mapped(CanonicalTag::Lockdown),
            TagWeight::mapped(CanonicalTag::Pressure),
        ],
    ),
    ("counter", &[TagWeight::mapped(CanonicalTag::Lockdown)]),
    ("tank", &[TagWeight::mapped(CanonicalTag::Pressure)]),
    ("utility", &[]),
];

/// Maps raw synergy tags to weighted canonical tags.
///
/// # Example
///
/// ```
/// use trioduel_evaluator::tag_mapping::{CanonicalTag, TagSource, map_synergy_tags};
///
/// let weights = map_synergy_tags(["entry", "trap", "teleport"]);
///
/// assert_eq!(weights.len(), 3); // "teleport" is unknown and dropped
/// assert_eq!(weights[0].tag, CanonicalTag::Entry);
/// assert_eq!(weights[0].source, TagSource::Canon);
/// assert_eq!(weights[1].tag, CanonicalTag::Lockdown);
/// assert_eq!(weights[2].tag, CanonicalTag::Pressure);
/// ```
pub fn map_synergy_tags<I, S>(tags: I) -> Vec<TagWeight>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = vec![];
    for raw in tags {
        let raw = raw.as_ref();
        if let Some(tag) = CanonicalTag::from_name(raw) {
            result.push(TagWeight::canon(tag));
        } else if let Some((_, weights)) = MAPPED_TAGS.iter().find(|(name, _)| *name == raw) {
            result.extend_from_slice(weights);
        }
    }
    result
}

/// Summed weight per canonical tag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TagTotals([f32; CanonicalTag::LEN]);

impl TagTotals {
    #[must_use]
    pub fn from_weights(weights: &[TagWeight]) -> Self {
        let mut totals = [0.0; CanonicalTag::LEN];
        for w in weights {
            totals[w.tag.index()] += w.weight;
        }
        Self(totals)
    }

    #[must_use]
    pub fn get(&self, tag: CanonicalTag) -> f32 {
        self.0[tag.index()]
    }

    /// Iterates over `(tag, total)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalTag, f32)> + '_ {
        CanonicalTag::ALL.into_iter().map(|tag| (tag, self.get(tag)))
    }
}

const ROLE_SUMMARY_LEN: usize = 3;
const ROLE_SUMMARY_SEPARATOR: &str = " + ";

/// Builds a short human-readable label of the strongest canonical tags.
///
/// Totals are ranked by descending weight (ties keep enumeration order),
/// non-positive totals are dropped, and at most three labels are joined.
/// Used for display only, never for scoring.
///
/// # Example
///
/// ```
/// use trioduel_evaluator::tag_mapping::{map_synergy_tags, summarize_roles};
///
/// let weights = map_synergy_tags(["beam", "beam", "damage", "projectile", "entry"]);
/// assert_eq!(summarize_roles(&weights), "Beam + Entry + Damage");
///
/// assert_eq!(summarize_roles(&[]), "");
/// ```
#[must_use]
pub fn summarize_roles(weights: &[TagWeight]) -> String {
    let totals = TagTotals::from_weights(weights);
    let mut ranked: Vec<_> = totals.iter().filter(|(_, total)| *total > 0.0).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(ROLE_SUMMARY_LEN)
        .map(|(tag, _)| tag.label())
        .collect::<Vec<_>>()
        .join(ROLE_SUMMARY_SEPARATOR)
}
