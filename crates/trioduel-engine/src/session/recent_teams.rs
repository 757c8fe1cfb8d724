use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::TeamKey;

/// Number of past rosters remembered per side.
pub const RECENT_TEAMS_CAPACITY: usize = 3;

/// Most-recent-first history of the rosters a side has fielded.
///
/// Registering a new roster pushes it to the front and drops anything beyond
/// [`RECENT_TEAMS_CAPACITY`].
///
/// # Example
///
/// ```
/// use trioduel_engine::{RecentTeams, TeamKey};
///
/// let mut recent = RecentTeams::new();
/// for ids in [["a", "b", "c"], ["d", "e", "f"], ["g", "h", "i"], ["j", "k", "l"]] {
///     recent.register(TeamKey::from_ids(ids));
/// }
///
/// assert_eq!(recent.len(), 3);
/// assert!(!recent.contains(&TeamKey::from_ids(["a", "b", "c"])));
/// assert_eq!(recent.iter().next(), Some(&TeamKey::from_ids(["j", "k", "l"])));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VecDeque<TeamKey>", into = "VecDeque<TeamKey>")]
pub struct RecentTeams(VecDeque<TeamKey>);

impl From<VecDeque<TeamKey>> for RecentTeams {
    fn from(keys: VecDeque<TeamKey>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<RecentTeams> for VecDeque<TeamKey> {
    fn from(recent: RecentTeams) -> Self {
        recent.0
    }
}

impl RecentTeams {
    #[must_use]
    pub fn new() -> Self {
        Self(VecDeque::with_capacity(RECENT_TEAMS_CAPACITY + 1))
    }

    /// Builds a history from keys ordered most recent first.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = TeamKey>,
    {
        Self(keys.into_iter().take(RECENT_TEAMS_CAPACITY).collect())
    }

    pub fn register(&mut self, key: TeamKey) {
        self.0.push_front(key);
        self.0.truncate(RECENT_TEAMS_CAPACITY);
    }

    #[must_use]
    pub fn contains(&self, key: &TeamKey) -> bool {
        self.0.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamKey> + '_ {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
