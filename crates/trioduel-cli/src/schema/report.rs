use serde::Serialize;
use trioduel_engine::{Mode, Roster, RosterLookupError, Side, TeamSlot};
use trioduel_evaluator::{
    tag_mapping::{map_synergy_tags, summarize_roles},
    team_evaluator::{TeamEvaluator, TeamScore},
};
use trioduel_generator::{GeneratorParams, is_team_repeated, repeat_penalty};

use crate::schema::session::SessionFile;

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub id: String,
    pub name: String,
    pub series: String,
    pub locked: bool,
}

/// One side's team as shown to the players.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub members: Vec<MemberReport>,
    /// The roster matches one of the side's recent teams
    pub repeated: bool,
    pub result: TeamScore,
}

impl TeamReport {
    fn new<E>(
        slots: &[TeamSlot],
        session: &SessionFile,
        side: Side,
        evaluator: &E,
        params: &GeneratorParams,
    ) -> Self
    where
        E: TeamEvaluator + ?Sized,
    {
        let characters: Vec<_> = slots.iter().map(|s| s.character.clone()).collect();
        let recent = session.recent_teams(side);
        let penalty = repeat_penalty(&characters, recent, params.repeat_penalty);
        let members = slots
            .iter()
            .map(|s| MemberReport {
                id: s.character.id.clone(),
                name: s.character.name.clone(),
                series: s.character.series.clone(),
                locked: s.locked,
            })
            .collect();
        Self {
            members,
            repeated: is_team_repeated(&characters, recent),
            result: evaluator.score_team(&characters, penalty),
        }
    }
}

/// Both teams of a session with their scores.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub mode: Mode,
    pub team_a: TeamReport,
    pub team_b: TeamReport,
    /// Strongest synergy roles of team A, shown in optimized mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl SessionReport {
    pub fn build<E>(
        session: &SessionFile,
        roster: &Roster,
        evaluator: &E,
        params: &GeneratorParams,
    ) -> Result<Self, RosterLookupError>
    where
        E: TeamEvaluator + ?Sized,
    {
        let slots_a = session.resolve_slots(Side::A, roster)?;
        let slots_b = session.resolve_slots(Side::B, roster)?;
        let summary = session.mode.is_optimized().then(|| {
            let weights = map_synergy_tags(
                slots_a
                    .iter()
                    .flat_map(|s| &s.character.heuristics.synergy_tags),
            );
            summarize_roles(&weights)
        });
        Ok(Self {
            mode: session.mode,
            team_a: TeamReport::new(&slots_a, session, Side::A, evaluator, params),
            team_b: TeamReport::new(&slots_b, session, Side::B, evaluator, params),
            summary,
        })
    }
}
