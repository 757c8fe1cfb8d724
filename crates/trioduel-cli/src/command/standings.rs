use std::path::PathBuf;

use serde::Serialize;
use trioduel_rating::standing::PlayerStanding;

use crate::{
    command::SessionArg,
    schema::session::{MatchRecord, SessionFile},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StandingsArg {
    #[clap(flatten)]
    session: SessionArg,
    /// Only list matches of this league
    #[arg(long)]
    league: Option<String>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StandingRow<'a> {
    player: &'a str,
    #[serde(flatten)]
    standing: PlayerStanding,
    #[serde(skip_serializing_if = "Option::is_none")]
    win_rate: Option<f64>,
}

#[derive(Debug, Serialize)]
struct StandingsOutput<'a> {
    standings: Vec<StandingRow<'a>>,
    matches: Vec<&'a MatchRecord>,
}

pub(crate) fn run(arg: &StandingsArg) -> anyhow::Result<()> {
    let session = arg.session.load()?;
    let output = build(&session, arg.league.as_deref());
    for (rank, row) in output.standings.iter().enumerate() {
        eprintln!(
            "{:>2}. {:<16} {:>5} ({}-{})",
            rank + 1,
            row.player,
            row.standing.rating,
            row.standing.wins,
            row.standing.losses
        );
    }
    Output::save_json(&output, arg.output.as_deref())
}

/// Standings sorted by rating (highest first, ties by name) and the match log, newest first.
fn build<'a>(session: &'a SessionFile, league: Option<&str>) -> StandingsOutput<'a> {
    let mut standings: Vec<_> = session
        .standings
        .iter()
        .map(|(player, standing)| StandingRow {
            player,
            standing: *standing,
            win_rate: standing.win_rate(),
        })
        .collect();
    standings.sort_by(|a, b| b.standing.rating.cmp(&a.standing.rating));

    let matches = session
        .matches
        .iter()
        .rev()
        .filter(|m| league.is_none_or(|league| m.league_id.as_deref() == Some(league)))
        .collect();
    StandingsOutput { standings, matches }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use trioduel_engine::{Availability, Character, Heuristics, Side, Team};

    use super::*;

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

    fn played_session() -> SessionFile {
        let team = |ids: [&str; 3]| Team::from_members(ids.map(character)).unwrap();
        let mut session = SessionFile::default();
        session.set_teams(&team(["a", "b", "c"]), &team(["d", "e", "f"]));
        let at = |minute| Utc.with_ymd_and_hms(2024, 5, 1, 20, minute, 0).unwrap();
        session.record_match("alice", "bob", Side::A, at(0));
        session.league_id = Some("weekly".to_owned());
        session.record_match("carol", "bob", Side::A, at(10));
        session
    }

    #[test]
    fn test_sorted_by_rating_then_name() {
        let session = played_session();
        let output = build(&session, None);
        let players: Vec<_> = output.standings.iter().map(|r| r.player).collect();
        // alice and carol both beat bob and end on 1012, names break the tie
        assert_eq!(players, ["alice", "carol", "bob"]);
        assert_eq!(output.standings[2].standing.losses, 2);
        assert_eq!(output.standings[2].win_rate, Some(0.0));
    }

    #[test]
    fn test_matches_newest_first_and_filtered_by_league() {
        let session = played_session();
        let all = build(&session, None);
        assert_eq!(all.matches.len(), 2);
        assert_eq!(all.matches[0].player_a, "carol");

        let weekly = build(&session, Some("weekly"));
        assert_eq!(weekly.matches.len(), 1);
        assert_eq!(weekly.matches[0].winner, "carol");
    }
}
