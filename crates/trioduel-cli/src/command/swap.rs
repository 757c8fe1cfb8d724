use std::path::PathBuf;

use anyhow::Context as _;
use trioduel_engine::{Side, Team};
use trioduel_generator::{
    GeneratorParams,
    swap::{SwapConstraints, smart_swap},
};

use crate::{
    command::{RosterArg, SessionArg},
    schema::report::SessionReport,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SwapArg {
    #[clap(flatten)]
    session: SessionArg,
    #[clap(flatten)]
    roster: RosterArg,
    /// Team side: a or b
    #[arg(long)]
    side: Side,
    /// Slot index (0-2)
    #[arg(long)]
    slot: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SwapArg) -> anyhow::Result<()> {
    let roster = arg.roster.load_roster()?;
    let evaluator = arg.roster.load_evaluator()?;
    let mut session = arg.session.load()?;
    anyhow::ensure!(
        session.has_teams(),
        "No teams in session yet, run `generate` first"
    );

    let team_of = |side: Side| -> anyhow::Result<Team> {
        let members = roster.resolve_all(session.slots(side).iter().map(|slot| &slot.id))?;
        Team::from_members(members)
            .with_context(|| format!("Team {side} in session is not a valid team"))
    };
    let team = team_of(arg.side)?;
    let other_team = team_of(arg.side.opponent())?;

    let params = GeneratorParams::DEFAULT;
    let constraints = SwapConstraints {
        recent_teams: session.recent_teams(arg.side),
        no_duplicates: session.rules.no_duplicates_across_teams,
        other_team: Some(&other_team),
    };
    let swapped = smart_swap(
        &team,
        arg.slot,
        roster.characters(),
        &constraints,
        &evaluator,
        &params,
    )
    .context("Failed to swap team member")?;

    if swapped == team {
        eprintln!("No better character for team {} slot {}", arg.side, arg.slot);
    } else {
        eprintln!(
            "Team {} slot {}: {} -> {}",
            arg.side,
            arg.slot,
            team.members()[arg.slot].name,
            swapped.members()[arg.slot].name
        );
    }

    let (team_a, team_b) = match arg.side {
        Side::A => (&swapped, &other_team),
        Side::B => (&other_team, &swapped),
    };
    session.set_teams(team_a, team_b);
    arg.session.save(&session)?;

    let report = SessionReport::build(&session, &roster, &evaluator, &params)?;
    Output::save_json(&report, arg.output.as_deref())
}
