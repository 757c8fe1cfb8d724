use std::path::PathBuf;

use anyhow::Context as _;
use rand::Rng as _;
use serde::Serialize;
use trioduel_engine::{
    GenerationConfig, GenerationSeed, Mode, RecentTeams, Roster, Side, SideConfig,
};
use trioduel_generator::{GeneratorParams, generate_teams};

use crate::{
    command::{RosterArg, SessionArg},
    schema::{report::SessionReport, session::SessionFile},
    util::Output,
};

/// Which side(s) a generation replaces.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum RerollTarget {
    A,
    B,
    #[default]
    Both,
}

impl RerollTarget {
    fn includes(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Self::Both, _) | (Self::A, Side::A) | (Self::B, Side::B)
        )
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    #[clap(flatten)]
    session: SessionArg,
    #[clap(flatten)]
    roster: RosterArg,
    /// Side to regenerate: a, b or both
    #[arg(long, default_value = "both")]
    target: RerollTarget,
    /// Generation mode (random or optimized); the session's mode is kept if omitted
    #[arg(long)]
    mode: Option<Mode>,
    /// Forbid the same character on both teams
    #[arg(long, value_name = "BOOL")]
    no_duplicates: Option<bool>,
    /// Avoid rosters a side has fielded recently
    #[arg(long, value_name = "BOOL")]
    avoid_recent: Option<bool>,
    /// Player fielding team A
    #[arg(long)]
    player_a: Option<String>,
    /// Player fielding team B
    #[arg(long)]
    player_b: Option<String>,
    /// League the session's matches are recorded under
    #[arg(long)]
    league: Option<String>,
    /// 32-digit hex seed for reproducible random generation
    #[arg(long)]
    seed: Option<GenerationSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    seed: GenerationSeed,
    #[serde(flatten)]
    report: SessionReport,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let roster = arg.roster.load_roster()?;
    let evaluator = arg.roster.load_evaluator()?;
    let mut session = arg.session.load()?;
    apply_settings(&mut session, arg);

    let target = if session.has_teams() {
        arg.target
    } else {
        if arg.target != RerollTarget::Both {
            eprintln!("No teams in session yet, generating both sides");
        }
        RerollTarget::Both
    };

    let params = GeneratorParams::DEFAULT;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let config = generation_config(&session, &roster, target)?;
    eprintln!("Generating {} teams (seed: {seed})...", session.mode);
    let pair = generate_teams(
        roster.characters(),
        &config,
        &evaluator,
        &params,
        &mut seed.rng(),
    )
    .context("Failed to generate teams")?;

    session.set_teams(&pair.team_a, &pair.team_b);
    arg.session.save(&session)?;

    let report = SessionReport::build(&session, &roster, &evaluator, &params)?;
    eprintln!(
        "Team A: {:.2}, Team B: {:.2}",
        report.team_a.result.score(),
        report.team_b.result.score()
    );
    Output::save_json(&GenerateOutput { seed, report }, arg.output.as_deref())
}

fn apply_settings(session: &mut SessionFile, arg: &GenerateArg) {
    if let Some(mode) = arg.mode {
        session.mode = mode;
    }
    if let Some(no_duplicates) = arg.no_duplicates {
        session.rules.no_duplicates_across_teams = no_duplicates;
    }
    if let Some(avoid_recent) = arg.avoid_recent {
        session.rules.avoid_recent_teams = avoid_recent;
    }
    if let Some(player) = &arg.player_a {
        session.player_a = Some(player.clone());
    }
    if let Some(player) = &arg.player_b {
        session.player_b = Some(player.clone());
    }
    if let Some(league) = &arg.league {
        session.league_id = Some(league.clone());
    }
}

/// Builds the generator input from the session.
///
/// A side that is not regenerated is passed fully locked with no history, so
/// it comes back unchanged, still counts for the cross-team duplicate rule,
/// and never counts as a repeat of its own recent teams.
fn generation_config(
    session: &SessionFile,
    roster: &Roster,
    target: RerollTarget,
) -> anyhow::Result<GenerationConfig> {
    let side_config = |side: Side| -> anyhow::Result<SideConfig> {
        let mut slots = session.resolve_slots(side, roster)?;
        if !target.includes(side) {
            for slot in &mut slots {
                slot.locked = true;
            }
            return Ok(SideConfig {
                slots,
                recent_teams: RecentTeams::new(),
            });
        }
        Ok(SideConfig {
            slots,
            recent_teams: session.recent_teams(side).clone(),
        })
    };
    Ok(GenerationConfig {
        mode: session.mode,
        rules: session.rules,
        side_a: side_config(Side::A)?,
        side_b: side_config(Side::B)?,
    })
}
