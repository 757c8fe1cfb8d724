use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trioduel_engine::Roster;
use trioduel_evaluator::team_evaluator::SynergyEvaluator;

use self::{
    generate::GenerateArg, lock::LockArg, rate::RateArg, record::RecordArg, score::ScoreArg,
    standings::StandingsArg, swap::SwapArg,
};
use crate::{schema::session::SessionFile, util};

mod generate;
mod lock;
mod rate;
mod record;
mod score;
mod standings;
mod swap;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate teams for side A, side B or both
    Generate(#[clap(flatten)] GenerateArg),
    /// Toggle the lock of a team slot
    Lock(#[clap(flatten)] LockArg),
    /// Replace one slot with the best-scoring available character
    Swap(#[clap(flatten)] SwapArg),
    /// Score both current teams
    Score(#[clap(flatten)] ScoreArg),
    /// Record the winner of the current match
    Record(#[clap(flatten)] RecordArg),
    /// Compute an Elo update without touching any session
    Rate(#[clap(flatten)] RateArg),
    /// Show player standings and the match log
    Standings(#[clap(flatten)] StandingsArg),
}

/// Arguments shared by every command that works on a session file.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SessionArg {
    /// Session state file (created on first use)
    #[arg(long = "session", value_name = "FILE", default_value = "session.json")]
    path: PathBuf,
}

impl SessionArg {
    fn load(&self) -> anyhow::Result<SessionFile> {
        util::read_session_file(&self.path)
    }

    fn save(&self, session: &SessionFile) -> anyhow::Result<()> {
        util::write_session_file(&self.path, session)
    }
}

/// Arguments for commands that need the roster and scoring weights.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RosterArg {
    /// Character roster file
    #[arg(long = "roster", value_name = "FILE", default_value = "data/roster.json")]
    path: PathBuf,
    /// Scoring weights override file
    #[arg(long, value_name = "FILE")]
    weights: Option<PathBuf>,
}

impl RosterArg {
    fn load_roster(&self) -> anyhow::Result<Roster> {
        util::read_roster_file(&self.path)
    }

    fn load_evaluator(&self) -> anyhow::Result<SynergyEvaluator> {
        let weights = util::read_weights_file(self.weights.as_deref())?;
        Ok(SynergyEvaluator::new(weights))
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Lock(arg) => lock::run(&arg)?,
        Mode::Swap(arg) => swap::run(&arg)?,
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Record(arg) => record::run(&arg)?,
        Mode::Rate(arg) => rate::run(&arg)?,
        Mode::Standings(arg) => standings::run(&arg)?,
    }
    Ok(())
}
