use std::path::PathBuf;

use trioduel_generator::GeneratorParams;

use crate::{
    command::{RosterArg, SessionArg},
    schema::report::SessionReport,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    #[clap(flatten)]
    session: SessionArg,
    #[clap(flatten)]
    roster: RosterArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let roster = arg.roster.load_roster()?;
    let evaluator = arg.roster.load_evaluator()?;
    let session = arg.session.load()?;
    anyhow::ensure!(
        session.has_teams(),
        "No teams in session yet, run `generate` first"
    );

    let report = SessionReport::build(&session, &roster, &evaluator, &GeneratorParams::DEFAULT)?;
    if let Some(summary) = &report.summary {
        eprintln!("Team A roles: {summary}");
    }
    Output::save_json(&report, arg.output.as_deref())
}
