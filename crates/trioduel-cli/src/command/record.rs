use std::path::PathBuf;

use anyhow::Context as _;
use trioduel_engine::Side;

use crate::{command::SessionArg, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RecordArg {
    #[clap(flatten)]
    session: SessionArg,
    /// Winning side: a or b
    #[arg(long)]
    winner: Side,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RecordArg) -> anyhow::Result<()> {
    let mut session = arg.session.load()?;
    anyhow::ensure!(session.has_teams(), "No teams to record a result for");
    let player_a = session
        .player_a
        .clone()
        .context("Player A is not selected, pass --player-a to `generate`")?;
    let player_b = session
        .player_b
        .clone()
        .context("Player B is not selected, pass --player-b to `generate`")?;
    anyhow::ensure!(player_a != player_b, "Players A and B must differ");

    let record = session.record_match(&player_a, &player_b, arg.winner, chrono::Utc::now());
    arg.session.save(&session)?;

    eprintln!(
        "{} wins: {player_a} {}, {player_b} {}",
        record.winner, record.ratings.rating_a, record.ratings.rating_b
    );
    Output::save_json(&record, arg.output.as_deref())
}
