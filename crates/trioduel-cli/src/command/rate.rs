use std::path::PathBuf;

use serde::Serialize;
use trioduel_rating::elo::{DEFAULT_RATING, RatingUpdate, calculate_elo, expected_score};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RateArg {
    /// Rating of player A before the match
    #[arg(long, default_value_t = DEFAULT_RATING)]
    rating_a: i32,
    /// Rating of player B before the match
    #[arg(long, default_value_t = DEFAULT_RATING)]
    rating_b: i32,
    /// Score of player A (1 for a win, 0 for a loss)
    #[arg(long)]
    score_a: u8,
    /// Score of player B (1 for a win, 0 for a loss)
    #[arg(long)]
    score_b: u8,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RateOutput {
    expected_a: f64,
    expected_b: f64,
    #[serde(flatten)]
    update: RatingUpdate,
}

pub(crate) fn run(arg: &RateArg) -> anyhow::Result<()> {
    let update = calculate_elo(arg.rating_a, arg.rating_b, arg.score_a, arg.score_b)?;
    let output = RateOutput {
        expected_a: expected_score(arg.rating_a, arg.rating_b),
        expected_b: expected_score(arg.rating_b, arg.rating_a),
        update,
    };
    Output::save_json(&output, arg.output.as_deref())
}
