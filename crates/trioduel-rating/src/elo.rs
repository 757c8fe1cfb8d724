use serde::{Deserialize, Serialize};

/// Maximum rating change per match.
pub const K_FACTOR: f64 = 24.0;

/// Rating assigned to players with no recorded matches.
pub const DEFAULT_RATING: i32 = 1000;

/// A malformed outcome pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("match scores must be 1-0 or 0-1, got {score_a}-{score_b}")]
pub struct RatingError {
    pub score_a: u8,
    pub score_b: u8,
}

/// Which side won a match. Draws are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    AWins,
    BWins,
}

impl MatchOutcome {
    /// Builds an outcome from binary scores that sum to one.
    pub fn from_scores(score_a: u8, score_b: u8) -> Result<Self, RatingError> {
        match (score_a, score_b) {
            (1, 0) => Ok(Self::AWins),
            (0, 1) => Ok(Self::BWins),
            _ => Err(RatingError { score_a, score_b }),
        }
    }

    /// Actual scores `(a, b)` for this outcome.
    #[must_use]
    pub const fn scores(self) -> (f64, f64) {
        match self {
            Self::AWins => (1.0, 0.0),
            Self::BWins => (0.0, 1.0),
        }
    }
}

/// Ratings of both players after a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub rating_a: i32,
    pub rating_b: i32,
}

/// Probability-like expected score of a player rated `own` against `opponent`.
///
/// ```
/// use trioduel_rating::elo::expected_score;
///
/// assert!((expected_score(1000, 1000) - 0.5).abs() < 1e-12);
/// assert!(expected_score(1200, 1000) > 0.75);
/// ```
#[must_use]
pub fn expected_score(own: i32, opponent: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf(f64::from(opponent - own) / 400.0))
}

#[expect(clippy::cast_possible_truncation)]
fn adjust(rating: i32, actual: f64, expected: f64) -> i32 {
    (f64::from(rating) + K_FACTOR * (actual - expected)).round() as i32
}

/// Applies one match outcome to both ratings.
///
/// New ratings are rounded half away from zero.
#[must_use]
pub fn update_ratings(rating_a: i32, rating_b: i32, outcome: MatchOutcome) -> RatingUpdate {
    let (actual_a, actual_b) = outcome.scores();
    RatingUpdate {
        rating_a: adjust(rating_a, actual_a, expected_score(rating_a, rating_b)),
        rating_b: adjust(rating_b, actual_b, expected_score(rating_b, rating_a)),
    }
}

/// Elo update from raw binary scores.
///
/// Fails if the scores are not exactly one win and one loss.
pub fn calculate_elo(
    rating_a: i32,
    rating_b: i32,
    score_a: u8,
    score_b: u8,
) -> Result<RatingUpdate, RatingError> {
    let outcome = MatchOutcome::from_scores(score_a, score_b)?;
    Ok(update_ratings(rating_a, rating_b, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_match_winner_gains() {
        let update = calculate_elo(1000, 1000, 1, 0).unwrap();
        assert!(update.rating_a > 1000);
        assert!(update.rating_b < 1000);
        assert_eq!(update, RatingUpdate { rating_a: 1012, rating_b: 988 });
    }

    #[test]
    fn test_upset_moves_ratings_toward_each_other() {
        let update = calculate_elo(1200, 1000, 0, 1).unwrap();
        assert!(update.rating_a < 1200);
        assert!(update.rating_b > 1000);
        // expected(1000 vs 1200) ≈ 0.2403, so 24 × 0.7597 ≈ 18.2
        assert_eq!(update, RatingUpdate { rating_a: 1182, rating_b: 1018 });
    }

    #[test]
    fn test_favorite_win_gains_little() {
        let update = update_ratings(1400, 1000, MatchOutcome::AWins);
        assert_eq!(update, RatingUpdate { rating_a: 1402, rating_b: 998 });
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        for (a, b) in [(1000, 1000), (1200, 1000), (800, 1500), (0, 3000)] {
            let sum = expected_score(a, b) + expected_score(b, a);
            assert!((sum - 1.0).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn test_malformed_outcomes() {
        for (a, b) in [(1, 1), (0, 0), (2, 0), (0, 5)] {
            let err = calculate_elo(1000, 1000, a, b).unwrap_err();
            assert_eq!(err, RatingError { score_a: a, score_b: b });
            assert!(err.to_string().contains("1-0 or 0-1"));
        }
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MatchOutcome::AWins).unwrap(),
            r#""a_wins""#
        );
    }
}
