/// Tuning knobs for team generation.
///
/// [`GeneratorParams::DEFAULT`] holds the values the generators are
/// calibrated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Number of top-scoring characters considered by the optimized search
    pub shortlist_size: usize,
    /// Ranked candidates kept per side before pairing
    pub top_candidates: usize,
    /// Weight of the score gap in the pairing objective `min(a, b) - w·|a - b|`
    pub balance_weight: f32,
    /// Penalty subtracted from a team that repeats its side's recent history
    pub repeat_penalty: f32,
    /// Draws tried by random generation before accepting a repeated team
    pub max_random_attempts: usize,
}

impl GeneratorParams {
    pub const DEFAULT: Self = Self {
        shortlist_size: 12,
        top_candidates: 30,
        balance_weight: 0.5,
        repeat_penalty: 1.5,
        max_random_attempts: 50,
    };

    /// Pairing objective: the weaker side's score minus the weighted imbalance.
    #[must_use]
    pub fn pair_objective(&self, score_a: f32, score_b: f32) -> f32 {
        score_a.min(score_b) - self.balance_weight * (score_a - score_b).abs()
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
