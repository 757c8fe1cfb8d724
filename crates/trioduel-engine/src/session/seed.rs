use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed '{input}': {reason}")]
pub struct ParseSeedError {
    input: String,
    reason: String,
}

/// Seed for deterministic team generation.
///
/// A 128-bit seed for the random number generator used by random team
/// assembly. The same seed with the same roster and configuration always
/// produces the same teams, enabling reproducible sessions and tests.
///
/// The textual form is a 32-character hex string, used both by serde and by
/// [`FromStr`].
///
/// # Example
///
/// ```
/// use trioduel_engine::GenerationSeed;
/// use rand::Rng as _;
///
/// let seed: GenerationSeed = "0123456789abcdeffedcba9876543210".parse().unwrap();
/// let mut rng1 = seed.rng();
/// let mut rng2 = seed.rng();
/// assert_eq!(rng1.random::<u64>(), rng2.random::<u64>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSeed([u8; 16]);

impl GenerationSeed {
    /// Creates the random number generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for GenerationSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for GenerationSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: String| ParseSeedError {
            input: s.to_owned(),
            reason,
        };
        if s.len() != 32 {
            return Err(err(format!("expected 32 characters, got {}", s.len())));
        }
        let num = u128::from_str_radix(s, 16).map_err(|e| err(e.to_string()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GenerationSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GenerationSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `GenerationSeed` values with `rng.random()`.
impl Distribution<GenerationSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GenerationSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GenerationSeed(seed)
    }
}
