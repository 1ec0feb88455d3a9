use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for the random source of a game.
///
/// A 128-bit value written as 32 hex digits. The same seed always yields the
/// same sequence of shapes (falling-block game) or food cells (snake game),
/// which makes sessions reproducible for debugging and testing.
///
/// # Example
///
/// ```
/// use oxcade_engine::{BlockStack, GameSeed};
///
/// let seed: GameSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let a = BlockStack::with_rng(seed.rng());
/// let b = BlockStack::with_rng(seed.rng());
/// assert_eq!(a.active_piece(), b.active_piece());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeed([u8; 16]);

/// Error returned when parsing a [`GameSeed`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid hex: {digits}")]
    InvalidDigit { digits: String },
}

/// Allows generating random `GameSeed` values with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

impl GameSeed {
    /// Draws a seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        rand::rng().random()
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates the random source seeded by this value.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit {
                digits: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidDigit {
            digits: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_big_endian_hex() {
        let seed = GameSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: GameSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<GameSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "ghijklmnopqrstuvwxyzghijklmnopqr".parse::<GameSeed>(),
            Err(ParseSeedError::InvalidDigit { .. })
        ));
        assert!(matches!(
            "+0123456789abcdef0123456789abcde".parse::<GameSeed>(),
            Err(ParseSeedError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let seed = GameSeed::from_bytes([0xFF; 16]);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, "\"ffffffffffffffffffffffffffffffff\"");
        let back: GameSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);

        let err = serde_json::from_str::<GameSeed>("\"00\"").unwrap_err();
        assert!(err.to_string().contains("invalid hex"));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = GameSeed::random();
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..20 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }
}
