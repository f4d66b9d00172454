//! Dice rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Serializable**: O(1) state capture and restore for replays
//! - **Substitutable**: The engine only ever receives plain roll values,
//!   so callers pick `GameRng`, `dice_roll`, or their own source
//!
//! ```
//! use ladder_board::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(6).unwrap(), b.roll(6).unwrap());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Roll a fair die with `sides` faces using the thread-local generator.
///
/// Returns a uniform value in `[1, sides]`.
pub fn dice_roll(sides: u32) -> Result<u32> {
    if sides == 0 {
        return Err(GameError::InvalidRollValue(sides));
    }
    Ok(rand::thread_rng().gen_range(1..=sides))
}

/// Seeded dice source.
///
/// Uses ChaCha8 so a match can be replayed from its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Roll a die with `sides` faces, uniform in `[1, sides]`.
    pub fn roll(&mut self, sides: u32) -> Result<u32> {
        if sides == 0 {
            return Err(GameError::InvalidRollValue(sides));
        }
        Ok(self.inner.gen_range(1..=sides))
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture cost does not depend on
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(6).unwrap(), rng2.roll(6).unwrap());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll(1000).unwrap()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll(1000).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let value = rng.roll(6).unwrap();
            assert!((1..=6).contains(&value));
            seen[value as usize - 1] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_zero_sides_rejected() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.roll(0), Err(GameError::InvalidRollValue(0)));
        assert_eq!(dice_roll(0), Err(GameError::InvalidRollValue(0)));
    }

    #[test]
    fn test_dice_roll_range() {
        for _ in 0..100 {
            let value = dice_roll(6).unwrap();
            assert!((1..=6).contains(&value));
        }
        assert_eq!(dice_roll(1), Ok(1));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll(6).unwrap();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll(6).unwrap()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll(6).unwrap()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
