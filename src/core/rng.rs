//! Random sources for card generation, hand draws, and opponent picks.
//!
//! ## Key Types
//!
//! - `RandomSource`: the seam every random decision goes through
//! - `GameRng`: ChaCha8-backed source, seeded or entropy-seeded
//! - `ScriptedRng`: replays fixed rolls so tests can stage exact cards
//!
//! ```
//! use card_battle::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.below(30), b.below(30));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random decisions used by the engine.
///
/// `bound` is always non-zero; callers guard empty ranges themselves.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: usize) -> usize;

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }

    fn coin(&mut self) -> bool {
        (**self).coin()
    }
}

/// ChaCha8 random source.
///
/// Play sessions seed it from OS entropy; tests and replays pass a seed.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "empty range");
        self.inner.gen_range(0..bound)
    }

    fn coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Replays a fixed list of rolls.
///
/// Each roll is reduced modulo the requested bound, and the script wraps
/// around when exhausted. An empty script always yields 0.
///
/// ```
/// use card_battle::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([3, 7]);
/// assert_eq!(rng.below(6), 3);
/// assert_eq!(rng.below(4), 3); // 7 % 4
/// assert_eq!(rng.below(6), 3); // wrapped
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a source that replays `rolls` in order.
    pub fn new(rolls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of rolls consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, bound: usize) -> usize {
        if self.rolls.is_empty() || bound == 0 {
            return 0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.below(1000), rng2.below(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = GameRng::new(7);
        for bound in 1..40 {
            for _ in 0..20 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_scripted_wraps_and_reduces() {
        let mut rng = ScriptedRng::new([5, 1]);
        assert_eq!(rng.below(4), 1);
        assert_eq!(rng.below(4), 1);
        assert_eq!(rng.below(10), 5);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_scripted_empty_yields_zero() {
        let mut rng = ScriptedRng::default();
        assert_eq!(rng.below(6), 0);
        assert!(!rng.coin());
    }

    #[test]
    fn test_scripted_coin() {
        let mut rng = ScriptedRng::new([1, 0]);
        assert!(rng.coin());
        assert!(!rng.coin());
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = ScriptedRng::new([2]);
        let by_ref = &mut rng;
        fn roll(mut source: impl RandomSource) -> usize {
            source.below(5)
        }
        assert_eq!(roll(by_ref), 2);
        assert_eq!(rng.consumed(), 1);
    }
}
