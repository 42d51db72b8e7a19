//! Integer sources that supply the shuffled provable values for a deck.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// A generator that returns a permutation of an inclusive integer range.
///
/// Implementations must be deterministic: the same seeds and bounds always
/// yield the same sequence. Any `Fn(&str, &str, i64, i64) -> Vec<i64>` closure
/// is a source, which makes stubbing straightforward:
///
/// ```
/// use provable_cards::ShuffleSource;
///
/// let reversed = |_: &str, _: &str, min: i64, max: i64| (min..=max).rev().collect::<Vec<_>>();
/// assert_eq!(reversed.generate("a", "b", 0, 3), vec![3, 2, 1, 0]);
/// ```
pub trait ShuffleSource {
    /// Returns the values `min..=max` in shuffled order.
    fn generate(&self, client_seed: &str, server_seed: &str, min: i64, max: i64) -> Vec<i64>;
}

impl<F> ShuffleSource for F
where
    F: Fn(&str, &str, i64, i64) -> Vec<i64>,
{
    fn generate(&self, client_seed: &str, server_seed: &str, min: i64, max: i64) -> Vec<i64> {
        self(client_seed, server_seed, min, max)
    }
}

/// Deterministic source backed by a `ChaCha8` stream.
///
/// The two seeds are folded into a single 64-bit seed. This gives a stable,
/// reproducible shuffle per seed pair, but it is not a commit-reveal scheme:
/// verification of the seeds belongs to whatever issued them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaChaShuffle;

impl ChaChaShuffle {
    /// Folds a seed pair into the 64-bit seed used for the `ChaCha8` stream.
    #[must_use]
    pub fn seed(client_seed: &str, server_seed: &str) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0100_0000_01b3;

        // FNV-1a over each seed prefixed by its length, server seed first
        [server_seed, client_seed]
            .into_iter()
            .flat_map(|seed| (seed.len() as u64).to_le_bytes().into_iter().chain(seed.bytes()))
            .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
    }
}

impl ShuffleSource for ChaChaShuffle {
    fn generate(&self, client_seed: &str, server_seed: &str, min: i64, max: i64) -> Vec<i64> {
        let mut rng = ChaCha8Rng::seed_from_u64(Self::seed(client_seed, server_seed));
        let mut values: Vec<i64> = (min..=max).collect();
        values.shuffle(&mut rng);
        values
    }
}

/// The request a deck was shuffled from.
///
/// Kept with the deck so the shuffle can be replayed and audited later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShuffleRequest {
    /// Client seed passed to the source.
    pub client_seed: String,
    /// Server seed passed to the source.
    pub server_seed: String,
    /// Lowest value requested.
    pub min: i64,
    /// Highest value requested.
    pub max: i64,
}

impl ShuffleRequest {
    /// Creates a request for the inclusive range `min..=max`.
    #[must_use]
    pub fn new(client_seed: &str, server_seed: &str, min: i64, max: i64) -> Self {
        Self {
            client_seed: client_seed.into(),
            server_seed: server_seed.into(),
            min,
            max,
        }
    }

    /// Runs the request against a source.
    pub fn replay<S: ShuffleSource + ?Sized>(&self, source: &S) -> Vec<i64> {
        source.generate(&self.client_seed, &self.server_seed, self.min, self.max)
    }

    /// Returns whether `values` is exactly a permutation of `min..=max`.
    #[must_use]
    pub fn is_permutation(&self, values: &[i64]) -> bool {
        let expected = self.max.saturating_sub(self.min).saturating_add(1);
        if i64::try_from(values.len()).ok() != Some(expected.max(0)) {
            return false;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.into_iter().eq(self.min..=self.max)
    }
}
