//! Injectable source of uniform choices.
//!
//! The computer's fallback move and its display name are the only random
//! draws in the game. Both go through [`RandomSource`] so callers can swap
//! in a seeded RNG or a fixed script.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

/// Supplies uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks a uniformly random element of `items`, or `None` when empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()))
}

/// [`RandomSource`] backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeds from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeds deterministically so a whole session can be replayed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.rng.gen_range(0..len);
        trace!(len, index, "Random pick");
        index
    }
}

/// [`RandomSource`] that replays a fixed list of indices.
///
/// Each pick takes the next scripted value modulo `len`; the script wraps
/// around when exhausted. An empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `script`.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of picks made so far.
    pub fn picks(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_wraps() {
        let mut source = ScriptedSource::new([1, 5]);
        assert_eq!(source.pick(3), 1);
        assert_eq!(source.pick(3), 2);
        assert_eq!(source.pick(10), 1);
        assert_eq!(source.picks(), 3);
    }

    #[test]
    fn test_empty_script_picks_first() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.pick(4), 0);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let first: Vec<usize> = (0..20).map(|_| a.pick(9)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(9)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 9));
    }

    #[test]
    fn test_choose() {
        let mut source = ScriptedSource::new([2]);
        assert_eq!(choose(&mut source, &["a", "b", "c"]), Some(&"c"));
        assert_eq!(choose::<u8>(&mut source, &[]), None);
    }
}
