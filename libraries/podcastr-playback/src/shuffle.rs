//! Shuffle selection
//!
//! Shuffle in the player is a single uniform pick over the whole queue each
//! time the next episode is requested. The currently playing episode is not
//! excluded, so it can be picked again.

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Picks the next queue position while shuffling
pub trait ShufflePicker: Send {
    /// Pick an index in `0..len`
    ///
    /// Only called with `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform pick from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ShufflePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        thread_rng().gen_range(0..len)
    }
}

/// Uniform pick from a seeded RNG, for reproducible sequences
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ShufflePicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_stays_in_range() {
        let mut picker = RandomPicker;
        for len in 1..20 {
            for _ in 0..50 {
                assert!(picker.pick(len) < len);
            }
        }
    }

    #[test]
    fn single_choice_always_zero() {
        let mut picker = RandomPicker;
        for _ in 0..100 {
            assert_eq!(picker.pick(1), 0);
        }
    }

    #[test]
    fn seeded_picks_are_reproducible() {
        let mut first = SeededPicker::new(42);
        let mut second = SeededPicker::new(42);

        let a: Vec<usize> = (0..32).map(|_| first.pick(10)).collect();
        let b: Vec<usize> = (0..32).map(|_| second.pick(10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn picks_cover_every_position() {
        let mut picker = SeededPicker::new(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[picker.pick(5)] = true;
        }
        assert!(seen.iter().all(|s| *s), "Some positions never picked: {:?}", seen);
    }
}
