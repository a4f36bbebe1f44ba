//! RNG module - seedable random source for procedural placement
//!
//! Pipe gaps and cloud heights are drawn from a [`RandomSource`] owned by the
//! session. The default source is a small LCG so the same seed always produces the
//! same course, which keeps tests and replays deterministic.

/// Source of random numbers injected into the session.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `[lo, hi]` (both inclusive).
    ///
    /// Returns `lo` when the range is empty or inverted.
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = hi - lo + 1;
        lo + self.next_u32() % span
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed: state, state }
    }

    /// Seed the generator was created with (after zero-coercion).
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle with short periods; use the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_is_coerced() {
        let rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 1);
    }

    #[test]
    fn test_range_inclusive_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..5_000 {
            let v = rng.range_inclusive(100, 110);
            assert!((100..=110).contains(&v));
            seen_lo |= v == 100;
            seen_hi |= v == 110;
        }
        assert!(seen_lo && seen_hi, "both ends of the range should be reachable");
    }

    #[test]
    fn test_range_inclusive_degenerate() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.range_inclusive(42, 42), 42);
        assert_eq!(rng.range_inclusive(50, 10), 50);
    }
}
