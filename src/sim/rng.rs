//! Mulberry32 counter-mix generator
//!
//! A single `u32` of state, advanced by a fixed odd increment and mixed on
//! output. Plan generation depends on the exact draw sequence, so this is
//! kept separate from the general-purpose `rand` generators.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform draw in [0, 1)
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform draw in [lo, hi)
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.next_unit() * (hi - lo) + lo
    }

    /// Fair coin
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.next_unit() < 0.5
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        rand::rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_u32(), 2_581_720_956);
        assert_eq!(rng.next_u32(), 1_925_393_290);
        assert_eq!(rng.next_u32(), 3_661_312_704);

        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..10_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_uniform_bounds() {
        let mut rng = Mulberry32::new(123);
        for _ in 0..1_000 {
            let v = rng.uniform(-8.0, 8.0);
            assert!((-8.0..8.0).contains(&v));
        }
    }

    #[test]
    fn test_copy_replays_sequence() {
        let mut a = Mulberry32::new(99);
        a.next_u32();
        let mut b = a;
        assert_eq!(a.next_u32(), b.next_u32());
        assert_eq!(a.next_unit(), b.next_unit());
    }

    #[test]
    fn test_from_seed_matches_new() {
        let mut a = Mulberry32::from_seed(42u32.to_le_bytes());
        let mut b = Mulberry32::new(42);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
