//! Deterministic 32-bit random stream.
//!
//! One seeded [`Mulberry32`] stream is shared by every probabilistic choice
//! in a session: content-variant selection and any future probabilistic tree
//! branch. Same seed + same sequence of calls gives the identical sequence of
//! floats in `[0, 1)`, which is what makes full playthroughs reproducible.

use rand::{RngCore, SeedableRng};

/// A mulberry32 pseudo-random generator: 32 bits of state, one add-and-mix
/// step per output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream from a raw 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Produce the next 32-bit output.
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(t | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        x ^ (x >> 14)
    }

    /// The next float in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// A uniform index below `len` via `floor(unit * len)`.
    ///
    /// Returns 0 for `len == 0`; callers picking from a slice should check
    /// emptiness first (or use [`Mulberry32::pick`]).
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // floor(unit * len) stays below len because unit < 1.
        (self.next_unit() * len as f64) as usize
    }

    /// Pick one element of a slice, or `None` if it is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Keep the low 32 bits raw so documented seeds (e.g. `987654321`)
    /// reproduce the stream exactly instead of being remixed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mulberry32::new(987_654_321);
        let mut b = Mulberry32::new(987_654_321);
        let seq_a: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let seq_b: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn units_stay_in_half_open_range() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..1000 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut rng = Mulberry32::new(7);
        for len in 1..=10 {
            for _ in 0..100 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn pick_from_empty_is_none() {
        let mut rng = Mulberry32::new(7);
        let empty: [&str; 0] = [];
        assert!(rng.pick(&empty).is_none());
    }

    #[test]
    fn pick_returns_slice_element() {
        let mut rng = Mulberry32::new(7);
        let lines = ["a", "b", "c"];
        for _ in 0..50 {
            let picked = rng.pick(&lines).unwrap();
            assert!(lines.contains(picked));
        }
    }

    #[test]
    fn seed_from_u64_keeps_low_bits() {
        let mut a = <Mulberry32 as SeedableRng>::seed_from_u64(987_654_321);
        let mut b = Mulberry32::new(987_654_321);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn from_seed_round_trips_bytes() {
        let mut a = Mulberry32::from_seed(42u32.to_le_bytes());
        let mut b = Mulberry32::new(42);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn fill_bytes_covers_partial_chunks() {
        let mut rng = Mulberry32::new(9);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
        // A second fill from the same stream position differs.
        let mut again = [0u8; 7];
        rng.fill_bytes(&mut again);
        assert_ne!(buf, again);
    }
}
