use rand::{Error, Rng, RngCore, SeedableRng};

use crate::planner::constants::RANDOM_SEED_MAX;

/// Increment added to the state on every draw.
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, maps a `u32` draw onto [0, 1).
const U32_RANGE: f64 = 4_294_967_296.0;

/// Mulberry32: a tiny seeded generator with a 32-bit state.
///
/// The state is threaded explicitly through `&mut self`; two generators built
/// from the same seed produce the same sequence forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next float in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }

    /// Pick an element: index = floor(next_unit * len).
    ///
    /// Returns `None` for an empty slice without advancing the state.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_unit() * items.len() as f64).floor() as usize;
        items.get(idx.min(items.len() - 1))
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// A fresh seed for "regenerate", drawn from the thread-local OS-seeded generator.
pub fn fresh_seed() -> u32 {
    rand::thread_rng().gen_range(0..RANDOM_SEED_MAX)
}
