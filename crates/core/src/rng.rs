//! RNG module - deterministic seeded generator
//!
//! Every random draw in the engine (shape choice, color choice, rainbow roll,
//! catalog shuffle) goes through [`rand::Rng`]. [`SimpleRng`] is a small LCG that
//! implements [`rand::RngCore`], so a seed fully determines a game. Hosts that
//! want real entropy can pass any other `rand` generator instead.

use rand::RngCore;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (for restarting a game with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        // low bits of an LCG are weak; fill all four 16-bit lanes from high bits
        (0..4).fold(0u64, |acc, _| (acc << 16) | (self.step() >> 16) as u64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
