//! RNG module - uniform random piece selection
//!
//! Piece selection is naive uniform random: every spawn draws one of the 7
//! kinds independently, with no bag guarantees. A small seeded LCG keeps
//! games deterministic for tests and replays.

use crate::types::PieceKind;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Get the current RNG state (for restarting a game with same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece source.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, each of the 7 equally likely.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
