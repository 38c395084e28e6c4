//! RNG module - uniform random shape selection
//!
//! Spawning draws the next piece kind from an explicit [`ShapeSource`] passed
//! in by the caller, so a real game runs with a seeded generator while tests
//! script an exact sequence of pieces.
//!
//! The default generator is a simple LCG; a full randomness crate is overkill
//! for picking one of seven shapes.

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait ShapeSource {
    fn next_kind(&mut self) -> PieceKind;
}

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl ShapeSource for SimpleRng {
    /// Uniform pick over the seven kinds.
    fn next_kind(&mut self) -> PieceKind {
        let index = self.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[index as usize]
    }
}

/// A scripted shape sequence for deterministic tests; cycles when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequenceSource {
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "sequence must contain at least one kind");
        Self { kinds, next: 0 }
    }
}

impl ShapeSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
