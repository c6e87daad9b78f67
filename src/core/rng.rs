//! RNG module - deterministic seeded stream for maze generation
//!
//! A simple LCG drives every random decision the generator makes, so the
//! same integer seed reproduces the same maze, coin placement, and hazard
//! decoration bit for bit. No wall-clock or external entropy is ever mixed in.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
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

    /// Next random float in [0, 1)
    pub fn next(&mut self) -> f64 {
        f64::from(self.next_u32()) / (u32::MAX as f64 + 1.0)
    }

    /// Random integer in [min, max) via `floor(next() * (max - min)) + min`
    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min < max);
        let span = (max - min) as f64;
        (self.next() * span).floor() as i32 + min
    }

    /// Consume a sequence and return it in a deterministic pseudo-random
    /// permutation order (Fisher-Yates driven by `next_range`).
    pub fn shuffled<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        for i in (1..items.len()).rev() {
            let j = self.next_range(0, i as i32 + 1) as usize;
            items.swap(i, j);
        }
        items
    }
}
