//! xorshift64* random number generator
//!
//! A fast, high-quality PRNG that is deterministic and suitable for
//! simulation purposes. Same seed → same sequence, which is what makes the
//! whole engine a pure function of `(state, command, seed)`:
//! price noise, daily shocks, macro events and upgrade outcomes all draw
//! from one instance owned by the engine.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use market_tycoon_core_rs::SimRng;
///
/// let mut rng = SimRng::new(12345);
/// let shock = rng.uniform_signed(); // [-1, 1)
/// assert!((-1.0..1.0).contains(&shock));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRng {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl SimRng {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is remapped to 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value, advancing the internal state.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform value in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        // 53 high-quality mantissa bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in [-1.0, 1.0).
    ///
    /// This is the shock shape used by both price update rules.
    pub fn uniform_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    /// Bernoulli draw: true with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p.clamp(0.0, 1.0)
    }

    /// Uniform index in [0, len). Returns None for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some((self.next_u64() % len as u64) as usize)
    }

    /// Current RNG state, for checkpointing and replay.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Recreate an RNG from a checkpointed state.
    pub fn from_state(state: u64) -> Self {
        Self::new(state)
    }
}
