//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random numbers.
//! CRITICAL: All randomness in the engine MUST go through this module, so
//! that a fixed seed replays the same market trajectory.

mod xorshift;

pub use xorshift::SimRng;
