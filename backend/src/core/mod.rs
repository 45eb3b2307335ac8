//! Core building blocks shared across the engine.

pub mod time;
