//! Simulation engine
//!
//! The engine owns the game state, the RNG and the reference catalog, and
//! exposes exactly one mutation entry point: [`Engine::apply`]. Handler
//! modules split the command surface by domain (market, margin, trading,
//! corporate, politics, bank, news); they are implementation details and
//! extend `Engine` with crate-private methods.

pub mod checkpoint;
pub mod command;
pub mod params;

#[allow(clippy::module_inception)]
pub mod engine;

mod bank;
mod corporate;
mod margin;
mod market;
mod newsgen;
mod politics;
mod trading;

pub use checkpoint::Snapshot;
pub use command::Command;
pub use engine::{Engine, EngineConfig, EngineError};
pub use params::{Tunables, TunablesError};

/// Currency formatting for log messages and headlines.
pub(crate) fn fmt_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}
