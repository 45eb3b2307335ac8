//! Domain models
//!
//! Plain data types for the simulation: market assets and macro factors,
//! the player ledger, companies, the audit log, and the news feed. All
//! types are serde-serializable so the whole state round-trips through
//! checkpoints.

pub mod asset;
pub mod company;
pub mod log;
pub mod news;
pub mod player;
pub mod state;
