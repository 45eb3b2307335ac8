//! Market Tycoon Core - Rust Engine
//!
//! Deterministic single-player economic simulation: spot and leveraged
//! trading, companies, loans and political standing over a tick-driven
//! market shaped by global macro factors.
//!
//! # Architecture
//!
//! - **core**: Simulated calendar (30-day months, tick-based days)
//! - **models**: Domain types (Asset, Player, Company, GameState)
//! - **refdata**: Immutable catalog (countries, company types, assets)
//! - **engine**: The single state-transition function and its tunables
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (one seeded RNG owned by the engine)
//! 2. `Engine::apply` is total: business rejections log, never panic
//! 3. Global factors stay in [0, 1]; prices stay strictly positive
//! 4. Collections iterated during a tick are ordered, so a fixed seed
//!    yields a fixed trajectory

// Module declarations
pub mod core;
pub mod engine;
pub mod models;
pub mod refdata;
pub mod rng;

// Re-exports for convenience
pub use crate::core::time::{GameDate, DAYS_PER_MONTH, MONTHS_PER_YEAR, TICKS_PER_DAY};
pub use engine::{
    Command, Engine, EngineConfig, EngineError, Snapshot, Tunables, TunablesError,
};
pub use models::{
    asset::{Asset, AssetCategory, FactorMap, GlobalFactor},
    company::{Company, CompanyType},
    log::{AuditLog, LogCategory, LogEntry},
    news::{GameEvent, NewsItem},
    player::{Loan, MarginPosition, Player, PortfolioItem},
    state::GameState,
};
pub use refdata::{CatalogError, Country, CompanyTypeSpec, Party, ReferenceData};
pub use rng::SimRng;
