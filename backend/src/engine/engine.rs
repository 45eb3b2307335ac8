//! Engine core: construction, command dispatch and the clock.
//!
//! `Engine::apply` is the single state-transition function. It is total over
//! the command set: business-rule violations (insufficient cash, unknown ids,
//! exceeding the loan cap) reject the command with one categorized log entry
//! and no other change, and randomness-driven outcomes are ordinary branches
//! of successful processing. The only inputs that change nothing at all are
//! malformed clock payloads, which fail closed without logging.
//!
//! # Example
//! ```
//! use market_tycoon_core_rs::{Command, Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::standard(42)).unwrap();
//! engine.apply(Command::StartGame { country_id: "USA".to_string() });
//! let state = engine.apply(Command::NextDay);
//! assert_eq!((state.date.month, state.date.day), (1, 2));
//! ```

use crate::core::time::GameDate;
use crate::engine::command::Command;
use crate::engine::params::{Tunables, TunablesError};
use crate::models::log::LogCategory;
use crate::models::news::NewsItem;
use crate::models::player::{Loan, Player};
use crate::models::state::GameState;
use crate::refdata::{CatalogError, ReferenceData};
use crate::rng::SimRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal engine fault: bad construction input or a checkpoint that cannot be
/// honored. Business-rule rejections never surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid tunables: {0}")]
    Tunables(#[from] TunablesError),

    #[error("starting cash must be non-negative (got {0})")]
    NegativeStartingCash(f64),

    #[error("checkpoint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("checkpoint config hash mismatch (snapshot {snapshot}, config {actual})")]
    ConfigMismatch { snapshot: String, actual: String },
}

/// Everything needed to construct an engine.
///
/// The catalog and tunables are validated at construction; the hash of this
/// configuration (minus the seed) guards checkpoint restores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rng_seed: u64,
    pub reference: ReferenceData,
    pub tunables: Tunables,
    pub starting_cash: f64,
}

impl EngineConfig {
    /// The standard game: full catalog, default tunables, $1M starting cash.
    pub fn standard(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            reference: ReferenceData::standard(),
            tunables: Tunables::default(),
            starting_cash: 1_000_000.0,
        }
    }
}

/// The simulation engine.
///
/// Owns the full game state, the reference catalog, the RNG and the id
/// sequences. Single-threaded by contract: callers serialize all commands,
/// ticks included, into [`Engine::apply`].
pub struct Engine {
    pub(crate) state: GameState,
    pub(crate) reference: ReferenceData,
    pub(crate) tunables: Tunables,
    pub(crate) rng: SimRng,
    pub(crate) next_entity_id: u64,
    pub(crate) next_log_id: u64,
}

impl Engine {
    /// Validate the configuration and build the initial state.
    ///
    /// The session starts paused and not started on 2024-01-01; `StartGame`
    /// picks the residency and starts the clock.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.reference.validate()?;
        config.tunables.validate()?;
        if config.starting_cash < 0.0 {
            return Err(EngineError::NegativeStartingCash(config.starting_cash));
        }

        let loan = Loan::new(
            config.tunables.loan_interest_rate,
            config.tunables.loan_cap,
        );
        let state = GameState::new(
            config.reference.asset_templates.clone(),
            config.reference.initial_factors.clone(),
            Player::new(config.starting_cash, loan),
            GameDate::new(2024, 1, 1),
            config.tunables.log_capacity,
        );

        Ok(Self {
            state,
            reference: config.reference,
            tunables: config.tunables,
            rng: SimRng::new(config.rng_seed),
            next_entity_id: 1,
            next_log_id: 1,
        })
    }

    /// Current state, for rendering or assertions between commands.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The immutable catalog this engine was built with.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Apply one command and return the resulting state.
    ///
    /// Never panics over the declared command set.
    pub fn apply(&mut self, command: Command) -> &GameState {
        match command {
            Command::StartGame { country_id } => self.handle_start_game(&country_id),
            Command::PauseGame => self.handle_pause(),
            Command::ResumeGame => self.handle_resume(),
            Command::SetSpeed { speed } => self.handle_set_speed(speed),
            Command::Tick { delta_time } => self.handle_tick(delta_time),
            Command::NextDay => self.roll_over_day(),
            Command::ExecuteTrade {
                asset_id,
                quantity,
                price,
                is_buy,
            } => self.handle_trade(&asset_id, quantity, price, is_buy),
            Command::OpenMarginPosition {
                asset_id,
                quantity,
                price,
                leverage,
                is_short,
            } => self.handle_open_margin(&asset_id, quantity, price, leverage, is_short),
            Command::CloseMarginPosition { asset_id } => self.handle_close_margin(&asset_id),
            Command::EstablishCompany { kind, name } => self.handle_establish_company(kind, name),
            Command::UpgradeCompany { company_id } => self.handle_upgrade_company(&company_id),
            Command::TakeLoan { amount } => self.handle_take_loan(amount),
            Command::RepayLoan { amount } => self.handle_repay_loan(amount),
            Command::ApplyImmigration { country_id } => self.handle_immigration(&country_id),
            Command::DonateToParty { country_id, amount } => {
                self.handle_donation(&country_id, amount)
            }
            Command::Lobby {
                country_id,
                category,
            } => self.handle_lobby(&country_id, category),
            Command::DismissEventPopup => self.handle_dismiss_event(),
        }
        &self.state
    }

    // ==================== Clock ====================

    fn handle_start_game(&mut self, country_id: &str) {
        if self.state.has_started {
            self.log(
                LogCategory::System,
                "Cannot start: the session is already running.".to_string(),
            );
            return;
        }
        let Some(country) = self.reference.countries.get(country_id) else {
            self.log(
                LogCategory::System,
                format!("Cannot start: unknown country '{country_id}'."),
            );
            return;
        };
        let country_name = country.name.clone();

        self.state.player.current_residency = country_id.to_string();
        self.state.player.residency_permits.insert(country_id.to_string());
        for id in self.reference.countries.keys() {
            self.state.player.political_capital.insert(id.clone(), 0.0);
        }
        self.state.has_started = true;
        self.state.is_paused = false;

        self.log(
            LogCategory::System,
            format!("Game started. Residency established in {country_name}."),
        );
        let item = NewsItem {
            id: self.next_id("news"),
            headline: "Markets open for a new trading year.".to_string(),
            date: self.state.date,
            is_major: false,
        };
        let cap = self.tunables.daily_news_capacity;
        self.state.push_news(item, cap);
    }

    fn handle_pause(&mut self) {
        if !self.state.has_started || self.state.is_paused {
            return;
        }
        self.state.is_paused = true;
        self.log(LogCategory::System, "Simulation paused.".to_string());
    }

    fn handle_resume(&mut self) {
        if !self.state.has_started || !self.state.is_paused {
            return;
        }
        self.state.is_paused = false;
        self.log(LogCategory::System, "Simulation resumed.".to_string());
    }

    fn handle_set_speed(&mut self, speed: f64) {
        if !speed.is_finite() || speed <= 0.0 {
            self.log(
                LogCategory::System,
                format!("Rejected speed change: {speed} is not a positive multiplier."),
            );
            return;
        }
        self.state.game_speed = speed;
        self.log(
            LogCategory::System,
            format!("Simulation speed set to {speed}x."),
        );
    }

    fn handle_tick(&mut self, delta_time: f64) {
        // Malformed clock input fails closed: no state change, no log.
        if !delta_time.is_finite() || delta_time < 0.0 {
            return;
        }
        if !self.state.has_started || self.state.is_paused || delta_time == 0.0 {
            return;
        }

        let elapsed = delta_time * self.state.game_speed;
        self.state.date.ticks += elapsed;

        if self.state.date.ticks >= self.tunables.ticks_per_day {
            // The remainder past the day boundary is discarded: one rollover
            // per tick, ticks reset to exactly zero.
            self.roll_over_day();
        } else {
            self.apply_intraday_noise(elapsed);
            self.sweep_liquidations();
        }
    }

    /// The once-per-day transition, in fixed order. Forced by `NextDay`,
    /// triggered naturally when a tick crosses the day boundary.
    pub(crate) fn roll_over_day(&mut self) {
        // STEP 1: possibly generate a macro event (effects deferred)
        self.maybe_generate_event();

        // STEP 2: random-walk every global factor, publish the daily ticker
        self.drift_factors();
        self.publish_daily_ticker();

        // STEP 3: interday drift for every asset
        self.apply_interday_drift();

        // STEP 4: month settlement when the incoming day is the 1st
        let incoming = self.state.date.next_day();
        if incoming.day == 1 {
            self.settle_company_income(incoming);
            self.accrue_loan_interest();
        }

        // STEP 5: advance the calendar, zeroing intraday progress
        self.state.date = incoming;

        // STEP 6: the post-drift price becomes the day's reference price
        for asset in self.state.assets.values_mut() {
            asset.base_price = asset.price;
        }

        // Drifted prices can breach liquidation thresholds too.
        self.sweep_liquidations();
    }

    // ==================== Shared helpers ====================

    /// Append one audit entry at the current date.
    pub(crate) fn log(&mut self, category: LogCategory, message: String) {
        let id = self.next_log_id;
        self.next_log_id += 1;
        self.state.log.push(id, self.state.date, category, message);
    }

    /// Next id from the engine-owned sequence, e.g. `company-7`.
    pub(crate) fn next_id(&mut self, prefix: &str) -> String {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        format!("{prefix}-{id}")
    }

    /// Whether the player may trade an asset.
    ///
    /// Assets listed in some country's local markets require a residency
    /// permit for at least one listing country; unlisted assets are open to
    /// everyone.
    pub(crate) fn has_market_access(&self, asset_id: &str) -> bool {
        let mut listed = false;
        for country in self.reference.countries.values() {
            if country.local_markets.iter().any(|m| m == asset_id) {
                listed = true;
                if self.state.player.residency_permits.contains(&country.id) {
                    return true;
                }
            }
        }
        !listed
    }
}
