//! Engine tunables
//!
//! Every policy constant the transition function consults lives here, so a
//! session's behavior is fully determined by `(catalog, tunables, seed,
//! commands)`. Defaults reproduce the standard game balance; tests shrink or
//! zero individual knobs to isolate one mechanism.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables validation failure.
#[derive(Debug, Error)]
pub enum TunablesError {
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be within [0, 1] (got {value})")]
    NotProbability { name: &'static str, value: f64 },

    #[error("log capacity must be positive")]
    ZeroLogCapacity,

    #[error("daily news capacity must be positive")]
    ZeroNewsCapacity,

    #[error("event delta range inverted ({min} > {max})")]
    InvertedEventRange { min: f64, max: f64 },

    #[error("complication threshold {complication} must not exceed breakthrough threshold {breakthrough}")]
    InvertedUpgradeThresholds { complication: f64, breakthrough: f64 },

    #[error("allowed leverage list is empty")]
    NoLeverageLevels,
}

/// All policy constants of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tunables {
    /// Tick units per simulated day.
    pub ticks_per_day: f64,
    /// Audit log ring capacity.
    pub log_capacity: usize,
    /// Ticker feed capacity.
    pub daily_news_capacity: usize,
    /// Hard floor keeping every price strictly positive.
    pub price_floor: f64,
    /// Spot holdings below this quantity are deleted.
    pub dust_epsilon: f64,

    // Price model
    /// Intraday noise amplitude per full day of elapsed ticks.
    pub intraday_scale: f64,
    /// Extra intraday noise multiplier for the Crypto category.
    pub crypto_intraday_factor: f64,
    /// Divisor applied to the DNA dot product in interday drift.
    pub dna_scale: f64,
    /// Amplitude of the daily random shock, in units of volatility.
    pub shock_scale: f64,

    // Margin
    /// Liquidation distance factor; < 1 so liquidation fires before the
    /// margin is fully exhausted.
    pub margin_damping: f64,
    pub allowed_leverage: Vec<u32>,

    // Events and factor drift
    /// Probability of a macro event per day rollover.
    pub event_probability: f64,
    pub event_delta_min: f64,
    pub event_delta_max: f64,
    /// Amplitude of the per-factor daily random walk.
    pub factor_drift: f64,

    // Politics
    /// Cash per unit of political capital.
    pub donation_rate: f64,
    /// Capital cost of one lobbying action.
    pub lobby_cost: f64,
    /// Trend increase applied to every asset of the lobbied sector.
    pub lobby_trend_nudge: f64,
    pub trend_max: f64,

    // Company upgrades: one uniform draw u resolves the outcome.
    /// u < complication_threshold → complication.
    pub complication_threshold: f64,
    /// complication_threshold <= u < breakthrough_threshold → breakthrough.
    pub breakthrough_threshold: f64,
    /// Extra cost on complication, as a fraction of the upgrade cost.
    pub complication_surcharge: f64,
    /// Refund on breakthrough, as a fraction of the upgrade cost.
    pub breakthrough_refund: f64,

    // Bank
    /// Annual rate of the single loan facility.
    pub loan_interest_rate: f64,
    pub loan_cap: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            ticks_per_day: 1000.0,
            log_capacity: 200,
            daily_news_capacity: 30,
            price_floor: 1e-9,
            dust_epsilon: 1e-5,
            intraday_scale: 20.0,
            crypto_intraday_factor: 2.0,
            dna_scale: 50.0,
            shock_scale: 0.5,
            margin_damping: 0.9,
            allowed_leverage: vec![2, 5, 10],
            event_probability: 0.1,
            event_delta_min: 0.05,
            event_delta_max: 0.20,
            factor_drift: 0.02,
            donation_rate: 10_000.0,
            lobby_cost: 100.0,
            lobby_trend_nudge: 0.1,
            trend_max: 1.0,
            complication_threshold: 0.05,
            breakthrough_threshold: 0.15,
            complication_surcharge: 0.1,
            breakthrough_refund: 0.25,
            loan_interest_rate: 0.05,
            loan_cap: 100_000.0,
        }
    }
}

impl Tunables {
    /// Check internal consistency. Called once at engine construction.
    pub fn validate(&self) -> Result<(), TunablesError> {
        let positive: [(&'static str, f64); 8] = [
            ("ticks_per_day", self.ticks_per_day),
            ("price_floor", self.price_floor),
            ("dust_epsilon", self.dust_epsilon),
            ("dna_scale", self.dna_scale),
            ("donation_rate", self.donation_rate),
            ("lobby_cost", self.lobby_cost),
            ("loan_cap", self.loan_cap),
            ("margin_damping", self.margin_damping),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TunablesError::NonPositive { name, value });
            }
        }

        let probabilities: [(&'static str, f64); 6] = [
            ("event_probability", self.event_probability),
            ("complication_threshold", self.complication_threshold),
            ("breakthrough_threshold", self.breakthrough_threshold),
            ("complication_surcharge", self.complication_surcharge),
            ("breakthrough_refund", self.breakthrough_refund),
            ("margin_damping", self.margin_damping),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(TunablesError::NotProbability { name, value });
            }
        }

        if self.log_capacity == 0 {
            return Err(TunablesError::ZeroLogCapacity);
        }
        if self.daily_news_capacity == 0 {
            return Err(TunablesError::ZeroNewsCapacity);
        }
        if self.event_delta_min > self.event_delta_max {
            return Err(TunablesError::InvertedEventRange {
                min: self.event_delta_min,
                max: self.event_delta_max,
            });
        }
        if self.complication_threshold > self.breakthrough_threshold {
            return Err(TunablesError::InvertedUpgradeThresholds {
                complication: self.complication_threshold,
                breakthrough: self.breakthrough_threshold,
            });
        }
        if self.allowed_leverage.is_empty() {
            return Err(TunablesError::NoLeverageLevels);
        }

        Ok(())
    }
}
