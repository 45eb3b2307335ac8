//! Price model: intraday noise and interday drift.
//!
//! The two rules are never mixed in one step. Intraday noise runs on every
//! non-rollover tick and gives tactical texture; interday drift runs once per
//! day rollover and is the only channel through which global factors and
//! lobbied trends structurally move prices. Assets are visited in key order
//! and each visit draws from the engine RNG, so iteration order is part of
//! the determinism contract.

use crate::engine::engine::Engine;
use crate::models::asset::{factor_value, AssetCategory};

impl Engine {
    /// Random walk applied to every asset on a non-rollover tick.
    ///
    /// `change = r * volatility * k * intraday_scale * (elapsed / ticks_per_day)`
    /// with `r ∈ [-1, 1)` and `k` the crypto multiplier for Crypto assets.
    pub(crate) fn apply_intraday_noise(&mut self, elapsed: f64) {
        let t = &self.tunables;
        let day_fraction = elapsed / t.ticks_per_day;

        for asset in self.state.assets.values_mut() {
            let r = self.rng.uniform_signed();
            let k = if asset.category == AssetCategory::Crypto {
                t.crypto_intraday_factor
            } else {
                1.0
            };
            let change = r * asset.volatility * k * t.intraday_scale * day_fraction;
            asset.price = (asset.price * (1.0 + change)).max(t.price_floor);
        }
    }

    /// Structural daily move applied to every asset at rollover.
    ///
    /// The DNA dot product measures each factor's deviation from the neutral
    /// midpoint 0.5; trend and a volatility-scaled shock complete the move.
    /// The reference price moves and the live price snaps to it.
    pub(crate) fn apply_interday_drift(&mut self) {
        let t = &self.tunables;
        let factors = &self.state.global_factors;

        for asset in self.state.assets.values_mut() {
            let dna_change: f64 = asset
                .dna
                .iter()
                .map(|(factor, coeff)| coeff * (factor_value(factors, *factor) - 0.5))
                .sum();
            let shock = self.rng.uniform_signed() * asset.volatility * t.shock_scale;
            let total = dna_change / t.dna_scale + asset.trend + shock;

            asset.base_price = (asset.base_price * (1.0 + total)).max(t.price_floor);
            asset.price = asset.base_price;
        }
    }
}
