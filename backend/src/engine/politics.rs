//! Political economy: donations, lobbying, immigration.
//!
//! Donations convert cash into per-country political capital; lobbying spends
//! that capital to nudge a whole sector's trend, the only player feedback
//! into the interday price drift. Immigration always relocates on success,
//! whether a permit is bought or already held.

use crate::engine::engine::Engine;
use crate::engine::fmt_money;
use crate::models::asset::AssetCategory;
use crate::models::log::LogCategory;

impl Engine {
    pub(crate) fn handle_donation(&mut self, country_id: &str, amount: f64) {
        let Some(country) = self.reference.countries.get(country_id) else {
            self.log(
                LogCategory::Politics,
                format!("Cannot donate: unknown country '{country_id}'."),
            );
            return;
        };
        let country_name = country.name.clone();

        if !(amount > 0.0 && amount.is_finite()) {
            self.log(
                LogCategory::Politics,
                format!("Cannot donate to parties in {country_name}: invalid amount."),
            );
            return;
        }
        if self.state.player.cash < amount {
            self.log(
                LogCategory::Politics,
                format!(
                    "Cannot donate {} in {country_name}: insufficient cash.",
                    fmt_money(amount)
                ),
            );
            return;
        }

        self.state.player.cash -= amount;
        let gained = amount / self.tunables.donation_rate;
        *self
            .state
            .player
            .political_capital
            .entry(country_id.to_string())
            .or_insert(0.0) += gained;

        self.log(
            LogCategory::Politics,
            format!(
                "Donated {} in {country_name}, gaining {gained:.2} political capital.",
                fmt_money(amount)
            ),
        );
    }

    pub(crate) fn handle_lobby(&mut self, country_id: &str, category: AssetCategory) {
        if !self.reference.countries.contains_key(country_id) {
            self.log(
                LogCategory::Politics,
                format!("Cannot lobby: unknown country '{country_id}'."),
            );
            return;
        }

        let cost = self.tunables.lobby_cost;
        let capital = self.state.player.capital_in(country_id);
        if capital < cost {
            self.log(
                LogCategory::Politics,
                format!(
                    "Cannot lobby for the {} sector: {cost:.0} capital needed, {capital:.2} held.",
                    category.display_name()
                ),
            );
            return;
        }

        *self
            .state
            .player
            .political_capital
            .entry(country_id.to_string())
            .or_insert(0.0) -= cost;

        let nudge = self.tunables.lobby_trend_nudge;
        let trend_max = self.tunables.trend_max;
        for asset in self.state.assets.values_mut() {
            if asset.category == category {
                asset.trend = (asset.trend + nudge).min(trend_max);
            }
        }

        self.log(
            LogCategory::Politics,
            format!(
                "Lobbied for the {} sector at a cost of {cost:.0} political capital.",
                category.display_name()
            ),
        );
    }

    pub(crate) fn handle_immigration(&mut self, country_id: &str) {
        let Some(country) = self.reference.countries.get(country_id) else {
            self.log(
                LogCategory::Politics,
                format!("Cannot immigrate: unknown country '{country_id}'."),
            );
            return;
        };
        let country_name = country.name.clone();
        let cost = country.immigration_cost;

        if self.state.player.residency_permits.contains(country_id) {
            // Permit holders relocate for free.
            self.state.player.current_residency = country_id.to_string();
            self.log(
                LogCategory::Politics,
                format!("Moved residency to {country_name}."),
            );
            return;
        }

        if self.state.player.cash < cost {
            self.log(
                LogCategory::Politics,
                format!(
                    "Cannot acquire a permit for {country_name}: the {} cost exceeds available cash.",
                    fmt_money(cost)
                ),
            );
            return;
        }

        self.state.player.cash -= cost;
        self.state.player.residency_permits.insert(country_id.to_string());
        self.state
            .player
            .political_capital
            .entry(country_id.to_string())
            .or_insert(0.0);
        self.state.player.current_residency = country_id.to_string();

        self.log(
            LogCategory::Politics,
            format!("Acquired a residency permit for {country_name} and relocated."),
        );
    }
}
