//! Leveraged positions: open, explicit close, liquidation sweep.
//!
//! Opening holds `notional / leverage` aside as initial margin. The
//! liquidation price is fixed at open time with a damping factor < 1 so the
//! position dies slightly before the margin is mathematically exhausted; on
//! liquidation the player loses the margin *again* as the realized loss.
//! An explicit close settles symmetrically at the current market price.

use crate::engine::engine::Engine;
use crate::engine::fmt_money;
use crate::models::log::LogCategory;
use crate::models::player::MarginPosition;

impl Engine {
    pub(crate) fn handle_open_margin(
        &mut self,
        asset_id: &str,
        quantity: f64,
        price: f64,
        leverage: u32,
        is_short: bool,
    ) {
        let Some(asset) = self.state.assets.get(asset_id) else {
            self.log(
                LogCategory::Margin,
                format!("Cannot open position: unknown asset '{asset_id}'."),
            );
            return;
        };
        let asset_name = asset.name.clone();

        if !(quantity > 0.0 && quantity.is_finite()) || !(price > 0.0 && price.is_finite()) {
            self.log(
                LogCategory::Margin,
                format!("Cannot open position on {asset_name}: invalid quantity or price."),
            );
            return;
        }
        if !self.tunables.allowed_leverage.contains(&leverage) {
            self.log(
                LogCategory::Margin,
                format!("Cannot open position on {asset_name}: {leverage}x leverage is not offered."),
            );
            return;
        }
        if !self.has_market_access(asset_id) {
            self.log(
                LogCategory::Margin,
                format!("Cannot open position on {asset_name}: no residency permit for its market."),
            );
            return;
        }

        let notional = quantity * price;
        let required_margin = notional / leverage as f64;
        if self.state.player.cash < required_margin {
            self.log(
                LogCategory::Margin,
                format!(
                    "Cannot open position on {asset_name}: margin {} exceeds available cash.",
                    fmt_money(required_margin)
                ),
            );
            return;
        }

        self.state.player.cash -= required_margin;

        let distance = self.tunables.margin_damping / leverage as f64;
        let liquidation_price = if is_short {
            price * (1.0 + distance)
        } else {
            price * (1.0 - distance)
        };

        // Replaces any existing position on the same asset.
        self.state.player.margin_positions.insert(
            asset_id.to_string(),
            MarginPosition {
                asset_id: asset_id.to_string(),
                quantity,
                entry_price: price,
                leverage,
                is_short,
                liquidation_price,
                initial_margin: required_margin,
            },
        );

        let side = if is_short { "short" } else { "long" };
        self.log(
            LogCategory::Margin,
            format!(
                "Opened {leverage}x {side} on {asset_name} for {}.",
                fmt_money(notional)
            ),
        );
    }

    pub(crate) fn handle_close_margin(&mut self, asset_id: &str) {
        let Some(position) = self.state.player.margin_positions.remove(asset_id) else {
            self.log(
                LogCategory::Margin,
                format!("Cannot close: no open position on '{asset_id}'."),
            );
            return;
        };

        // The asset must exist: positions only open on known assets and
        // assets are never destroyed in-session.
        let (market_price, asset_name) = match self.state.assets.get(asset_id) {
            Some(asset) => (asset.price, asset.name.clone()),
            None => (position.entry_price, asset_id.to_string()),
        };

        let pnl = position.unrealized_pnl(market_price);
        self.state.player.cash += position.initial_margin + pnl;

        let outcome = if pnl >= 0.0 {
            format!("profit of {}", fmt_money(pnl))
        } else {
            format!("loss of {}", fmt_money(-pnl))
        };
        self.log(
            LogCategory::Margin,
            format!("Closed position on {asset_name} with a {outcome}."),
        );
    }

    /// Remove every position whose liquidation price has been breached.
    ///
    /// Runs after each price update. The initial margin is debited as the
    /// realized loss: open → liquidate nets minus twice the margin.
    pub(crate) fn sweep_liquidations(&mut self) {
        let triggered: Vec<String> = self
            .state
            .player
            .margin_positions
            .iter()
            .filter(|(asset_id, position)| {
                self.state
                    .assets
                    .get(*asset_id)
                    .is_some_and(|asset| position.should_liquidate(asset.price))
            })
            .map(|(asset_id, _)| asset_id.clone())
            .collect();

        for asset_id in triggered {
            let Some(position) = self.state.player.margin_positions.remove(&asset_id) else {
                continue;
            };
            let asset_name = self
                .state
                .assets
                .get(&asset_id)
                .map(|a| a.name.clone())
                .unwrap_or(asset_id);

            self.state.player.cash -= position.initial_margin;
            self.log(
                LogCategory::Margin,
                format!(
                    "Position on {asset_name} was liquidated. Loss: {}.",
                    fmt_money(position.initial_margin)
                ),
            );
        }
    }
}
