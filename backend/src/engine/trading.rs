//! Spot ledger: cash-settled buys and sells at weighted-average cost.

use crate::engine::engine::Engine;
use crate::engine::fmt_money;
use crate::models::log::LogCategory;
use crate::models::player::PortfolioItem;

impl Engine {
    pub(crate) fn handle_trade(&mut self, asset_id: &str, quantity: f64, price: f64, is_buy: bool) {
        let Some(asset) = self.state.assets.get(asset_id) else {
            self.log(
                LogCategory::Trade,
                format!("Cannot trade: unknown asset '{asset_id}'."),
            );
            return;
        };
        let asset_name = asset.name.clone();

        if !(quantity > 0.0 && quantity.is_finite()) || !(price > 0.0 && price.is_finite()) {
            self.log(
                LogCategory::Trade,
                format!("Cannot trade {asset_name}: invalid quantity or price."),
            );
            return;
        }
        if !self.has_market_access(asset_id) {
            self.log(
                LogCategory::Trade,
                format!("Cannot trade {asset_name}: no residency permit for its market."),
            );
            return;
        }

        let cost = quantity * price;
        if is_buy {
            if self.state.player.cash < cost {
                self.log(
                    LogCategory::Trade,
                    format!(
                        "Cannot buy {asset_name}: {} exceeds available cash.",
                        fmt_money(cost)
                    ),
                );
                return;
            }
            self.state.player.cash -= cost;

            match self.state.player.portfolio.get_mut(asset_id) {
                Some(item) => {
                    // Fold into the weighted-average cost basis.
                    let new_quantity = item.quantity + quantity;
                    item.avg_cost = (item.avg_cost * item.quantity + cost) / new_quantity;
                    item.quantity = new_quantity;
                }
                None => {
                    self.state.player.portfolio.insert(
                        asset_id.to_string(),
                        PortfolioItem {
                            asset_id: asset_id.to_string(),
                            quantity,
                            avg_cost: price,
                        },
                    );
                }
            }
            self.log(
                LogCategory::Trade,
                format!(
                    "Bought {quantity:.4} of {asset_name} for {}.",
                    fmt_money(cost)
                ),
            );
        } else {
            let held = self
                .state
                .player
                .portfolio
                .get(asset_id)
                .map_or(0.0, |item| item.quantity);
            if held < quantity {
                self.log(
                    LogCategory::Trade,
                    format!("Cannot sell {quantity:.4} of {asset_name}: only {held:.4} held."),
                );
                return;
            }

            self.state.player.cash += cost;
            let dust = self.tunables.dust_epsilon;
            if let Some(item) = self.state.player.portfolio.get_mut(asset_id) {
                item.quantity -= quantity;
                if item.quantity <= dust {
                    self.state.player.portfolio.remove(asset_id);
                }
            }
            self.log(
                LogCategory::Trade,
                format!(
                    "Sold {quantity:.4} of {asset_name} for {}.",
                    fmt_money(cost)
                ),
            );
        }
    }
}
