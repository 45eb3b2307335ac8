//! Command protocol
//!
//! The tagged union consumed by [`Engine::apply`](crate::engine::Engine::apply).
//! Every mutation of the game state, including clock ticks, arrives as one of
//! these values; the engine serializes them into a single transition function.
//!
//! Serde derives let a frontend or replay harness ship commands as JSON.

use crate::models::asset::AssetCategory;
use crate::models::company::CompanyType;
use serde::{Deserialize, Serialize};

/// A player or clock action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Begin the session with an initial residency. Valid once.
    StartGame { country_id: String },
    PauseGame,
    ResumeGame,
    /// Set the real-time multiplier applied to tick deltas.
    SetSpeed { speed: f64 },
    /// Advance the clock by `delta_time` tick units of real time.
    Tick { delta_time: f64 },
    /// Force a day rollover regardless of current intraday progress.
    NextDay,
    /// Spot buy or sell at the quoted price.
    ExecuteTrade {
        asset_id: String,
        quantity: f64,
        price: f64,
        is_buy: bool,
    },
    /// Open a leveraged position, replacing any existing one on the asset.
    OpenMarginPosition {
        asset_id: String,
        quantity: f64,
        price: f64,
        leverage: u32,
        is_short: bool,
    },
    /// Settle an open position at the current market price.
    CloseMarginPosition { asset_id: String },
    /// Found a company; a name is generated when none is given.
    EstablishCompany {
        kind: CompanyType,
        name: Option<String>,
    },
    UpgradeCompany { company_id: String },
    TakeLoan { amount: f64 },
    RepayLoan { amount: f64 },
    /// Buy a residency permit, or relocate if one is already held.
    ApplyImmigration { country_id: String },
    DonateToParty { country_id: String, amount: f64 },
    /// Spend political capital to nudge the trend of a whole sector.
    Lobby {
        country_id: String,
        category: AssetCategory,
    },
    /// Pop the oldest major event and apply its factor effects.
    DismissEventPopup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::OpenMarginPosition {
            asset_id: "OIL".to_string(),
            quantity: 10.0,
            price: 100.0,
            leverage: 5,
            is_short: false,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_unit_variant_serde() {
        let json = serde_json::to_string(&Command::NextDay).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Command::NextDay);
    }
}
