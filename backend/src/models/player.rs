//! Player holdings: cash, spot portfolio, leveraged positions, loan facility
//! and political standing.
//!
//! Cash is a signed quantity: interest accrual and margin liquidation losses
//! may push it below zero, and nothing in the engine force-liquidates the
//! player for it.

use crate::models::company::Company;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A spot holding, accounted at weighted-average cost.
///
/// Invariant: `quantity > 0`; entries below the dust epsilon are deleted by
/// the spot ledger rather than kept around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub asset_id: String,
    pub quantity: f64,
    pub avg_cost: f64,
}

/// An open leveraged position.
///
/// At most one position per asset; opening another replaces it. The
/// liquidation price is fixed at open time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginPosition {
    pub asset_id: String,
    pub quantity: f64,
    pub entry_price: f64,
    /// 2, 5 or 10.
    pub leverage: u32,
    pub is_short: bool,
    pub liquidation_price: f64,
    pub initial_margin: f64,
}

impl MarginPosition {
    /// Mark-to-market profit or loss relative to entry.
    pub fn unrealized_pnl(&self, market_price: f64) -> f64 {
        let move_per_unit = if self.is_short {
            self.entry_price - market_price
        } else {
            market_price - self.entry_price
        };
        move_per_unit * self.quantity
    }

    /// Whether the given market price breaches the liquidation threshold.
    pub fn should_liquidate(&self, market_price: f64) -> bool {
        if self.is_short {
            market_price >= self.liquidation_price
        } else {
            market_price <= self.liquidation_price
        }
    }
}

/// The single bank loan facility.
///
/// Invariant: `0 <= amount <= max_loan` after every bank command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub amount: f64,
    /// Annual rate; one twelfth accrues at each month boundary.
    pub interest_rate: f64,
    pub max_loan: f64,
}

impl Loan {
    pub fn new(interest_rate: f64, max_loan: f64) -> Self {
        Self {
            amount: 0.0,
            interest_rate,
            max_loan,
        }
    }

    /// Interest owed for one month at the current balance.
    pub fn monthly_interest(&self) -> f64 {
        self.amount * self.interest_rate / 12.0
    }
}

/// Everything the player owns or owes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Signed: may go negative through interest or liquidation losses.
    pub cash: f64,
    pub portfolio: BTreeMap<String, PortfolioItem>,
    pub margin_positions: BTreeMap<String, MarginPosition>,
    pub companies: Vec<Company>,
    pub loan: Loan,
    /// Country id; empty until the game starts.
    pub current_residency: String,
    /// Superset containing `current_residency` once the game has started.
    pub residency_permits: BTreeSet<String>,
    /// Country id → accumulated capital (default 0).
    pub political_capital: BTreeMap<String, f64>,
}

impl Player {
    pub fn new(starting_cash: f64, loan: Loan) -> Self {
        Self {
            cash: starting_cash,
            portfolio: BTreeMap::new(),
            margin_positions: BTreeMap::new(),
            companies: Vec::new(),
            loan,
            current_residency: String::new(),
            residency_permits: BTreeSet::new(),
            political_capital: BTreeMap::new(),
        }
    }

    /// Political capital in a country, default-zero.
    pub fn capital_in(&self, country_id: &str) -> f64 {
        self.political_capital.get(country_id).copied().unwrap_or(0.0)
    }

    pub fn find_company(&self, company_id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == company_id)
    }

    pub fn find_company_mut(&mut self, company_id: &str) -> Option<&mut Company> {
        self.companies.iter_mut().find(|c| c.id == company_id)
    }
}
