//! Player-owned companies.
//!
//! Companies are created by establishment, mutated only by upgrades and
//! never deleted in-session. Income and upgrade cost are pure functions of
//! `(kind, level)` so repeated upgrades are reproducible from state alone.

use crate::core::time::GameDate;
use serde::{Deserialize, Serialize};

/// Kind of company that can be established.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CompanyType {
    Tech,
    Mining,
    Pharma,
    Media,
}

impl CompanyType {
    pub const ALL: [CompanyType; 4] = [
        CompanyType::Tech,
        CompanyType::Mining,
        CompanyType::Pharma,
        CompanyType::Media,
    ];
}

/// A company owned by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Engine-assigned sequential id, e.g. "company-3".
    pub id: String,
    pub name: String,
    pub kind: CompanyType,
    /// >= 1; raised by upgrades (by 2 on a breakthrough).
    pub level: u32,
    pub monthly_income: f64,
    pub upgrade_cost: f64,
    /// Set by an upgrade complication; monthly settlement skips income while
    /// the current date is before this one.
    pub income_frozen_until: Option<GameDate>,
}

impl Company {
    /// Whether income is suspended at the given date.
    ///
    /// A freeze whose date has been reached no longer suspends anything;
    /// the settlement pass clears it.
    pub fn is_income_frozen(&self, today: &GameDate) -> bool {
        match &self.income_frozen_until {
            Some(until) => !today.is_on_or_after(until),
            None => false,
        }
    }
}

/// Monthly income for a company of the given kind and level.
///
/// Super-linear in level: `base * level * (1 + 0.1 * (level - 1))`.
pub fn income_at_level(base_income: f64, level: u32) -> f64 {
    base_income * level as f64 * (1.0 + 0.1 * (level - 1) as f64)
}

/// Upgrade cost to go from `level` to `level + 1`.
///
/// Geometric in level: `base_cost * 2^level`.
pub fn upgrade_cost_at_level(base_cost: f64, level: u32) -> f64 {
    base_cost * 2f64.powi(level as i32)
}
