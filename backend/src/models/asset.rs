//! Tradable assets and the global macro factors that drive them.
//!
//! Every asset carries a `dna` sensitivity vector: a sparse mapping from
//! global factor to a coefficient (possibly negative). The interday price
//! drift is the dot product of that vector with each factor's deviation from
//! the neutral midpoint 0.5, so the factor table is the only structural
//! channel between world state and prices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named macro-economic and political scalars, each kept within [0, 1].
///
/// The set is closed: assets reference these by enum variant, so a typo'd
/// factor cannot exist in the data model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GlobalFactor {
    GlobalStability,
    UsEconomy,
    ChinaEconomy,
    EuEconomy,
    JapanEconomy,
    IndiaEconomy,
    RussiaEconomy,
    MiddleEastTension,
    AsiaTensions,
    TechInnovation,
    GlobalSupplyChain,
    OilSupply,
    UsFedPolicy,
    SecRegulation,
    UsJobGrowth,
    PublicSentiment,
    ClimateChangeImpact,
    PharmaDemand,
    Industrial,
}

impl GlobalFactor {
    /// All factors, in a fixed order (used for drift and event selection).
    pub const ALL: [GlobalFactor; 19] = [
        GlobalFactor::GlobalStability,
        GlobalFactor::UsEconomy,
        GlobalFactor::ChinaEconomy,
        GlobalFactor::EuEconomy,
        GlobalFactor::JapanEconomy,
        GlobalFactor::IndiaEconomy,
        GlobalFactor::RussiaEconomy,
        GlobalFactor::MiddleEastTension,
        GlobalFactor::AsiaTensions,
        GlobalFactor::TechInnovation,
        GlobalFactor::GlobalSupplyChain,
        GlobalFactor::OilSupply,
        GlobalFactor::UsFedPolicy,
        GlobalFactor::SecRegulation,
        GlobalFactor::UsJobGrowth,
        GlobalFactor::PublicSentiment,
        GlobalFactor::ClimateChangeImpact,
        GlobalFactor::PharmaDemand,
        GlobalFactor::Industrial,
    ];

    /// Human-readable name for headlines and log messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            GlobalFactor::GlobalStability => "global stability",
            GlobalFactor::UsEconomy => "the US economy",
            GlobalFactor::ChinaEconomy => "the Chinese economy",
            GlobalFactor::EuEconomy => "the EU economy",
            GlobalFactor::JapanEconomy => "the Japanese economy",
            GlobalFactor::IndiaEconomy => "the Indian economy",
            GlobalFactor::RussiaEconomy => "the Russian economy",
            GlobalFactor::MiddleEastTension => "Middle East tensions",
            GlobalFactor::AsiaTensions => "tensions in Asia",
            GlobalFactor::TechInnovation => "tech innovation",
            GlobalFactor::GlobalSupplyChain => "global supply chains",
            GlobalFactor::OilSupply => "oil supply",
            GlobalFactor::UsFedPolicy => "US Fed policy",
            GlobalFactor::SecRegulation => "securities regulation",
            GlobalFactor::UsJobGrowth => "US job growth",
            GlobalFactor::PublicSentiment => "public sentiment",
            GlobalFactor::ClimateChangeImpact => "climate change impact",
            GlobalFactor::PharmaDemand => "pharmaceutical demand",
            GlobalFactor::Industrial => "industrial output",
        }
    }
}

/// Sparse factor → value map with default-zero lookup.
///
/// Used both for live factor levels (clamped to [0,1] by the engine) and for
/// per-asset sensitivity vectors (unbounded coefficients).
pub type FactorMap = BTreeMap<GlobalFactor, f64>;

/// Read a factor with default-zero semantics.
pub fn factor_value(map: &FactorMap, factor: GlobalFactor) -> f64 {
    map.get(&factor).copied().unwrap_or(0.0)
}

/// Market sector an asset belongs to.
///
/// Crypto gets a larger intraday noise scale; categories are also the
/// targeting unit for lobbying.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AssetCategory {
    Commodity,
    Tech,
    Crypto,
    Pharma,
    RealEstate,
    Global,
    Industrial,
    Consumer,
}

impl AssetCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetCategory::Commodity => "Commodity",
            AssetCategory::Tech => "Tech",
            AssetCategory::Crypto => "Crypto",
            AssetCategory::Pharma => "Pharma",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::Global => "Global",
            AssetCategory::Industrial => "Industrial",
            AssetCategory::Consumer => "Consumer",
        }
    }
}

/// A tradable asset.
///
/// `base_price` is the daily reference price: it is reset to the live price
/// at every day rollover, after interday drift has been applied. Assets are
/// never destroyed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Unique id, e.g. "BTC" or "NY_RealEstate".
    pub id: String,
    /// Display name, e.g. "Bitcoin".
    pub name: String,
    pub category: AssetCategory,
    /// Live quoted price (> 0, floored at a small epsilon).
    pub price: f64,
    /// Reference price at the start of the current day.
    pub base_price: f64,
    /// Daily volatility scale (>= 0).
    pub volatility: f64,
    /// Structural daily drift component, nudged by lobbying.
    pub trend: f64,
    /// Sensitivity of daily drift to global factors.
    pub dna: FactorMap,
}
