//! Reference catalog
//!
//! Static world data: countries, company types, asset templates, and the
//! initial macro factor levels. The engine clones asset templates into live
//! state at construction and treats everything here as immutable afterwards.
//!
//! `ReferenceData::validate` cross-checks the catalog (local market listings
//! must name real assets, prices must be positive, every factor needs an
//! initial level) so a bad catalog fails loudly at engine construction
//! instead of corrupting a running session.

use crate::models::asset::{Asset, AssetCategory, FactorMap, GlobalFactor};
use crate::models::company::CompanyType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Catalog validation failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no assets")]
    NoAssets,

    #[error("catalog has no countries")]
    NoCountries,

    #[error("asset {id} has non-positive price {price}")]
    NonPositivePrice { id: String, price: f64 },

    #[error("asset {id} has negative volatility {volatility}")]
    NegativeVolatility { id: String, volatility: f64 },

    #[error("asset {id} key does not match its id field {inner}")]
    MismatchedAssetKey { id: String, inner: String },

    #[error("country {country} lists unknown local market {asset}")]
    UnknownLocalMarket { country: String, asset: String },

    #[error("country {id} key does not match its id field {inner}")]
    MismatchedCountryKey { id: String, inner: String },

    #[error("country {id} has tax rate {rate} outside [0, 1]")]
    BadTaxRate { id: String, rate: f64 },

    #[error("country {id} has non-positive immigration cost {cost}")]
    BadImmigrationCost { id: String, cost: f64 },

    #[error("company type {kind:?} is missing from the catalog")]
    MissingCompanyType { kind: CompanyType },

    #[error("company type {kind:?} has non-positive base cost or income")]
    BadCompanyEconomics { kind: CompanyType },

    #[error("factor {factor:?} has no initial level")]
    MissingFactorLevel { factor: GlobalFactor },

    #[error("factor {factor:?} initial level {level} outside [0, 1]")]
    BadFactorLevel { factor: GlobalFactor, level: f64 },
}

/// A political party within a country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub name: String,
}

/// A country the player can reside in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    /// Fraction of monthly company income withheld as tax.
    pub tax_rate: f64,
    /// Multiplier on company establishment and upgrade costs.
    pub company_cost_modifier: f64,
    /// Asset ids tradable only by residents (permits count).
    pub local_markets: Vec<String>,
    /// Cash price of a residency permit.
    pub immigration_cost: f64,
    /// Donation targets; may be empty.
    pub parties: Vec<Party>,
}

/// Economics of one company type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyTypeSpec {
    pub name: String,
    /// Establishment cost before the country modifier.
    pub base_cost: f64,
    /// Level-1 monthly income before scaling.
    pub base_income: f64,
}

/// The full static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub countries: BTreeMap<String, Country>,
    pub company_types: BTreeMap<CompanyType, CompanyTypeSpec>,
    pub asset_templates: BTreeMap<String, Asset>,
    /// Factor levels at session start, each within [0, 1].
    pub initial_factors: FactorMap,
}

impl ReferenceData {
    /// Cross-check the catalog. Called once at engine construction.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.asset_templates.is_empty() {
            return Err(CatalogError::NoAssets);
        }
        if self.countries.is_empty() {
            return Err(CatalogError::NoCountries);
        }

        for (key, asset) in &self.asset_templates {
            if key != &asset.id {
                return Err(CatalogError::MismatchedAssetKey {
                    id: key.clone(),
                    inner: asset.id.clone(),
                });
            }
            if asset.price <= 0.0 || asset.base_price <= 0.0 {
                return Err(CatalogError::NonPositivePrice {
                    id: asset.id.clone(),
                    price: asset.price.min(asset.base_price),
                });
            }
            if asset.volatility < 0.0 {
                return Err(CatalogError::NegativeVolatility {
                    id: asset.id.clone(),
                    volatility: asset.volatility,
                });
            }
        }

        for (key, country) in &self.countries {
            if key != &country.id {
                return Err(CatalogError::MismatchedCountryKey {
                    id: key.clone(),
                    inner: country.id.clone(),
                });
            }
            if !(0.0..=1.0).contains(&country.tax_rate) {
                return Err(CatalogError::BadTaxRate {
                    id: country.id.clone(),
                    rate: country.tax_rate,
                });
            }
            if country.immigration_cost <= 0.0 {
                return Err(CatalogError::BadImmigrationCost {
                    id: country.id.clone(),
                    cost: country.immigration_cost,
                });
            }
            for market in &country.local_markets {
                if !self.asset_templates.contains_key(market) {
                    return Err(CatalogError::UnknownLocalMarket {
                        country: country.id.clone(),
                        asset: market.clone(),
                    });
                }
            }
        }

        for kind in CompanyType::ALL {
            match self.company_types.get(&kind) {
                None => return Err(CatalogError::MissingCompanyType { kind }),
                Some(spec) if spec.base_cost <= 0.0 || spec.base_income <= 0.0 => {
                    return Err(CatalogError::BadCompanyEconomics { kind });
                }
                Some(_) => {}
            }
        }

        for factor in GlobalFactor::ALL {
            match self.initial_factors.get(&factor) {
                None => return Err(CatalogError::MissingFactorLevel { factor }),
                Some(&level) if !(0.0..=1.0).contains(&level) => {
                    return Err(CatalogError::BadFactorLevel { factor, level });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// The standard world: 12 countries, 4 company types, 41 assets.
    pub fn standard() -> Self {
        let mut countries = BTreeMap::new();
        for country in standard_countries() {
            countries.insert(country.id.clone(), country);
        }

        let mut company_types = BTreeMap::new();
        company_types.insert(
            CompanyType::Tech,
            CompanyTypeSpec {
                name: "Tech Startup".to_string(),
                base_cost: 1_500_000.0,
                base_income: 75_000.0,
            },
        );
        company_types.insert(
            CompanyType::Mining,
            CompanyTypeSpec {
                name: "Mining Operation".to_string(),
                base_cost: 2_000_000.0,
                base_income: 100_000.0,
            },
        );
        company_types.insert(
            CompanyType::Pharma,
            CompanyTypeSpec {
                name: "Pharma Lab".to_string(),
                base_cost: 1_800_000.0,
                base_income: 90_000.0,
            },
        );
        company_types.insert(
            CompanyType::Media,
            CompanyTypeSpec {
                name: "Media Group".to_string(),
                base_cost: 1_000_000.0,
                base_income: 50_000.0,
            },
        );

        let mut asset_templates = BTreeMap::new();
        for asset in standard_assets() {
            asset_templates.insert(asset.id.clone(), asset);
        }

        Self {
            countries,
            company_types,
            asset_templates,
            initial_factors: standard_initial_factors(),
        }
    }
}

fn party(id: &str, name: &str) -> Party {
    Party {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn country(
    id: &str,
    name: &str,
    tax_rate: f64,
    company_cost_modifier: f64,
    local_markets: &[&str],
    immigration_cost: f64,
    parties: Vec<Party>,
) -> Country {
    Country {
        id: id.to_string(),
        name: name.to_string(),
        tax_rate,
        company_cost_modifier,
        local_markets: local_markets.iter().map(|s| s.to_string()).collect(),
        immigration_cost,
        parties,
    }
}

fn standard_countries() -> Vec<Country> {
    vec![
        country(
            "USA",
            "United States",
            0.25,
            1.0,
            &[
                "AAPL",
                "GOOGL",
                "NVDA",
                "TSLA",
                "MSFT",
                "AMZN",
                "PFE",
                "MRNA",
                "JNJ",
                "CAT",
                "PG",
                "NY_RealEstate",
            ],
            10_000_000.0,
            vec![party("D", "Democrats"), party("R", "Republicans")],
        ),
        country(
            "CHN",
            "China",
            0.20,
            0.7,
            &["TCEHY", "BABA"],
            15_000_000.0,
            vec![party("CCP", "Communist Party")],
        ),
        country(
            "DEU",
            "Germany",
            0.30,
            1.2,
            &["VOW3", "SIE"],
            8_000_000.0,
            vec![party("CDU", "CDU/CSU"), party("SPD", "SPD")],
        ),
        country(
            "JPN",
            "Japan",
            0.28,
            1.1,
            &["TM", "TYO_RealEstate"],
            12_000_000.0,
            vec![party("LDP", "Liberal Democratic Party")],
        ),
        country(
            "IND",
            "India",
            0.18,
            0.6,
            &["TATA"],
            5_000_000.0,
            vec![
                party("BJP", "Bharatiya Janata Party"),
                party("INC", "Indian National Congress"),
            ],
        ),
        country(
            "RUS",
            "Russia",
            0.15,
            0.8,
            &[],
            20_000_000.0,
            vec![party("UR", "United Russia")],
        ),
        country(
            "FRA",
            "France",
            0.32,
            1.3,
            &["LVMH"],
            9_000_000.0,
            vec![party("RE", "Renaissance"), party("RN", "National Rally")],
        ),
        country(
            "KOR",
            "South Korea",
            0.22,
            0.9,
            &["SSNLF"],
            11_000_000.0,
            vec![
                party("DP", "Democratic Party"),
                party("PPP", "People Power Party"),
            ],
        ),
        country(
            "NLD",
            "Netherlands",
            0.26,
            1.2,
            &["ASML"],
            7_000_000.0,
            vec![party("VVD", "VVD"), party("PVV", "PVV")],
        ),
        country(
            "CHE",
            "Switzerland",
            0.18,
            1.5,
            &["ROG", "NVS"],
            18_000_000.0,
            vec![party("SVP", "Swiss People's Party")],
        ),
        country(
            "CAN",
            "Canada",
            0.27,
            1.0,
            &["VAN_RealEstate"],
            6_000_000.0,
            vec![
                party("LIB", "Liberal Party"),
                party("CON", "Conservative Party"),
            ],
        ),
        country(
            "ARE",
            "UAE",
            0.09,
            1.4,
            &["SAOC", "DXB_RealEstate"],
            16_000_000.0,
            vec![],
        ),
    ]
}

fn asset(
    id: &str,
    name: &str,
    category: AssetCategory,
    price: f64,
    volatility: f64,
    trend: f64,
    dna: &[(GlobalFactor, f64)],
) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        base_price: price,
        volatility,
        trend,
        dna: dna.iter().copied().collect(),
    }
}

#[rustfmt::skip]
fn standard_assets() -> Vec<Asset> {
    use AssetCategory::*;
    use GlobalFactor::*;

    vec![
        // Commodities
        asset("OIL", "Crude Oil", Commodity, 80.0, 0.03, 0.0001,
            &[(OilSupply, -2.0), (MiddleEastTension, 1.5), (GlobalStability, -0.8), (UsEconomy, 0.5), (ChinaEconomy, 0.6)]),
        asset("GOLD", "Gold", Commodity, 2300.0, 0.015, 0.0002,
            &[(GlobalStability, -1.5), (UsFedPolicy, -1.2), (PublicSentiment, -1.0)]),
        asset("SILVER", "Silver", Commodity, 29.0, 0.025, 0.0001,
            &[(GlobalStability, -1.0), (UsFedPolicy, -0.8), (GlobalFactor::Industrial, 0.5)]),
        asset("COPPER", "Copper", Commodity, 4.5, 0.02, 0.0003,
            &[(GlobalSupplyChain, -0.7), (TechInnovation, 0.5), (ChinaEconomy, 1.2), (ClimateChangeImpact, 0.8)]),
        asset("PLATINUM", "Platinum", Commodity, 1000.0, 0.022, 0.0001,
            &[(GlobalStability, -0.5), (GlobalFactor::Industrial, 0.7), (RussiaEconomy, -0.5)]),

        // Tech
        asset("AAPL", "Apple Inc.", Tech, 190.0, 0.018, 0.0005,
            &[(UsEconomy, 1.2), (TechInnovation, 0.8), (GlobalSupplyChain, -0.6), (ChinaEconomy, 0.4), (PublicSentiment, 0.5)]),
        asset("GOOGL", "Alphabet Inc.", Tech, 175.0, 0.017, 0.0006,
            &[(UsEconomy, 1.0), (TechInnovation, 1.2), (SecRegulation, -0.7), (PublicSentiment, 0.6)]),
        asset("NVDA", "NVIDIA Corp.", Tech, 120.0, 0.035, 0.001,
            &[(TechInnovation, 2.5), (GlobalSupplyChain, -1.0), (ChinaEconomy, 0.5), (UsEconomy, 0.8)]),
        asset("TSLA", "Tesla, Inc.", Tech, 180.0, 0.04, 0.0008,
            &[(TechInnovation, 1.0), (OilSupply, 0.8), (ChinaEconomy, 0.7), (PublicSentiment, 1.5), (SecRegulation, -1.0)]),
        asset("MSFT", "Microsoft Corp.", Tech, 440.0, 0.015, 0.0004,
            &[(UsEconomy, 1.3), (TechInnovation, 1.1), (GlobalStability, 0.5)]),
        asset("AMZN", "Amazon.com, Inc.", Tech, 185.0, 0.019, 0.0003,
            &[(UsEconomy, 1.5), (PublicSentiment, 0.8), (GlobalSupplyChain, -0.4), (UsJobGrowth, 0.5)]),

        // Crypto
        asset("BTC", "Bitcoin", Crypto, 68000.0, 0.05, 0.0007,
            &[(UsFedPolicy, -1.5), (GlobalStability, -1.0), (SecRegulation, -2.0), (PublicSentiment, 1.8), (TechInnovation, 0.5)]),
        asset("ETH", "Ethereum", Crypto, 3800.0, 0.06, 0.0008,
            &[(UsFedPolicy, -1.2), (GlobalStability, -0.8), (SecRegulation, -1.8), (PublicSentiment, 1.5), (TechInnovation, 1.2)]),
        asset("XRP", "Ripple", Crypto, 0.5, 0.08, 0.0001,
            &[(SecRegulation, -3.0), (PublicSentiment, 2.0)]),
        asset("SOL", "Solana", Crypto, 165.0, 0.09, 0.0012,
            &[(TechInnovation, 1.5), (PublicSentiment, 1.8), (GlobalStability, -0.5)]),
        asset("ADA", "Cardano", Crypto, 0.45, 0.07, 0.0005,
            &[(TechInnovation, 1.0), (PublicSentiment, 1.2)]),
        asset("DOGE", "Dogecoin", Crypto, 0.16, 0.15, 0.0,
            &[(PublicSentiment, 3.0)]),
        asset("SHIB", "Shiba Inu", Crypto, 0.000025, 0.20, 0.0,
            &[(PublicSentiment, 3.5)]),

        // Pharma
        asset("PFE", "Pfizer Inc.", Pharma, 28.0, 0.012, 0.0001,
            &[(PharmaDemand, 1.5), (GlobalStability, 0.3)]),
        asset("MRNA", "Moderna, Inc.", Pharma, 150.0, 0.04, 0.0002,
            &[(PharmaDemand, 2.0), (TechInnovation, 0.8)]),
        asset("JNJ", "Johnson & Johnson", Pharma, 145.0, 0.01, 0.0001,
            &[(PharmaDemand, 1.0), (GlobalStability, 0.5)]),
        asset("ROG", "Roche Holding AG", Pharma, 250.0, 0.011, 0.0002,
            &[(PharmaDemand, 1.2), (EuEconomy, 0.8)]),
        asset("NVS", "Novartis AG", Pharma, 105.0, 0.01, 0.0001,
            &[(PharmaDemand, 1.1), (EuEconomy, 0.7)]),
        asset("AZN", "AstraZeneca PLC", Pharma, 79.0, 0.013, 0.0001,
            &[(PharmaDemand, 1.3), (EuEconomy, 0.5)]),

        // Real estate
        asset("NY_RealEstate", "New York Real Estate", RealEstate, 1500.0, 0.005, 0.0003,
            &[(UsEconomy, 1.5), (UsFedPolicy, -2.0), (GlobalStability, 0.8)]),
        asset("VAN_RealEstate", "Vancouver Real Estate", RealEstate, 1200.0, 0.006, 0.0004,
            &[(ChinaEconomy, 1.2), (AsiaTensions, 1.0), (GlobalStability, 0.5)]),
        asset("DXB_RealEstate", "Dubai Real Estate", RealEstate, 1000.0, 0.008, 0.0005,
            &[(MiddleEastTension, -1.0), (GlobalStability, 1.2), (OilSupply, 0.8)]),
        asset("TYO_RealEstate", "Tokyo Real Estate", RealEstate, 1300.0, 0.004, 0.0002,
            &[(JapanEconomy, 1.8), (GlobalStability, 0.7)]),

        // Global stocks
        asset("TCEHY", "Tencent Holdings", Global, 48.0, 0.025, 0.0004,
            &[(ChinaEconomy, 1.8), (AsiaTensions, -1.0), (SecRegulation, -0.8)]),
        asset("BABA", "Alibaba Group", Global, 80.0, 0.03, 0.0003,
            &[(ChinaEconomy, 2.0), (AsiaTensions, -1.2), (GlobalSupplyChain, 0.5)]),
        asset("SAOC", "Saudi Aramco", Global, 7.5, 0.015, 0.0001,
            &[(OilSupply, 1.5), (MiddleEastTension, 1.0)]),
        asset("TM", "Toyota Motor Corp", Global, 200.0, 0.012, 0.0002,
            &[(JapanEconomy, 1.2), (GlobalSupplyChain, -0.8), (OilSupply, -0.3)]),
        asset("SSNLF", "Samsung Electronics", Global, 1500.0, 0.02, 0.0005,
            &[(TechInnovation, 1.0), (GlobalSupplyChain, -1.2), (AsiaTensions, -0.8)]),
        asset("LVMH", "LVMH", Global, 780.0, 0.015, 0.0003,
            &[(EuEconomy, 1.2), (ChinaEconomy, 0.8), (PublicSentiment, 0.7)]),
        asset("ASML", "ASML Holding", Global, 1050.0, 0.028, 0.0009,
            &[(TechInnovation, 2.2), (GlobalSupplyChain, -2.0), (ChinaEconomy, -1.0)]),
        asset("VOW3", "Volkswagen AG", Global, 120.0, 0.018, 0.0001,
            &[(EuEconomy, 1.0), (GlobalSupplyChain, -0.7), (OilSupply, -0.5)]),
        asset("TATA", "Tata Group", Global, 115.0, 0.02, 0.0006,
            &[(IndiaEconomy, 2.0), (GlobalStability, 0.5)]),

        // Industrial
        asset("CAT", "Caterpillar Inc.", AssetCategory::Industrial, 330.0, 0.014, 0.0002,
            &[(UsEconomy, 1.3), (GlobalSupplyChain, -0.5), (UsJobGrowth, 0.8)]),
        asset("SIE", "Siemens AG", AssetCategory::Industrial, 170.0, 0.013, 0.0002,
            &[(EuEconomy, 1.5), (GlobalSupplyChain, -0.6), (TechInnovation, 0.4)]),

        // Consumer
        asset("PG", "Procter & Gamble", Consumer, 168.0, 0.008, 0.0001,
            &[(UsEconomy, 0.8), (GlobalStability, 0.6), (PublicSentiment, 0.4)]),
        asset("NEST", "Nestlé S.A.", Consumer, 102.0, 0.007, 0.0001,
            &[(EuEconomy, 0.7), (GlobalStability, 0.7)]),
    ]
}

#[rustfmt::skip]
fn standard_initial_factors() -> FactorMap {
    use GlobalFactor::*;

    [
        (GlobalStability, 0.5), (UsEconomy, 0.6), (ChinaEconomy, 0.7),
        (EuEconomy, 0.5), (JapanEconomy, 0.4), (IndiaEconomy, 0.6),
        (RussiaEconomy, 0.3), (MiddleEastTension, 0.4), (AsiaTensions, 0.3),
        (TechInnovation, 0.6), (GlobalSupplyChain, 0.7), (OilSupply, 0.5),
        (UsFedPolicy, 0.5), (SecRegulation, 0.5), (UsJobGrowth, 0.6),
        (PublicSentiment, 0.5), (ClimateChangeImpact, 0.2), (PharmaDemand, 0.4),
        (Industrial, 0.5),
    ]
    .into_iter()
    .collect()
}
