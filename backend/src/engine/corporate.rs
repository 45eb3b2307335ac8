//! Company economy: establishment, upgrades, monthly income settlement.
//!
//! Income and upgrade cost are always recomputed from `(kind, level)` after
//! an upgrade, never accumulated in place, so any company's economics can be
//! reproduced from its state alone. Upgrade outcomes resolve from a single
//! RNG draw against the cumulative thresholds in the tunables.

use crate::core::time::GameDate;
use crate::engine::engine::Engine;
use crate::engine::fmt_money;
use crate::models::company::{income_at_level, upgrade_cost_at_level, Company, CompanyType};
use crate::models::log::LogCategory;

impl Engine {
    pub(crate) fn handle_establish_company(&mut self, kind: CompanyType, name: Option<String>) {
        let Some(spec) = self.reference.company_types.get(&kind) else {
            self.log(
                LogCategory::Corporate,
                format!("Cannot establish: no catalog entry for {kind:?}."),
            );
            return;
        };
        let type_name = spec.name.clone();
        let base_cost = spec.base_cost;
        let base_income = spec.base_income;

        let Some(country) = self
            .reference
            .countries
            .get(&self.state.player.current_residency)
        else {
            self.log(
                LogCategory::Corporate,
                "Cannot establish a company without a residency.".to_string(),
            );
            return;
        };

        let cost = base_cost * country.company_cost_modifier;
        if self.state.player.cash < cost {
            self.log(
                LogCategory::Corporate,
                format!(
                    "Cannot establish {type_name}: insufficient funds for the {} cost.",
                    fmt_money(cost)
                ),
            );
            return;
        }
        self.state.player.cash -= cost;

        let company_name =
            name.unwrap_or_else(|| format!("{} #{}", type_name, self.state.player.companies.len() + 1));
        let company = Company {
            id: self.next_id("company"),
            name: company_name.clone(),
            kind,
            level: 1,
            monthly_income: income_at_level(base_income, 1),
            upgrade_cost: upgrade_cost_at_level(base_cost, 1),
            income_frozen_until: None,
        };
        self.state.player.companies.push(company);

        self.log(
            LogCategory::Corporate,
            format!("Established new company: {company_name}."),
        );
    }

    pub(crate) fn handle_upgrade_company(&mut self, company_id: &str) {
        let Some(index) = self
            .state
            .player
            .companies
            .iter()
            .position(|c| c.id == company_id)
        else {
            self.log(
                LogCategory::Corporate,
                format!("Cannot upgrade: unknown company '{company_id}'."),
            );
            return;
        };

        let (kind, cost, company_name) = {
            let company = &self.state.player.companies[index];
            (company.kind, company.upgrade_cost, company.name.clone())
        };
        if self.state.player.cash < cost {
            self.log(
                LogCategory::Corporate,
                format!(
                    "Cannot upgrade {company_name}: insufficient funds for the {} cost.",
                    fmt_money(cost)
                ),
            );
            return;
        }
        // Catalog entries for all four kinds are guaranteed by validation.
        let Some(spec) = self.reference.company_types.get(&kind) else {
            return;
        };
        let base_cost = spec.base_cost;
        let base_income = spec.base_income;

        self.state.player.cash -= cost;

        // One draw resolves the outcome: complication, breakthrough, normal.
        let u = self.rng.next_f64();
        let freeze_until = self.state.date.start_of_next_month();
        let t = &self.tunables;

        let message;
        let new_level;
        if u < t.complication_threshold {
            let surcharge = cost * t.complication_surcharge;
            self.state.player.cash -= surcharge;
            let company = &mut self.state.player.companies[index];
            company.level += 1;
            company.income_frozen_until = Some(freeze_until);
            new_level = company.level;
            message = format!(
                "Upgrade of {company_name} hit complications: an extra {} was spent and income is suspended until {freeze_until}.",
                fmt_money(surcharge)
            );
        } else if u < t.breakthrough_threshold {
            let refund = cost * t.breakthrough_refund;
            self.state.player.cash += refund;
            let company = &mut self.state.player.companies[index];
            company.level += 2;
            new_level = company.level;
            message = format!(
                "Breakthrough at {company_name}: jumped to level {new_level}, {} refunded.",
                fmt_money(refund)
            );
        } else {
            let company = &mut self.state.player.companies[index];
            company.level += 1;
            new_level = company.level;
            message = format!("Upgraded {company_name} to level {new_level}.");
        }

        let company = &mut self.state.player.companies[index];
        company.monthly_income = income_at_level(base_income, new_level);
        company.upgrade_cost = upgrade_cost_at_level(base_cost, new_level);

        self.log(LogCategory::Corporate, message);
    }

    /// Month-boundary income pass, called while the calendar still shows the
    /// last day of the outgoing month; `incoming` is the 1st being entered.
    ///
    /// Companies frozen at the outgoing date are skipped and logged; a freeze
    /// reached by the incoming date is cleared so the next settlement pays.
    pub(crate) fn settle_company_income(&mut self, incoming: GameDate) {
        let today = self.state.date;
        let mut total = 0.0;
        let mut skipped: Vec<String> = Vec::new();

        for company in &mut self.state.player.companies {
            if let Some(until) = company.income_frozen_until {
                if company.is_income_frozen(&today) {
                    skipped.push(company.name.clone());
                    if incoming.is_on_or_after(&until) {
                        company.income_frozen_until = None;
                    }
                    continue;
                }
                company.income_frozen_until = None;
            }
            total += company.monthly_income;
        }

        if total > 0.0 {
            self.state.player.cash += total;
            self.log(
                LogCategory::Corporate,
                format!("Received {} in income from companies.", fmt_money(total)),
            );
        }
        for name in skipped {
            self.log(
                LogCategory::Corporate,
                format!("Income from {name} is suspended while it recovers from complications."),
            );
        }
    }
}
