//! The single loan facility: borrowing, repayment, monthly interest.
//!
//! Invariant: `0 <= loan.amount <= loan.max_loan` after every command and
//! accrual. Interest may push cash negative; nothing is force-liquidated.

use crate::engine::engine::Engine;
use crate::engine::fmt_money;
use crate::models::log::LogCategory;

impl Engine {
    pub(crate) fn handle_take_loan(&mut self, amount: f64) {
        if !(amount > 0.0 && amount.is_finite()) {
            self.log(
                LogCategory::Bank,
                format!("Cannot take a loan: {amount} is not a positive amount."),
            );
            return;
        }
        let loan = &self.state.player.loan;
        if loan.amount + amount > loan.max_loan {
            self.log(
                LogCategory::Bank,
                format!(
                    "Loan of {} refused: it would exceed the {} credit limit.",
                    fmt_money(amount),
                    fmt_money(loan.max_loan)
                ),
            );
            return;
        }

        self.state.player.loan.amount += amount;
        self.state.player.cash += amount;
        self.log(
            LogCategory::Bank,
            format!("Took out a loan for {}.", fmt_money(amount)),
        );
    }

    pub(crate) fn handle_repay_loan(&mut self, amount: f64) {
        if !amount.is_finite() {
            self.log(
                LogCategory::Bank,
                format!("Cannot repay: {amount} is not a valid amount."),
            );
            return;
        }

        let player = &self.state.player;
        let effective = amount.min(player.loan.amount).min(player.cash);
        if effective <= 0.0 {
            self.log(
                LogCategory::Bank,
                "Cannot repay: nothing repayable against the loan.".to_string(),
            );
            return;
        }

        self.state.player.cash -= effective;
        self.state.player.loan.amount -= effective;
        self.log(
            LogCategory::Bank,
            format!("Repaid {} of the loan.", fmt_money(effective)),
        );
    }

    /// Month-boundary interest accrual: one twelfth of the annual rate on
    /// the outstanding balance. Cash may go negative.
    pub(crate) fn accrue_loan_interest(&mut self) {
        let interest = self.state.player.loan.monthly_interest();
        if interest <= 0.0 {
            return;
        }
        self.state.player.cash -= interest;
        self.log(
            LogCategory::Bank,
            format!("Paid {} in loan interest.", fmt_money(interest)),
        );
    }
}
