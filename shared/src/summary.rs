use rust_decimal::Decimal;

use crate::amount::format_money;
use crate::month::MonthLabel;
use crate::store::TransactionStore;
use crate::transaction::TransactionType;

/// Income, expenses and balance of one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

impl MonthlySummary {
    pub fn for_month(store: &TransactionStore, month: &MonthLabel) -> Self {
        let (income, expenses) = store.in_month(month).fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expenses), t| match t.kind {
                TransactionType::Income => (saturating_add(income, t.amount.value()), expenses),
                TransactionType::Expense => (income, saturating_add(expenses, t.amount.value())),
            },
        );

        Self {
            income,
            expenses,
            balance: income.checked_sub(expenses).unwrap_or(Decimal::MIN),
        }
    }

    pub fn income_text(&self) -> String {
        format_money(self.income)
    }

    pub fn expenses_text(&self) -> String {
        format_money(self.expenses)
    }

    pub fn balance_text(&self) -> String {
        format_money(self.balance)
    }
}

/// Totals pin at `Decimal::MAX` instead of panicking on overflow
fn saturating_add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        log::error!("monthly total overflowed, showing the largest representable value");
        Decimal::MAX
    })
}
