use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::ValidationError;
use crate::month::MonthLabel;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// Lenient lookup used for `<select>` values; anything unknown is `None`
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "Income" => Some(TransactionType::Income),
            "Expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded income or expense. Never edited once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: Amount,
    /// Exactly what the user typed into the date field
    pub date: String,
    /// Taken from the month selector at submission time, not from `date`
    pub month: MonthLabel,
}

/// Raw values of the transaction form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub category: String,
    pub amount: String,
    pub date: String,
}

impl TransactionDraft {
    /// Turn the form values into a transaction tagged with `month`
    pub fn into_transaction(self, month: MonthLabel) -> Result<Transaction, ValidationError> {
        let amount = Amount::parse(&self.amount)?;
        Ok(Transaction {
            kind: self.kind,
            category: self.category,
            amount,
            date: self.date,
            month,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> MonthLabel {
        MonthLabel::new(2024, 3).unwrap()
    }

    #[test]
    fn test_draft_fixes_amount_to_two_digits() {
        let draft = TransactionDraft {
            kind: TransactionType::Expense,
            category: "Groceries".to_string(),
            amount: "40".to_string(),
            date: "2024-03-02".to_string(),
        };
        let tx = draft.into_transaction(march()).unwrap();
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.amount.to_string(), "40.00");
        assert_eq!(tx.date, "2024-03-02");
        assert_eq!(tx.month, march());
    }

    #[test]
    fn test_draft_rejects_non_numeric_amount() {
        let draft = TransactionDraft {
            amount: "ten".to_string(),
            ..TransactionDraft::default()
        };
        assert_eq!(
            draft.into_transaction(march()),
            Err(ValidationError::InvalidAmount("ten".to_string()))
        );
    }

    #[test]
    fn test_wire_format() {
        let tx = Transaction {
            kind: TransactionType::Income,
            category: "Salary".to_string(),
            amount: Amount::parse("100").unwrap(),
            date: "2024-03-01".to_string(),
            month: march(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Income",
                "category": "Salary",
                "amount": "100.00",
                "date": "2024-03-01",
                "month": "March 2024"
            })
        );
    }

    #[test]
    fn test_form_value_lookup() {
        assert_eq!(TransactionType::from_form_value("Expense"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::from_form_value("Transfer"), None);
        assert_eq!(TransactionType::default(), TransactionType::Income);
    }
}
