//! # Transaction Store
//!
//! The ordered, append-only list of transactions plus the storage seam it is
//! mirrored to. The store itself never touches the browser; the frontend
//! supplies a [`TransactionRepository`] backed by session storage.

use std::cell::RefCell;

use anyhow::{Context, Result};

use crate::month::MonthLabel;
use crate::transaction::Transaction;

/// Where the full transaction list is kept between page loads
pub trait TransactionRepository {
    /// Read the persisted list. A missing entry is an empty list, not an error.
    fn load(&self) -> Result<Vec<Transaction>>;

    /// Overwrite the persisted list with `transactions`
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
}

/// Keeps the serialized list in memory, exactly as it would be written to storage
#[derive(Debug, Default)]
pub struct MemoryRepository {
    raw: RefCell<Option<String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already serialized value, e.g. a corrupt or legacy one
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl TransactionRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Transaction>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => serde_json::from_str(raw).context("stored transactions are malformed"),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(transactions).context("failed to serialize transactions")?;
        *self.raw.borrow_mut() = Some(raw);
        Ok(())
    }
}

/// In-memory transaction list, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load whatever the repository holds; unreadable data counts as no data
    pub fn load_from<R: TransactionRepository + ?Sized>(repository: &R) -> Self {
        match repository.load() {
            Ok(transactions) => {
                log::info!("loaded {} stored transactions", transactions.len());
                Self { transactions }
            }
            Err(e) => {
                log::warn!("ignoring stored transactions: {:#}", e);
                Self::new()
            }
        }
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Write the entire list to `repository`
    pub fn persist<R: TransactionRepository + ?Sized>(&self, repository: &R) -> Result<()> {
        repository.save(&self.transactions)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions tagged with `month`, in the order they were added
    pub fn in_month<'a>(&'a self, month: &'a MonthLabel) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions.iter().filter(move |t| &t.month == month)
    }
}

impl From<Vec<Transaction>> for TransactionStore {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}
