//! Session storage backing for the transaction list.

use anyhow::{anyhow, Context, Result};
use gloo::storage::errors::StorageError;
use gloo::storage::{SessionStorage, Storage};
use shared::{MemoryRepository, Transaction, TransactionRepository};

/// The transaction list under one session storage key, as JSON
#[derive(Debug, Clone)]
pub struct SessionRepository {
    key: String,
}

impl SessionRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TransactionRepository for SessionRepository {
    fn load(&self) -> Result<Vec<Transaction>> {
        let stored: Result<Vec<Transaction>, StorageError> = SessionStorage::get(&self.key);
        match stored {
            Ok(transactions) => Ok(transactions),
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(anyhow!("{}", e)).with_context(|| format!("failed to read '{}'", self.key)),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        SessionStorage::set(&self.key, transactions)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("failed to write '{}'", self.key))
    }
}

/// Session storage when the browser offers it, otherwise an in-memory list for this page
#[derive(Debug)]
pub enum BrowserRepository {
    Session(SessionRepository),
    Memory(MemoryRepository),
}

impl BrowserRepository {
    pub fn open(key: &str) -> Self {
        if session_storage_available() {
            BrowserRepository::Session(SessionRepository::new(key))
        } else {
            log::warn!("session storage unavailable, transactions will not survive a reload");
            BrowserRepository::Memory(MemoryRepository::new())
        }
    }
}

impl TransactionRepository for BrowserRepository {
    fn load(&self) -> Result<Vec<Transaction>> {
        match self {
            BrowserRepository::Session(repo) => repo.load(),
            BrowserRepository::Memory(repo) => repo.load(),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        match self {
            BrowserRepository::Session(repo) => repo.save(transactions),
            BrowserRepository::Memory(repo) => repo.save(transactions),
        }
    }
}

fn session_storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .is_some()
}
