//! # Tracker
//!
//! The application object behind the page. It owns the transaction store,
//! the month catalog, the current month selection and the repository the
//! store is mirrored to. The UI calls its named actions in response to
//! events and renders the returned [`MonthView`].
//!
//! ## Actions
//!
//! - [`Tracker::start`]: page load
//! - [`Tracker::select_month`]: month selector change
//! - [`Tracker::submit`]: form submission
//! - [`Tracker::load_transactions`]: rebuild the table rows and totals

use chrono::NaiveDate;

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::month::{MonthCatalog, MonthLabel};
use crate::store::{TransactionRepository, TransactionStore};
use crate::summary::MonthlySummary;
use crate::transaction::{Transaction, TransactionDraft};

/// Everything the page shows for the selected month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub month: MonthLabel,
    pub rows: Vec<Transaction>,
    pub summary: MonthlySummary,
}

pub struct Tracker<R: TransactionRepository> {
    config: TrackerConfig,
    repository: R,
    store: TransactionStore,
    catalog: MonthCatalog,
    selected: MonthLabel,
}

impl<R: TransactionRepository> Tracker<R> {
    pub fn start(config: TrackerConfig, repository: R, today: NaiveDate) -> Self {
        let store = TransactionStore::load_from(&repository);
        let catalog = MonthCatalog::around(today, config.months_before, config.months_after);
        let selected = catalog.current();

        log::info!(
            "tracker started on {} with {} transactions",
            selected,
            store.len()
        );

        Self {
            config,
            repository,
            store,
            catalog,
            selected,
        }
    }

    pub fn catalog(&self) -> &MonthCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn selected_month(&self) -> MonthLabel {
        self.selected
    }

    /// Any label is accepted; the selector only ever offers catalog months
    pub fn select_month(&mut self, month: MonthLabel) {
        if !self.catalog.contains(&month) {
            log::debug!("selected {} which is outside the month catalog", month);
        }
        self.selected = month;
    }

    /// Rows of the selected month in store order, plus its totals
    pub fn load_transactions(&self) -> MonthView {
        let rows = self.store.in_month(&self.selected).cloned().collect();
        MonthView {
            month: self.selected,
            rows,
            summary: self.summary(),
        }
    }

    pub fn summary(&self) -> MonthlySummary {
        MonthlySummary::for_month(&self.store, &self.selected)
    }

    /// Record a transaction for the selected month and write the whole list back.
    ///
    /// A rejected draft leaves the store untouched. When only the write fails the
    /// transaction stays in memory and `TrackerError::Storage` is returned.
    pub fn submit(&mut self, draft: TransactionDraft) -> Result<&Transaction, TrackerError> {
        let transaction = draft.into_transaction(self.selected)?;
        log::info!(
            "recording {} of {} in {}",
            transaction.kind,
            transaction.amount,
            transaction.month
        );
        self.store.push(transaction);

        if let Err(e) = self.store.persist(&self.repository) {
            log::error!("failed to persist transactions: {:#}", e);
            return Err(TrackerError::Storage(format!("{:#}", e)));
        }

        self.store
            .as_slice()
            .last()
            .ok_or_else(|| TrackerError::Storage("store empty after append".to_string()))
    }

    /// A blank form with the configured default type
    pub fn blank_draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.config.default_type,
            ..TransactionDraft::default()
        }
    }
}
