//! Domain logic of the finance tracker: transactions, month labels, monthly
//! totals and the chart model. Nothing in this crate touches the DOM.

pub mod amount;
pub mod chart;
pub mod config;
pub mod error;
pub mod month;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod transaction;

pub use amount::{format_money, Amount};
pub use chart::{BarChart, ChartRenderer, ChartStyle, BAR_LABELS};
pub use config::TrackerConfig;
pub use error::{MonthLabelError, TrackerError, ValidationError};
pub use month::{MonthCatalog, MonthLabel};
pub use store::{MemoryRepository, TransactionRepository, TransactionStore};
pub use summary::MonthlySummary;
pub use tracker::{MonthView, Tracker};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
