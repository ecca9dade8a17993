pub mod forms;
pub mod month_selector;
pub mod transactions;

pub use forms::TransactionForm;
pub use month_selector::MonthSelector;
pub use transactions::{IncomeExpensesChart, SummaryPanel, TransactionTable};
