pub mod income_expenses_chart;
pub mod summary_panel;
pub mod transaction_table;

pub use income_expenses_chart::IncomeExpensesChart;
pub use summary_panel::SummaryPanel;
pub use transaction_table::TransactionTable;
