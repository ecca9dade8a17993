use yew::prelude::*;
use shared::{ChartStyle, MonthLabel, Tracker, TrackerError, TransactionDraft, TransactionType};

mod components;
mod services;

use components::{IncomeExpensesChart, SummaryPanel, TransactionForm, TransactionTable};
use services::{date_utils, load_config, BrowserRepository, Logger};

/// Message shown under the form after a submission; `None` clears it
fn submit_message(result: &Result<(), TrackerError>) -> Option<String> {
    match result {
        Ok(()) => None,
        // Recorded for this page, just not in session storage
        Err(TrackerError::Storage(reason)) => {
            Some(format!("Transaction added but not saved: {}", reason))
        }
        Err(e) => Some(e.to_string()),
    }
}

#[function_component(App)]
fn app() -> Html {
    let tracker = use_mut_ref(|| {
        let config = load_config();
        log::set_max_level(config.log_level_filter());
        let repository = BrowserRepository::open(&config.storage_key);
        Tracker::start(config, repository, date_utils::today())
    });
    let view = {
        let tracker = tracker.clone();
        use_state(move || tracker.borrow().load_transactions())
    };
    let draft = {
        let tracker = tracker.clone();
        use_state(move || tracker.borrow().blank_draft())
    };
    let form_error = use_state(|| Option::<String>::None);

    // Rebuild the table rows and totals for the selected month
    let load_transactions = {
        let tracker = tracker.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            view.set(tracker.borrow().load_transactions());
        })
    };

    let on_month_change = {
        let tracker = tracker.clone();
        let load_transactions = load_transactions.clone();
        Callback::from(move |month: MonthLabel| {
            tracker.borrow_mut().select_month(month);
            load_transactions.emit(());
        })
    };

    let on_type_change = {
        let draft = draft.clone();
        Callback::from(move |kind: TransactionType| {
            draft.set(TransactionDraft { kind, ..(*draft).clone() });
        })
    };

    let on_category_change = {
        let draft = draft.clone();
        Callback::from(move |category: String| {
            draft.set(TransactionDraft { category, ..(*draft).clone() });
        })
    };

    let on_amount_change = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        Callback::from(move |amount: String| {
            draft.set(TransactionDraft { amount, ..(*draft).clone() });
            form_error.set(None);
        })
    };

    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |date: String| {
            draft.set(TransactionDraft { date, ..(*draft).clone() });
        })
    };

    let on_submit = {
        let tracker = tracker.clone();
        let draft = draft.clone();
        let form_error = form_error.clone();
        let load_transactions = load_transactions.clone();
        Callback::from(move |_: ()| {
            let result = tracker.borrow_mut().submit((*draft).clone()).map(|_| ());
            if let Err(e) = &result {
                log::debug!("submission not fully applied: {}", e);
            }
            form_error.set(submit_message(&result));

            let recorded = !matches!(result, Err(TrackerError::Validation(_)));
            if recorded {
                load_transactions.emit(());
                draft.set(tracker.borrow().blank_draft());
            }
        })
    };

    let summary = view.summary;
    let selected_month = tracker.borrow().selected_month();
    let months = tracker.borrow().catalog().labels().to_vec();

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Personal Finance Tracker"}</h1>
                    <span class="header-month">{view.month.to_string()}</span>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <TransactionForm
                        draft={(*draft).clone()}
                        {months}
                        {selected_month}
                        form_error={(*form_error).clone()}
                        {on_type_change}
                        {on_category_change}
                        {on_amount_change}
                        {on_date_change}
                        {on_month_change}
                        {on_submit}
                    />

                    <SummaryPanel {summary} />

                    <IncomeExpensesChart
                        income={summary.income}
                        expenses={summary.expenses}
                        style={ChartStyle::default()}
                    />

                    <TransactionTable rows={view.rows.clone()} />
                </div>
            </main>
        </>
    }
}

fn main() {
    Logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ValidationError;

    #[test]
    fn test_submit_message_clears_on_success() {
        assert_eq!(submit_message(&Ok(())), None);
    }

    #[test]
    fn test_submit_message_for_rejected_amount() {
        let result = Err(TrackerError::Validation(ValidationError::AmountTooLarge(
            "1000000000000.00".to_string(),
        )));
        assert_eq!(
            submit_message(&result).as_deref(),
            Some("Amount cannot exceed 1000000000000.00")
        );
    }

    #[test]
    fn test_submit_message_for_failed_save() {
        let result = Err(TrackerError::Storage("quota exceeded".to_string()));
        assert_eq!(
            submit_message(&result).as_deref(),
            Some("Transaction added but not saved: quota exceeded")
        );
    }
}
