use yew::prelude::*;
use shared::MonthlySummary;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: MonthlySummary,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let summary = &props.summary;
    let balance_class = if summary.balance.is_sign_negative() && !summary.balance.is_zero() {
        "summary-value negative"
    } else {
        "summary-value positive"
    };

    html! {
        <section class="summary-section">
            <div class="summary-card">
                <span class="summary-label">{"Income"}</span>
                <span id="income" class="summary-value">{summary.income_text()}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"Expenses"}</span>
                <span id="expenses" class="summary-value">{summary.expenses_text()}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"Balance"}</span>
                <span id="balance" class={balance_class}>{summary.balance_text()}</span>
            </div>
        </section>
    }
}
