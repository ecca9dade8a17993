use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{MonthLabel, TransactionDraft, TransactionType};

use crate::components::MonthSelector;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    // Form state
    pub draft: TransactionDraft,
    pub months: Vec<MonthLabel>,
    pub selected_month: MonthLabel,
    pub form_error: Option<String>,

    // Event handlers
    pub on_type_change: Callback<TransactionType>,
    pub on_category_change: Callback<String>,
    pub on_amount_change: Callback<String>,
    pub on_date_change: Callback<String>,
    pub on_month_change: Callback<MonthLabel>,
    pub on_submit: Callback<()>,
}

fn input_value(callback: &Callback<String>) -> Callback<InputEvent> {
    let callback = callback.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        callback.emit(input.value());
    })
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let on_type_change = {
        let on_type_change = props.on_type_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match TransactionType::from_form_value(&select.value()) {
                Some(kind) => on_type_change.emit(kind),
                None => log::warn!("unknown transaction type '{}'", select.value()),
            }
        })
    };

    html! {
        <section class="add-transaction-section">
            <h2>{"Add Transaction"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form id="transactionForm" class="transaction-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select id="type" name="type" onchange={on_type_change}>
                        {for TransactionType::ALL.iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={*kind == props.draft.kind}>
                                {kind.as_str()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <input
                        type="text"
                        id="category"
                        placeholder="Salary, groceries, rent..."
                        required=true
                        value={props.draft.category.clone()}
                        oninput={input_value(&props.on_category_change)}
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0"
                        required=true
                        value={props.draft.amount.clone()}
                        oninput={input_value(&props.on_amount_change)}
                    />
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        required=true
                        value={props.draft.date.clone()}
                        oninput={input_value(&props.on_date_change)}
                    />
                </div>

                <MonthSelector
                    months={props.months.clone()}
                    selected={props.selected_month}
                    on_change={props.on_month_change.clone()}
                />

                <button type="submit" class="btn btn-primary">
                    {"Add Transaction"}
                </button>
            </form>
        </section>
    }
}
