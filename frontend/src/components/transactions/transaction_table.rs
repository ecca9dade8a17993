use yew::prelude::*;
use shared::{Transaction, TransactionType};

pub const TABLE_HEADERS: [&str; 5] = ["Type", "Category", "Amount", "Date", "Month"];

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Rows of the selected month, in the order they were added
    pub rows: Vec<Transaction>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Transactions"}</h2>
            <div class="table-container">
                <table id="transactionTable" class="transactions-table">
                    <thead>
                        <tr>
                            {for TABLE_HEADERS.iter().map(|header| html! { <th>{*header}</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {for props.rows.iter().map(|transaction| {
                            let amount_class = match transaction.kind {
                                TransactionType::Income => "amount positive",
                                TransactionType::Expense => "amount negative",
                            };

                            html! {
                                <tr>
                                    <td class="type">{transaction.kind.as_str()}</td>
                                    <td class="category">{&transaction.category}</td>
                                    <td class={amount_class}>{transaction.amount.to_string()}</td>
                                    <td class="date">{&transaction.date}</td>
                                    <td class="month">{transaction.month.to_string()}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
