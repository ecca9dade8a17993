use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::MonthLabel;

#[derive(Properties, PartialEq)]
pub struct MonthSelectorProps {
    pub months: Vec<MonthLabel>,
    pub selected: MonthLabel,
    pub on_change: Callback<MonthLabel>,
}

/// The `<select id="month">` shared by the filter and the transaction form
#[function_component(MonthSelector)]
pub fn month_selector(props: &MonthSelectorProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<MonthLabel>() {
                Ok(month) => on_change.emit(month),
                Err(err) => log::warn!("ignoring month selection: {}", err),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="month">{"Month"}</label>
            <select id="month" name="month" {onchange}>
                {for props.months.iter().map(|month| {
                    let value = month.to_string();
                    html! {
                        <option value={value.clone()} selected={*month == props.selected}>
                            {value}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
