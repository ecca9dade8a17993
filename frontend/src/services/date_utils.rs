use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        log::warn!("browser returned an invalid date {}-{}-{}", year, month, day);
        NaiveDate::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_js_date() {
        let now = js_sys::Date::new_0();
        let today = today();
        assert_eq!(today.year(), now.get_full_year() as i32);
        assert_eq!(today.month(), now.get_month() + 1);
    }
}
