//! Month labels ("March 2024") and the window of months offered for filtering.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MonthLabelError;

/// One calendar month, displayed as "{full month name} {4-digit year}"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthLabel {
    year: i32,
    month: u32,
}

impl MonthLabel {
    /// `month` is 1-based; out of range values are rejected
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The month `offset` months away (negative goes back)
    pub fn shifted(&self, offset: i32) -> Option<Self> {
        let first = self.first_day()?;
        let moved = if offset >= 0 {
            first.checked_add_months(Months::new(offset.unsigned_abs()))
        } else {
            first.checked_sub_months(Months::new(offset.unsigned_abs()))
        }?;
        Some(Self::of(moved))
    }

    fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("January")
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:04}", self.month_name(), self.year)
    }
}

impl FromStr for MonthLabel {
    type Err = MonthLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, year) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| MonthLabelError::Format(s.to_string()))?;

        let month = name
            .parse::<Month>()
            .ok()
            // chrono also accepts "Mar"/"march"; labels only ever use the full name
            .filter(|m| m.name() == name)
            .ok_or_else(|| MonthLabelError::UnknownMonth(name.to_string()))?;

        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| MonthLabelError::Year(year.to_string()))?;

        Ok(Self {
            year,
            month: month.number_from_month(),
        })
    }
}

impl Serialize for MonthLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The fixed window of months centred on "now"
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCatalog {
    labels: Vec<MonthLabel>,
    current: MonthLabel,
}

impl MonthCatalog {
    /// Build `before + 1 + after` labels in chronological order around `today`
    pub fn around(today: NaiveDate, before: u32, after: u32) -> Self {
        let current = MonthLabel::of(today);
        let start = -(before as i32);
        let end = after as i32;
        let labels = (start..=end)
            .filter_map(|offset| current.shifted(offset))
            .collect::<Vec<_>>();

        log::debug!(
            "month catalog built: {} months from {} to {}",
            labels.len(),
            labels.first().map(|l| l.to_string()).unwrap_or_default(),
            labels.last().map(|l| l.to_string()).unwrap_or_default(),
        );

        Self { labels, current }
    }

    pub fn labels(&self) -> &[MonthLabel] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthLabel> {
        self.labels.iter()
    }

    /// The label of the month the catalog was built for, selected by default
    pub fn current(&self) -> MonthLabel {
        self.current
    }

    pub fn contains(&self, label: &MonthLabel) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label_display() {
        assert_eq!(MonthLabel::new(2024, 3).unwrap().to_string(), "March 2024");
        assert_eq!(MonthLabel::new(987, 12).unwrap().to_string(), "December 0987");
        assert!(MonthLabel::new(2024, 13).is_none());
    }

    #[test]
    fn test_label_parse() {
        let label: MonthLabel = "March 2024".parse().unwrap();
        assert_eq!(label, MonthLabel::new(2024, 3).unwrap());

        assert!(matches!("March".parse::<MonthLabel>(), Err(MonthLabelError::Format(_))));
        assert!(matches!("Mar 2024".parse::<MonthLabel>(), Err(MonthLabelError::UnknownMonth(_))));
        assert!(matches!("march 2024".parse::<MonthLabel>(), Err(MonthLabelError::UnknownMonth(_))));
        assert!(matches!("March twenty".parse::<MonthLabel>(), Err(MonthLabelError::Year(_))));
    }

    #[test]
    fn test_label_serde_uses_display_form() {
        let label = MonthLabel::new(2025, 6).unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"June 2025\"");
        let back: MonthLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }

    #[test]
    fn test_catalog_has_eleven_ordered_distinct_labels() {
        let catalog = MonthCatalog::around(date(2024, 3, 15), 5, 5);
        let labels: Vec<String> = catalog.iter().map(|l| l.to_string()).collect();

        assert_eq!(catalog.len(), 11);
        assert_eq!(labels.first().unwrap(), "October 2023");
        assert_eq!(labels[5], "March 2024");
        assert_eq!(labels.last().unwrap(), "August 2024");
        assert_eq!(catalog.current().to_string(), "March 2024");

        let mut sorted = catalog.labels().to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, catalog.labels());
    }

    #[test]
    fn test_catalog_rolls_over_years() {
        let catalog = MonthCatalog::around(date(2025, 1, 31), 5, 5);
        let labels: Vec<String> = catalog.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels[0], "August 2024");
        assert_eq!(labels[4], "December 2024");
        assert_eq!(labels[5], "January 2025");
        assert_eq!(labels[10], "June 2025");

        let catalog = MonthCatalog::around(date(2024, 10, 1), 5, 5);
        assert_eq!(catalog.labels()[10].to_string(), "March 2025");
    }

    #[test]
    fn test_catalog_contains_current() {
        let today = date(2024, 7, 4);
        let catalog = MonthCatalog::around(today, 5, 5);
        assert!(catalog.contains(&MonthLabel::of(today)));
        assert!(!catalog.contains(&MonthLabel::new(2023, 1).unwrap()));
    }
}
