//! Bar chart model for the income/expenses comparison.
//!
//! The model knows nothing about canvases; the frontend reads
//! [`BarChart::bars`] and [`ChartStyle`] and draws them.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category labels, in the order the bars are drawn
pub const BAR_LABELS: [&str; 2] = ["Expenses", "Income"];

/// Colours are CSS colour strings (`#rrggbb` or `rgba(r, g, b, a)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub dataset_label: String,
    pub bar_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub tick_color: String,
    pub y_grid_color: String,
    pub show_x_grid: bool,
    pub show_legend: bool,
    pub begin_at_zero: bool,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            dataset_label: "Amount ($)".to_string(),
            bar_color: "#0066cc".to_string(),
            border_color: "#0059b3".to_string(),
            border_width: 1,
            tick_color: "#ecf0f1".to_string(),
            y_grid_color: "rgba(255, 255, 255, 0.1)".to_string(),
            show_x_grid: false,
            show_legend: false,
            begin_at_zero: true,
            responsive: true,
            maintain_aspect_ratio: false,
        }
    }
}

/// Two bars: expenses first, income second
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    style: ChartStyle,
    data: [Decimal; 2],
}

impl BarChart {
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            data: [Decimal::ZERO; 2],
        }
    }

    pub fn update(&mut self, income: Decimal, expenses: Decimal) {
        self.data = [expenses, income];
    }

    pub fn data(&self) -> [Decimal; 2] {
        self.data
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// `(label, value)` pairs ready for plotting
    pub fn bars(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        BAR_LABELS
            .iter()
            .zip(self.data.iter())
            .map(|(label, value)| (*label, value.to_f64().unwrap_or(0.0)))
    }

    /// Upper bound of the value axis; never below 1 so an empty month still shows an axis
    pub fn y_max(&self) -> f64 {
        let top = self.bars().map(|(_, v)| v).fold(0.0_f64, f64::max);
        if top <= 0.0 {
            1.0
        } else {
            top * 1.1
        }
    }

    /// Lower bound of the value axis
    pub fn y_min(&self) -> f64 {
        if self.style.begin_at_zero {
            0.0
        } else {
            self.bars().map(|(_, v)| v).fold(f64::INFINITY, f64::min) * 0.9
        }
    }
}

/// Owns the single chart instance of the page
#[derive(Debug, Default)]
pub struct ChartRenderer {
    chart: Option<BarChart>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the chart with zero data. Only the first call has an effect.
    pub fn initialize(&mut self, style: ChartStyle) {
        if self.chart.is_some() {
            log::warn!("chart already initialized, ignoring");
            return;
        }
        self.chart = Some(BarChart::new(style));
        log::debug!("chart initialized");
    }

    /// Push new totals into the chart. Returns `false` when there is no chart yet.
    pub fn update(&mut self, income: Decimal, expenses: Decimal) -> bool {
        match self.chart.as_mut() {
            Some(chart) => {
                chart.update(income, expenses);
                true
            }
            None => {
                log::debug!("chart update skipped: not initialized");
                false
            }
        }
    }

    pub fn chart(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = ChartStyle::default();
        assert_eq!(style.bar_color, "#0066cc");
        assert_eq!(style.border_color, "#0059b3");
        assert!(style.begin_at_zero);
        assert!(!style.show_legend);
        assert!(!style.show_x_grid);
    }

    #[test]
    fn test_update_orders_expenses_first() {
        let mut chart = BarChart::new(ChartStyle::default());
        assert_eq!(chart.data(), [Decimal::ZERO, Decimal::ZERO]);

        chart.update(Decimal::new(10000, 2), Decimal::new(4000, 2));
        assert_eq!(chart.data(), [Decimal::new(4000, 2), Decimal::new(10000, 2)]);

        let bars: Vec<_> = chart.bars().collect();
        assert_eq!(bars, vec![("Expenses", 40.0), ("Income", 100.0)]);
    }

    #[test]
    fn test_axis_bounds() {
        let mut chart = BarChart::new(ChartStyle::default());
        assert_eq!(chart.y_min(), 0.0);
        assert_eq!(chart.y_max(), 1.0);

        chart.update(Decimal::new(100, 0), Decimal::new(40, 0));
        assert!(chart.y_max() > 100.0);
    }

    #[test]
    fn test_renderer_update_before_initialize_is_noop() {
        let mut renderer = ChartRenderer::new();
        assert!(!renderer.update(Decimal::ONE, Decimal::ONE));
        assert!(renderer.chart().is_none());

        renderer.initialize(ChartStyle::default());
        assert!(renderer.update(Decimal::new(5, 0), Decimal::new(2, 0)));
        assert_eq!(renderer.chart().unwrap().data(), [Decimal::new(2, 0), Decimal::new(5, 0)]);
    }

    #[test]
    fn test_renderer_initialize_once() {
        let mut renderer = ChartRenderer::new();
        renderer.initialize(ChartStyle::default());
        renderer.update(Decimal::new(5, 0), Decimal::new(2, 0));

        renderer.initialize(ChartStyle::default());
        assert_eq!(renderer.chart().unwrap().data(), [Decimal::new(2, 0), Decimal::new(5, 0)]);
    }
}
