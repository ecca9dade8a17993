use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use rust_decimal::Decimal;
use shared::{BarChart, ChartRenderer, ChartStyle, BAR_LABELS};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

pub const CANVAS_ID: &str = "incomeExpensesChart";
const DEFAULT_WIDTH: u32 = 600;
const DEFAULT_HEIGHT: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct IncomeExpensesChartProps {
    pub income: Decimal,
    pub expenses: Decimal,
    #[prop_or_default]
    pub style: ChartStyle,
}

/// Bar chart of the selected month's expenses and income
pub struct IncomeExpensesChart {
    canvas_ref: NodeRef,
    renderer: ChartRenderer,
}

impl Component for IncomeExpensesChart {
    type Message = ();
    type Properties = IncomeExpensesChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            renderer: ChartRenderer::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if self.renderer.update(props.income, props.expenses) {
            self.redraw();
        }
        false
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let props = ctx.props();
            self.renderer.initialize(props.style.clone());
            self.renderer.update(props.income, props.expenses);
            self.redraw();
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="chart-section">
                <div class="chart-content">
                    <canvas
                        id={CANVAS_ID}
                        ref={self.canvas_ref.clone()}
                        width={DEFAULT_WIDTH.to_string()}
                        height={DEFAULT_HEIGHT.to_string()}
                    ></canvas>
                </div>
            </section>
        }
    }
}

impl IncomeExpensesChart {
    fn redraw(&self) {
        let Some(chart) = self.renderer.chart() else {
            return;
        };
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            log::debug!("chart canvas not mounted yet");
            return;
        };
        if let Err(e) = draw_chart(canvas, chart) {
            log::error!("failed to draw chart: {:#}", e);
        }
    }
}

/// Canvas size for a container of `parent` (width, height) pixels
pub fn canvas_size(parent: Option<(i32, i32)>, style: &ChartStyle) -> (u32, u32) {
    if !style.responsive {
        return (DEFAULT_WIDTH, DEFAULT_HEIGHT);
    }
    let (width, height) = parent.unwrap_or((0, 0));
    let width = u32::try_from(width).ok().filter(|w| *w > 0).unwrap_or(DEFAULT_WIDTH);
    let height = if style.maintain_aspect_ratio {
        width * DEFAULT_HEIGHT / DEFAULT_WIDTH
    } else {
        u32::try_from(height).ok().filter(|h| *h > 0).unwrap_or(DEFAULT_HEIGHT)
    };
    (width, height)
}

/// Parse `#rrggbb` or `rgb(a)(r, g, b[, a])`
pub fn parse_css_color(value: &str) -> Option<RGBAColor> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(RGBAColor(channel(0)?, channel(2)?, channel(4)?, 1.0));
    }

    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let alpha = match parts.len() {
        3 => 1.0,
        4 => parts[3].parse::<f64>().ok()?,
        _ => return None,
    };
    Some(RGBAColor(
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
        alpha,
    ))
}

fn color_or(value: &str, fallback: RGBAColor) -> RGBAColor {
    parse_css_color(value).unwrap_or_else(|| {
        log::warn!("unrecognised chart colour '{}'", value);
        fallback
    })
}

fn draw_chart(canvas: HtmlCanvasElement, chart: &BarChart) -> Result<()> {
    let style = chart.style();

    let parent = canvas
        .parent_element()
        .map(|parent| (parent.client_width(), parent.client_height()));
    let (width, height) = canvas_size(parent, style);
    // Resizing also clears whatever was drawn before
    canvas.set_width(width);
    canvas.set_height(height);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?;
    let root = backend.into_drawing_area();

    let bar_color = color_or(&style.bar_color, RGBAColor(0, 102, 204, 1.0));
    let border_color = color_or(&style.border_color, RGBAColor(0, 89, 179, 1.0));
    let tick_color = color_or(&style.tick_color, RGBAColor(236, 240, 241, 1.0));
    let grid_color = color_or(&style.y_grid_color, RGBAColor(255, 255, 255, 0.1));

    let mut builder = ChartBuilder::on(&root);
    builder.margin(15).x_label_area_size(35).y_label_area_size(60);
    let mut cartesian = builder
        .build_cartesian_2d(
            (0u32..(BAR_LABELS.len() as u32 - 1)).into_segmented(),
            chart.y_min()..chart.y_max(),
        )
        .map_err(|e| anyhow!("{}", e))?;

    let y_labels = |v: &f64| format!("{:.0}", v);
    let x_labels = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            BAR_LABELS.get(*i as usize).copied().unwrap_or_default().to_string()
        }
        SegmentValue::Last => String::new(),
    };

    let mut mesh = cartesian.configure_mesh();
    mesh.y_label_formatter(&y_labels)
        .x_label_formatter(&x_labels)
        .label_style(("sans-serif", 13, &tick_color))
        .axis_style(&tick_color)
        .bold_line_style(&grid_color)
        .light_line_style(&TRANSPARENT)
        .y_labels(6);
    if !style.show_x_grid {
        mesh.disable_x_mesh();
    }
    mesh.draw().map_err(|e| anyhow!("{}", e))?;

    let data: Vec<(u32, f64)> = chart
        .bars()
        .enumerate()
        .map(|(i, (_, value))| (i as u32, value))
        .collect();

    let bars = cartesian
        .draw_series(
            Histogram::vertical(&cartesian)
                .style(bar_color.filled())
                .margin(20)
                .data(data.iter().copied()),
        )
        .map_err(|e| anyhow!("{}", e))?;
    if style.show_legend {
        bars.label(style.dataset_label.as_str()).legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], bar_color.filled())
        });
    }

    if style.border_width > 0 {
        cartesian
            .draw_series(
                Histogram::vertical(&cartesian)
                    .style(border_color.stroke_width(style.border_width))
                    .margin(20)
                    .data(data.iter().copied()),
            )
            .map_err(|e| anyhow!("{}", e))?;
    }

    if style.show_legend {
        cartesian
            .configure_series_labels()
            .label_font(("sans-serif", 13, &tick_color))
            .draw()
            .map_err(|e| anyhow!("{}", e))?;
    }

    root.present().map_err(|e| anyhow!("{}", e))?;
    Ok(())
}
