use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::content::model::{ChartSpec, GroupedChartSpec};

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------
//
// Charts are static presentation: zoom, drag, and scroll are disabled and
// every value is painted exactly as the spec carries it.

const CHART_HEIGHT: f32 = 320.0;

/// Render a categorical bar chart from its spec.
pub fn bar_chart(ui: &mut Ui, spec: &ChartSpec) {
    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::new(i as f64, b.value)
                .name(&b.label)
                .fill(b.color)
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();

    ui.strong(&spec.title);
    Plot::new(&spec.title)
        .height(CHART_HEIGHT)
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .x_axis_formatter(move |mark, _| category_label(&labels, mark.value))
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Render a grouped bar chart: one bar per series inside each group, with a
/// legend naming the series.
pub fn grouped_bar_chart(ui: &mut Ui, spec: &GroupedChartSpec) {
    let n_series = spec.series.len().max(1);
    let bar_width = 0.8 / n_series as f64;

    ui.strong(&spec.title);
    let mut plot = Plot::new(&spec.title)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false);

    let groups = spec.groups.clone();
    plot = plot.x_axis_formatter(move |mark, _| category_label(&groups, mark.value));

    plot.show(ui, |plot_ui| {
        for (s_idx, series) in spec.series.iter().enumerate() {
            let offset = (s_idx as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
            let bars: Vec<Bar> = series
                .values
                .iter()
                .enumerate()
                .map(|(g_idx, &value)| {
                    Bar::new(g_idx as f64 + offset, value)
                        .width(bar_width * 0.9)
                        .fill(series.color)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name(&series.name).color(series.color));
        }
    });
}

/// Axis label for a categorical position: the category name at integer
/// marks, nothing in between.
fn category_label(labels: &[String], position: f64) -> String {
    let idx = position.round();
    if (position - idx).abs() > 1e-3 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
