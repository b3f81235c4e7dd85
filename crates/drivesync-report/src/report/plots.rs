//! plotly versions of the seven panels.
use plotly::common::{DashType, Fill, Line, Marker, Mode, Orientation, Position, TextPosition};
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::figure::{
    BarPanel, GroupedBarPanel, Panel, PanelKind, PiePanel, ThresholdBarPanel, TimelinePanel,
};
use crate::series::{CategorySeries, ValueFormat};

pub fn panel_plot(panel: &Panel) -> Plot {
    match &panel.kind {
        PanelKind::Bars(p) => plot_bars(&panel.title, p),
        PanelKind::GroupedBars(p) => plot_grouped_bars(&panel.title, p),
        PanelKind::Pie(p) => plot_shares(&panel.title, p),
        PanelKind::ThresholdBars(p) => plot_threshold_bars(&panel.title, p),
        PanelKind::Timeline(p) => plot_timeline(&panel.title, p),
    }
}

fn colors(series: &CategorySeries) -> Vec<String> {
    series.colors.iter().map(|c| c.hex()).collect()
}

fn value_labels(values: &[f64], format: ValueFormat) -> Vec<String> {
    values.iter().map(|&v| format.format(v)).collect()
}

pub fn plot_bars(title: &str, panel: &BarPanel) -> Plot {
    let trace = Bar::new(panel.series.labels.clone(), panel.series.values.clone())
        .name(title)
        .text_array(value_labels(&panel.series.values, panel.format))
        .text_position(TextPosition::Outside)
        .marker(Marker::new().color_array(colors(&panel.series)));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(title)
            .show_legend(false)
            .y_axis(
                Axis::new()
                    .title(panel.value_axis.as_str())
                    .range(vec![0.0, panel.value_max]),
            ),
    );
    plot
}

pub fn plot_grouped_bars(title: &str, panel: &GroupedBarPanel) -> Plot {
    let mut plot = Plot::new();
    for group in panel.series.groups() {
        let trace = Bar::new(panel.series.labels.clone(), group.values.clone())
            .name(group.name.as_str())
            .text_array(value_labels(&group.values, panel.format))
            .text_position(TextPosition::Outside)
            .marker(Marker::new().color(group.color.hex()));
        plot.add_trace(trace);
    }
    plot.set_layout(
        Layout::new().title(title).y_axis(
            Axis::new()
                .title(panel.value_axis.as_str())
                .range(vec![0.0, panel.value_max]),
        ),
    );
    plot
}

/// Shares as bars; the exploded pie only exists in the static figure.
pub fn plot_shares(title: &str, panel: &PiePanel) -> Plot {
    let total = panel.series.total();
    let shares: Vec<f64> = panel
        .series
        .values
        .iter()
        .map(|v| if total > 0.0 { v / total * 100.0 } else { 0.0 })
        .collect();
    let trace = Bar::new(panel.series.labels.clone(), shares.clone())
        .name(title)
        .text_array(shares.iter().map(|s| format!("{:.1}%", s)).collect::<Vec<String>>())
        .text_position(TextPosition::Outside)
        .marker(Marker::new().color_array(colors(&panel.series)));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(title)
            .show_legend(false)
            .y_axis(Axis::new().title("Share (%)").range(vec![0.0, 100.0])),
    );
    plot
}

pub fn plot_threshold_bars(title: &str, panel: &ThresholdBarPanel) -> Plot {
    let trace = Bar::new(panel.series.values.clone(), panel.series.labels.clone())
        .orientation(Orientation::Horizontal)
        .name(title)
        .text_array(value_labels(&panel.series.values, panel.format))
        .text_position(TextPosition::Outside)
        .marker(Marker::new().color_array(colors(&panel.series)));

    let n = panel.series.len();
    let target = Scatter::new(
        vec![panel.target.value, panel.target.value],
        vec![
            panel.series.labels.first().cloned().unwrap_or_default(),
            panel.series.labels.last().cloned().unwrap_or_default(),
        ],
    )
    .mode(Mode::Lines)
    .name(panel.target.label.as_str())
    .line(Line::new().color(panel.target.color.hex()).dash(DashType::Dash));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    if n > 0 {
        plot.add_trace(target);
    }
    plot.set_layout(
        Layout::new().title(title).x_axis(
            Axis::new()
                .title(panel.value_axis.as_str())
                .range(vec![0.0, panel.value_max]),
        ),
    );
    plot
}

pub fn plot_timeline(title: &str, panel: &TimelinePanel) -> Plot {
    let t_min = panel.signal.time.first().copied().unwrap_or(0.0);
    let t_max = panel.signal.time.last().copied().unwrap_or(0.0);
    let mut plot = Plot::new();

    for event in &panel.events {
        let (start, end) = event.window;
        let window = Scatter::new(
            vec![start, end, end, start, start],
            vec![0.0, 0.0, panel.value_max, panel.value_max, 0.0],
        )
        .mode(Mode::Lines)
        .name(event.label.as_str())
        .fill(Fill::ToSelf)
        .fill_color(event.color.rgba(0.3))
        .line(Line::new().width(0.0));
        plot.add_trace(window);
    }

    let signal = Scatter::new(panel.signal.time.to_vec(), panel.signal.magnitude.to_vec())
        .mode(Mode::Lines)
        .name(panel.signal_label.as_str())
        .line(Line::new().color(panel.signal_color.hex()).width(2.0));
    plot.add_trace(signal);

    for threshold in &panel.thresholds {
        let line = Scatter::new(vec![t_min, t_max], vec![threshold.value, threshold.value])
            .mode(Mode::Lines)
            .name(threshold.label.as_str())
            .line(
                Line::new()
                    .color(threshold.color.hex())
                    .dash(DashType::Dash)
                    .width(2.0),
            );
        plot.add_trace(line);
    }

    let (x, y): (Vec<f64>, Vec<f64>) = panel.events.iter().map(|e| e.annotation.point).unzip();
    let notes = Scatter::new(x, y)
        .mode(Mode::MarkersText)
        .name("Detections")
        .text_array(
            panel
                .events
                .iter()
                .map(|e| e.annotation.lines.join(" - "))
                .collect::<Vec<String>>(),
        )
        .text_position(Position::TopCenter)
        .marker(Marker::new().color_array(
            panel
                .events
                .iter()
                .map(|e| e.annotation.color.hex())
                .collect::<Vec<String>>(),
        ));
    plot.add_trace(notes);

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(
                Axis::new()
                    .title(panel.time_axis.as_str())
                    .range(vec![t_min, t_max]),
            )
            .y_axis(
                Axis::new()
                    .title(panel.value_axis.as_str())
                    .range(vec![0.0, panel.value_max]),
            ),
    );
    plot
}
