//! Draws the full figure against a backend that records primitives, then
//! counts what actually reached the backend inside each panel.

mod common;

use std::collections::HashMap;

use common::{polygons, texts, Op, RecordingBackend};
use drivesync_report::dataset::drivesync_figure;
use drivesync_report::figure::{Figure, Panel, PanelKind, TimelinePanel};
use drivesync_report::palette::{self, Rgb};
use drivesync_report::render::{fonts, render_figure, RenderedPanel, Scale};
use plotters::prelude::*;

fn record(seed: u64) -> (Figure, Vec<RenderedPanel>, Vec<Op>) {
    // Legend layout measures text through the font registry.
    fonts::install(None, None).unwrap();
    let figure = drivesync_figure(Some(seed)).unwrap();
    let (backend, ops) = RecordingBackend::new((2400, 1600));
    let root = backend.into_drawing_area();
    let placed = render_figure(&root, &figure, Scale::new(100)).unwrap();
    drop(root);
    let ops = ops.borrow().clone();
    (figure, placed, ops)
}

fn rgb(color: Rgb) -> (u8, u8, u8) {
    (color.0, color.1, color.2)
}

fn anchor(op: &Op) -> (i32, i32) {
    match op {
        Op::Rect { from, .. } | Op::Line { from, .. } => *from,
        Op::Path { points, .. } | Op::Polygon { points, .. } => {
            points.first().copied().unwrap_or((-1, -1))
        }
        Op::Circle { center, .. } => *center,
        Op::Text { at, .. } => *at,
    }
}

fn ops_in<'a>(ops: &'a [Op], placed: &RenderedPanel) -> Vec<&'a Op> {
    ops.iter().filter(|op| placed.contains(anchor(op))).collect()
}

fn opaque_bars(ops: &[&Op], colours: &[(u8, u8, u8)]) -> Vec<((i32, i32), (i32, i32))> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Rect {
                from,
                to,
                rgb: colour,
                alpha,
                filled: true,
            } if colours.contains(colour) && *alpha >= 1.0 => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

/// Bars standing on the value axis baseline. Legend swatches float above it.
fn vertical_bars(ops: &[&Op], colours: &[(u8, u8, u8)]) -> usize {
    let bars = opaque_bars(ops, colours);
    let baseline = bars.iter().map(|(_, to)| to.1).max().unwrap_or(0);
    bars.iter().filter(|(_, to)| to.1 == baseline).count()
}

/// Bars growing from the left edge of the plot.
fn horizontal_bars(ops: &[&Op], colours: &[(u8, u8, u8)]) -> usize {
    let bars = opaque_bars(ops, colours);
    let left = bars.iter().map(|(from, _)| from.0).min().unwrap_or(0);
    bars.iter().filter(|(from, _)| from.0 == left).count()
}

fn timeline_marks(ops: &[&Op], panel: &TimelinePanel, placed: &RenderedPanel) -> usize {
    let signal_colour = rgb(panel.signal_color);
    let signal = ops
        .iter()
        .filter(|op| {
            matches!(op, Op::Path { points, rgb: colour, .. }
                if *colour == signal_colour && points.len() >= panel.signal.len() / 2)
        })
        .count();

    let threshold_colours: Vec<_> = panel.thresholds.iter().map(|t| rgb(t.color)).collect();
    let mut dashes: HashMap<((u8, u8, u8), i32), usize> = HashMap::new();
    for op in ops {
        if let Op::Path {
            points,
            rgb: colour,
        } = op
        {
            if points.len() == 2 && points[0].1 == points[1].1 && threshold_colours.contains(colour) {
                *dashes.entry((*colour, points[0].1)).or_default() += 1;
            }
        }
    }
    let thresholds = dashes.values().filter(|&&n| n >= 3).count();

    let windows = ops
        .iter()
        .filter(|op| {
            matches!(op, Op::Rect { from, to, alpha, filled: true, .. }
                if (*alpha - 0.3).abs() < 1e-9 && (to.1 - from.1) as u32 > placed.size.1 / 3)
        })
        .count();

    signal + thresholds + windows
}

fn drawn_marks(panel: &Panel, placed: &RenderedPanel, ops: &[Op]) -> usize {
    let ops = ops_in(ops, placed);
    match &panel.kind {
        PanelKind::Bars(p) => {
            let colours: Vec<_> = p.series.colors.iter().copied().map(rgb).collect();
            vertical_bars(&ops, &colours)
        }
        PanelKind::GroupedBars(p) => {
            let colours: Vec<_> = p.series.groups().iter().map(|g| rgb(g.color)).collect();
            vertical_bars(&ops, &colours)
        }
        PanelKind::ThresholdBars(p) => {
            let colours: Vec<_> = p.series.colors.iter().copied().map(rgb).collect();
            horizontal_bars(&ops, &colours)
        }
        PanelKind::Pie(_) => ops.iter().filter(|op| matches!(op, Op::Polygon { .. })).count(),
        PanelKind::Timeline(p) => timeline_marks(&ops, p, placed),
    }
}

// ---------------------------------------------------------------------------
// Marks per panel
// ---------------------------------------------------------------------------

#[test]
fn every_panel_draws_one_mark_per_label() {
    let (figure, placed, ops) = record(1);

    assert_eq!(placed.len(), 7);
    for (panel, placed) in figure.panels.iter().zip(&placed) {
        assert_eq!(panel.tag, placed.tag);
        let drawn = drawn_marks(panel, placed, &ops);
        assert_eq!(
            drawn,
            panel.expected_marks(),
            "panel {} drew {} marks",
            panel.tag,
            drawn
        );
    }
}

#[test]
fn grouped_panel_draws_two_bars_per_feature() {
    let (figure, placed, ops) = record(1);
    let panel = figure.panel('B').unwrap();
    let b = placed.iter().find(|p| p.tag == 'B').unwrap();
    assert_eq!(drawn_marks(panel, b, &ops), 10);

    let in_b = ops_in(&ops, b);
    let primary = vertical_bars(&in_b, &[rgb(palette::EMERALD)]);
    let secondary = vertical_bars(&in_b, &[rgb(palette::CORAL_RED)]);
    assert_eq!((primary, secondary), (5, 5));
}

#[test]
fn panels_do_not_overlap() {
    let (_, placed, _) = record(1);
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            let a_right = a.origin.0 + a.size.0 as i32;
            let b_right = b.origin.0 + b.size.0 as i32;
            let a_bottom = a.origin.1 + a.size.1 as i32;
            let b_bottom = b.origin.1 + b.size.1 as i32;
            let apart = a_right <= b.origin.0
                || b_right <= a.origin.0
                || a_bottom <= b.origin.1
                || b_bottom <= a.origin.1;
            assert!(apart, "panels {} and {} overlap", a.tag, b.tag);
        }
    }
}

#[test]
fn pie_is_four_polygons_in_category_colours() {
    let (_, _, ops) = record(1);
    let colours: Vec<_> = polygons(&ops)
        .into_iter()
        .filter_map(|op| match op {
            Op::Polygon { rgb: colour, .. } => Some(*colour),
            _ => None,
        })
        .collect();
    let expected: Vec<_> = [
        palette::EMERALD,
        palette::AMBER,
        palette::CORAL_RED,
        palette::CRIMSON,
    ]
    .into_iter()
    .map(rgb)
    .collect();
    assert_eq!(colours, expected);
}

#[test]
fn event_windows_are_translucent() {
    let (_, _, ops) = record(1);
    let orange = rgb(palette::ORANGE);
    let windows = ops
        .iter()
        .filter(|op| {
            matches!(op, Op::Rect { rgb: colour, alpha, filled: true, .. }
                if *colour == orange && (*alpha - 0.3).abs() < 1e-9)
        })
        .count();
    assert!(windows >= 1);
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn value_labels_use_panel_formats() {
    let (_, _, ops) = record(1);
    let texts = texts(&ops);
    for expected in [
        "92.5%", "87.2%", "91.8%", // A
        "95%", "20%", // B
        "89%", // C
        "68.0%", "1.0%", // D
        "3.5s", "3.0min", "1.5min", // E
        "97.8%", "89.3%", // F
    ] {
        assert!(
            texts.iter().any(|t| t == expected),
            "missing label {expected}"
        );
    }
}

#[test]
fn titles_notes_and_annotations_are_drawn() {
    let (_, _, ops) = record(1);
    let texts = texts(&ops);
    for expected in [
        "DriveSync: Complete Intelligent Driver Assistance System Analysis",
        "(A) ML Algorithm Performance",
        "(D) Road Condition Distribution",
        "Blackspot Features:",
        "\u{2022} Real-time Risk Scoring",
        "SEVERE ACCIDENT",
        "8.5G - Auto SOS",
        "KNN Alert Triggered",
        "Target (95%)",
        "Accident Threshold (5G)",
    ] {
        assert!(texts.iter().any(|t| t == expected), "missing text {expected}");
    }
}

#[test]
fn event_windows_are_named_only_in_the_legend() {
    let (figure, _, ops) = record(1);
    let texts = texts(&ops);
    for event in &figure.timeline().unwrap().events {
        let in_annotation = event.annotation.lines.iter().filter(|l| **l == event.label).count();
        let drawn = texts.iter().filter(|t| **t == event.label).count();
        assert_eq!(drawn, 1 + in_annotation, "label {} drawn {} times", event.label, drawn);
    }
}

/// Approximate text box for an anchor, sized the way the recording backend
/// estimates text.
fn text_box(at: (i32, i32), text: &str, size: f64, h: HAnchor, v: VAnchor) -> [i32; 4] {
    let w = (text.chars().count() as f64 * size * 0.6).ceil() as i32;
    let ht = size.ceil() as i32;
    let x0 = match h {
        HAnchor::Left => at.0,
        HAnchor::Center => at.0 - w / 2,
    };
    let y0 = match v {
        VAnchor::Bottom => at.1 - ht,
        VAnchor::Center => at.1 - ht / 2,
    };
    [x0, y0, x0 + w, y0 + ht]
}

#[derive(Clone, Copy)]
enum HAnchor {
    Left,
    Center,
}

#[derive(Clone, Copy)]
enum VAnchor {
    Bottom,
    Center,
}

fn legend_box(ops: &[&Op]) -> [i32; 4] {
    ops.iter()
        .find_map(|op| match op {
            Op::Rect {
                from,
                to,
                rgb: (255, 255, 255),
                filled: true,
                alpha,
            } if (*alpha - 0.8).abs() < 1e-9 => Some([from.0, from.1, to.0, to.1]),
            _ => None,
        })
        .unwrap()
}

fn intersects(a: [i32; 4], b: [i32; 4]) -> bool {
    a[0] < b[2] && b[0] < a[2] && a[1] < b[3] && b[1] < a[3]
}

fn assert_legend_clear_of_values(tag: char, h: HAnchor, v: VAnchor) {
    let (figure, placed, ops) = record(1);
    let panel = figure.panel(tag).unwrap();
    let values: Vec<String> = match &panel.kind {
        PanelKind::GroupedBars(p) => p
            .series
            .groups()
            .iter()
            .flat_map(|g| g.values.iter().map(|v| p.format.format(*v)))
            .collect(),
        PanelKind::ThresholdBars(p) => p.series.values.iter().map(|v| p.format.format(*v)).collect(),
        _ => unreachable!(),
    };
    let placed = placed.iter().find(|p| p.tag == tag).unwrap();
    let ops = ops_in(&ops, placed);
    let legend = legend_box(&ops);

    for op in &ops {
        if let Op::Text { text, at, size } = op {
            if values.contains(text) {
                let label = text_box(*at, text, *size, h, v);
                assert!(
                    !intersects(legend, label),
                    "panel {tag}: legend {legend:?} covers value label {text} at {label:?}"
                );
            }
        }
    }
}

#[test]
fn grouped_legend_leaves_value_labels_visible() {
    assert_legend_clear_of_values('B', HAnchor::Center, VAnchor::Bottom);
}

#[test]
fn metrics_legend_leaves_value_labels_visible() {
    assert_legend_clear_of_values('F', HAnchor::Left, VAnchor::Center);
}

#[test]
fn same_seed_draws_identical_primitives() {
    let (_, _, a) = record(9);
    let (_, _, b) = record(9);
    assert_eq!(a, b);
}
