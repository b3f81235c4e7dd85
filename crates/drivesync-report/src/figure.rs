//! The figure model: seven panels placed on a 4 x 4 grid.
//!
//! Nothing here draws. The raster renderer and the interactive report both
//! read the same `Figure`.
use serde::{Deserialize, Serialize};

use crate::palette::{Rgb, ThresholdColors};
use crate::series::{CategorySeries, GroupedSeries, ValueFormat};
use crate::signal::{SensorEvent, SyntheticSignal};

/// Row/column layout with matplotlib-style relative spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Vertical gap between rows, as a fraction of the row height.
    pub hspace: f64,
    /// Horizontal gap between columns, as a fraction of the column width.
    pub wspace: f64,
}

/// The cells a panel occupies: one row, a half-open column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSlot {
    pub row: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl GridSlot {
    pub const fn new(row: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row,
            col_start,
            col_end,
        }
    }
}

/// Pixel rectangle relative to the grid's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    /// Pixel rectangle for `slot` inside an area of `size` pixels.
    ///
    /// Each of the `n` tracks gets `total / (n + (n - 1) * space)` and the
    /// gaps get `space` times that.
    pub fn cell_rect(&self, slot: GridSlot, size: (u32, u32)) -> CellRect {
        let (col_w, col_gap) = track(size.0 as f64, self.cols, self.wspace);
        let (row_h, row_gap) = track(size.1 as f64, self.rows, self.hspace);

        let span = (slot.col_end - slot.col_start) as f64;
        let x = slot.col_start as f64 * (col_w + col_gap);
        let y = slot.row as f64 * (row_h + row_gap);
        let width = span * col_w + (span - 1.0) * col_gap;

        CellRect {
            x: x.round() as u32,
            y: y.round() as u32,
            width: width.round() as u32,
            height: row_h.round() as u32,
        }
    }
}

fn track(total: f64, n: usize, space: f64) -> (f64, f64) {
    let n = n as f64;
    let cell = total / (n + (n - 1.0) * space);
    (cell, cell * space)
}

/// Free text drawn inside the plot area, anchored by its top-right corner at
/// a fraction of the axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub lines: Vec<String>,
    pub anchor: (f64, f64),
    pub fill: Rgb,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLine {
    pub value: f64,
    pub label: String,
    pub color: Rgb,
}

/// Vertical bars, one per category, with a value label above each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPanel {
    pub series: CategorySeries,
    pub value_axis: String,
    pub value_max: f64,
    pub format: ValueFormat,
    pub label_offset: f64,
    pub bar_width: f64,
    pub note: Option<TextBox>,
}

/// Two bars per category, side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarPanel {
    pub series: GroupedSeries,
    pub value_axis: String,
    pub value_max: f64,
    pub format: ValueFormat,
    pub label_offset: f64,
    pub bar_width: f64,
}

/// Proportions of a whole, with each wedge pushed out from the centre by a
/// fraction of the radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiePanel {
    pub series: CategorySeries,
    pub explode: Vec<f64>,
    pub start_angle_deg: f64,
}

/// Angular extent and radial offset of one pie wedge, in degrees measured
/// counter-clockwise from the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start_deg: f64,
    pub end_deg: f64,
    pub offset: f64,
    pub share: f64,
}

impl Wedge {
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

impl PiePanel {
    pub fn wedges(&self) -> Vec<Wedge> {
        let total = self.series.total();
        let mut start = self.start_angle_deg;
        self.series
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let share = if total > 0.0 { value / total } else { 0.0 };
                let end = start + 360.0 * share;
                let wedge = Wedge {
                    start_deg: start,
                    end_deg: end,
                    offset: self.explode.get(i).copied().unwrap_or(0.0),
                    share,
                };
                start = end;
                wedge
            })
            .collect()
    }
}

/// Horizontal bars coloured against pass/warn thresholds, with a vertical
/// target line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBarPanel {
    pub series: CategorySeries,
    pub value_axis: String,
    pub value_max: f64,
    pub format: ValueFormat,
    pub label_offset: f64,
    pub bar_height: f64,
    pub thresholds: ThresholdColors,
    pub target: ThresholdLine,
}

/// The synthetic signal with its threshold lines and event overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePanel {
    pub signal: SyntheticSignal,
    pub signal_label: String,
    pub signal_color: Rgb,
    pub time_axis: String,
    pub value_axis: String,
    pub value_max: f64,
    pub thresholds: Vec<ThresholdLine>,
    pub events: Vec<SensorEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelKind {
    Bars(BarPanel),
    GroupedBars(GroupedBarPanel),
    Pie(PiePanel),
    ThresholdBars(ThresholdBarPanel),
    Timeline(TimelinePanel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub tag: char,
    pub title: String,
    /// One-line description printed in the console checklist.
    pub checklist: String,
    pub slot: GridSlot,
    pub centered_title: bool,
    pub kind: PanelKind,
}

impl Panel {
    /// Labels the panel's marks correspond to: categories for bar and pie
    /// panels, legend entries for the timeline.
    pub fn category_labels(&self) -> Vec<String> {
        match &self.kind {
            PanelKind::Bars(p) => p.series.labels.clone(),
            PanelKind::GroupedBars(p) => p.series.labels.clone(),
            PanelKind::Pie(p) => p.series.labels.clone(),
            PanelKind::ThresholdBars(p) => p.series.labels.clone(),
            PanelKind::Timeline(p) => {
                let mut labels = vec![p.signal_label.clone()];
                labels.extend(p.thresholds.iter().map(|t| t.label.clone()));
                labels.extend(p.events.iter().map(|e| e.label.clone()));
                labels
            }
        }
    }

    /// Number of bars, wedges or lines a faithful rendering draws.
    pub fn expected_marks(&self) -> usize {
        match &self.kind {
            PanelKind::GroupedBars(p) => p.series.groups().len() * p.series.len(),
            _ => self.category_labels().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub width_in: f64,
    pub height_in: f64,
    pub grid: GridSpec,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn panel(&self, tag: char) -> Option<&Panel> {
        self.panels.iter().find(|p| p.tag == tag)
    }

    pub fn timeline(&self) -> Option<&TimelinePanel> {
        self.panels.iter().find_map(|p| match &p.kind {
            PanelKind::Timeline(t) => Some(t),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridSpec = GridSpec {
        rows: 4,
        cols: 4,
        hspace: 0.4,
        wspace: 0.3,
    };

    #[test]
    fn full_width_slot_spans_the_area() {
        let rect = GRID.cell_rect(GridSlot::new(3, 0, 4), (1000, 800));
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 1000);
        assert_eq!(rect.y + rect.height, 800);
    }

    #[test]
    fn half_slots_leave_a_gap_between_them() {
        let left = GRID.cell_rect(GridSlot::new(0, 0, 2), (1000, 800));
        let right = GRID.cell_rect(GridSlot::new(0, 2, 4), (1000, 800));
        assert_eq!(left.width, right.width);
        assert!(right.x > left.x + left.width);
        assert_eq!(right.x + right.width, 1000);
    }
}
