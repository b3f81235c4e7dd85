//! The fixed DriveSync statistics and the figure assembled from them.
use crate::error::ReportError;
use crate::figure::{
    BarPanel, Figure, GridSlot, GridSpec, GroupedBarPanel, Panel, PanelKind, PiePanel, TextBox,
    ThresholdBarPanel, ThresholdLine, TimelinePanel,
};
use crate::palette::{self, ThresholdColors};
use crate::series::{CategorySeries, GroupedSeries, NamedSeries, ValueFormat};
use crate::signal::{Annotation, EventKind, SensorEvent, SignalParams, SyntheticSignal};

pub const FIGURE_TITLE: &str = "DriveSync: Complete Intelligent Driver Assistance System Analysis";
pub const FIGURE_WIDTH_IN: f64 = 24.0;
pub const FIGURE_HEIGHT_IN: f64 = 16.0;

pub const GRID: GridSpec = GridSpec {
    rows: 4,
    cols: 4,
    hspace: 0.4,
    wspace: 0.3,
};

pub const ACCIDENT_THRESHOLD_G: f64 = 5.0;
pub const SEVERE_THRESHOLD_G: f64 = 7.0;

/// Build the complete seven-panel figure.
///
/// `seed` fixes the timeline noise; `None` draws it from entropy.
pub fn drivesync_figure(seed: Option<u64>) -> Result<Figure, ReportError> {
    let events = sensor_events();
    let signal = SyntheticSignal::generate(&SignalParams::default(), &events, seed)?;

    Ok(Figure {
        title: FIGURE_TITLE.to_string(),
        width_in: FIGURE_WIDTH_IN,
        height_in: FIGURE_HEIGHT_IN,
        grid: GRID,
        panels: vec![
            ml_performance()?,
            feature_comparison()?,
            blackspot_zones()?,
            road_conditions()?,
            emergency_response()?,
            system_metrics()?,
            detection_timeline(signal, events),
        ],
    })
}

fn ml_performance() -> Result<Panel, ReportError> {
    let series = CategorySeries::new(
        "A",
        vec!["Random Forest", "KNN", "SVM"],
        vec![92.5, 87.2, 91.8],
        vec![palette::EMERALD, palette::ROYAL_BLUE, palette::VIOLET],
    )?;
    Ok(Panel {
        tag: 'A',
        title: "(A) ML Algorithm Performance".to_string(),
        checklist: "ML Algorithm Performance (Random Forest, KNN, SVM)".to_string(),
        slot: GridSlot::new(0, 0, 2),
        centered_title: false,
        kind: PanelKind::Bars(BarPanel {
            series,
            value_axis: "Accuracy (%)".to_string(),
            value_max: 100.0,
            format: ValueFormat::Percent1,
            label_offset: 2.0,
            bar_width: 0.6,
            note: None,
        }),
    })
}

fn feature_comparison() -> Result<Panel, ReportError> {
    let series = GroupedSeries::new(
        "B",
        vec![
            "Accident Detection",
            "Blackspot Warning",
            "Emergency SOS",
            "Road Monitoring",
            "AI Risk Assessment",
        ],
        NamedSeries::new("DriveSync", vec![95.0, 88.0, 98.0, 90.0, 85.0], palette::EMERALD),
        NamedSeries::new(
            "Existing Solutions",
            vec![60.0, 30.0, 70.0, 40.0, 20.0],
            palette::CORAL_RED,
        ),
    )?;
    Ok(Panel {
        tag: 'B',
        title: "(B) Feature Comparison vs Existing Solutions".to_string(),
        checklist: "Feature Comparison vs Existing Solutions".to_string(),
        slot: GridSlot::new(0, 2, 4),
        centered_title: false,
        kind: PanelKind::GroupedBars(GroupedBarPanel {
            series,
            value_axis: "Feature Coverage (%)".to_string(),
            value_max: 105.0,
            format: ValueFormat::Percent0,
            label_offset: 2.0,
            bar_width: 0.35,
        }),
    })
}

fn blackspot_zones() -> Result<Panel, ReportError> {
    let series = CategorySeries::new(
        "C",
        vec!["Safe Zone", "Caution Zone", "Blackspot Zone", "High Risk Zone"],
        vec![98.0, 94.0, 89.0, 92.0],
        vec![
            palette::EMERALD,
            palette::AMBER,
            palette::CORAL_RED,
            palette::CRIMSON,
        ],
    )?;
    Ok(Panel {
        tag: 'C',
        title: "(C) Blackspot Detection & Safety Zone Analysis".to_string(),
        checklist: "Blackspot Detection & Safety Zone Analysis".to_string(),
        slot: GridSlot::new(1, 0, 2),
        centered_title: false,
        kind: PanelKind::Bars(BarPanel {
            series,
            value_axis: "Detection Accuracy (%)".to_string(),
            value_max: 105.0,
            format: ValueFormat::Percent0,
            label_offset: 2.0,
            bar_width: 0.6,
            note: Some(TextBox {
                lines: vec![
                    "Blackspot Features:".to_string(),
                    "\u{2022} KNN Pattern Matching".to_string(),
                    "\u{2022} Historical Accident Data".to_string(),
                    "\u{2022} Real-time Risk Scoring".to_string(),
                ],
                anchor: (0.98, 0.95),
                fill: palette::LIGHT_BLUE,
                alpha: 0.8,
            }),
        }),
    })
}

fn road_conditions() -> Result<Panel, ReportError> {
    let series = CategorySeries::new(
        "D",
        vec![
            "Smooth (< 1.2G)",
            "Moderate (1.2-2.5G)",
            "Rough (2.5-4.0G)",
            "Emergency (> 7.0G)",
        ],
        vec![68.0, 25.0, 6.0, 1.0],
        vec![
            palette::EMERALD,
            palette::AMBER,
            palette::CORAL_RED,
            palette::CRIMSON,
        ],
    )?;
    Ok(Panel {
        tag: 'D',
        title: "(D) Road Condition Distribution".to_string(),
        checklist: "Road Condition Distribution & Monitoring".to_string(),
        slot: GridSlot::new(1, 2, 4),
        centered_title: true,
        kind: PanelKind::Pie(PiePanel {
            series,
            explode: vec![0.05, 0.05, 0.1, 0.15],
            start_angle_deg: 90.0,
        }),
    })
}

fn emergency_response() -> Result<Panel, ReportError> {
    let series = CategorySeries::new(
        "E",
        vec![
            "Auto SOS (DriveSync)",
            "Manual Call (Traditional)",
            "GPS Alert (Competitors)",
        ],
        vec![3.5, 180.0, 90.0],
        vec![palette::EMERALD, palette::CORAL_RED, palette::AMBER],
    )?;
    Ok(Panel {
        tag: 'E',
        title: "(E) Emergency Response Performance".to_string(),
        checklist: "Emergency Response Performance".to_string(),
        slot: GridSlot::new(2, 0, 2),
        centered_title: false,
        kind: PanelKind::Bars(BarPanel {
            series,
            value_axis: "Response Time (seconds)".to_string(),
            value_max: 200.0,
            format: ValueFormat::Duration,
            label_offset: 8.0,
            bar_width: 0.6,
            note: None,
        }),
    })
}

fn system_metrics() -> Result<Panel, ReportError> {
    let thresholds = ThresholdColors::default();
    let series = CategorySeries::colored_by(
        "F",
        vec![
            "SMS Delivery",
            "Emergency Call",
            "GPS Accuracy",
            "Battery Life",
            "System Uptime",
        ],
        vec![97.8, 96.2, 94.5, 89.3, 98.1],
        |v| thresholds.pick(v),
    )?;
    Ok(Panel {
        tag: 'F',
        title: "(F) System Performance Metrics".to_string(),
        checklist: "System Performance Metrics (SMS, GPS, Battery)".to_string(),
        slot: GridSlot::new(2, 2, 4),
        centered_title: false,
        kind: PanelKind::ThresholdBars(ThresholdBarPanel {
            series,
            value_axis: "Performance (%)".to_string(),
            value_max: 100.0,
            format: ValueFormat::Percent1,
            label_offset: 1.0,
            bar_height: 0.6,
            thresholds,
            target: ThresholdLine {
                value: thresholds.pass_at,
                label: "Target (95%)".to_string(),
                color: palette::GRAY,
            },
        }),
    })
}

fn detection_timeline(signal: SyntheticSignal, events: Vec<SensorEvent>) -> Panel {
    Panel {
        tag: 'G',
        title: "(G) Real-Time Multi-Feature Detection Timeline \
                (Accidents + Blackspots + Emergency Response)"
            .to_string(),
        checklist: "Real-time G-Force Timeline with All Events".to_string(),
        slot: GridSlot::new(3, 0, 4),
        centered_title: false,
        kind: PanelKind::Timeline(TimelinePanel {
            signal,
            signal_label: "G-Force Reading".to_string(),
            signal_color: palette::ROYAL_BLUE,
            time_axis: "Time (seconds)".to_string(),
            value_axis: "G-Force (G)".to_string(),
            value_max: 10.0,
            thresholds: vec![
                ThresholdLine {
                    value: ACCIDENT_THRESHOLD_G,
                    label: "Accident Threshold (5G)".to_string(),
                    color: palette::AMBER,
                },
                ThresholdLine {
                    value: SEVERE_THRESHOLD_G,
                    label: "Severe Threshold (7G)".to_string(),
                    color: palette::CORAL_RED,
                },
            ],
            events,
        }),
    }
}

/// The three simulated incidents on the timeline.
pub fn sensor_events() -> Vec<SensorEvent> {
    vec![
        SensorEvent {
            kind: EventKind::MinorIncident,
            label: "Minor Accident".to_string(),
            window: (38.0, 44.0),
            color: palette::ORANGE,
            spike_start: 398,
            spike: vec![2.2, 3.8, 4.5, 3.2, 2.8, 2.1, 1.8, 1.6],
            annotation: Annotation {
                lines: vec!["Minor Accident".to_string(), "4.5G detected".to_string()],
                point: (40.0, 4.5),
                text_at: (55.0, 8.0),
                color: palette::ORANGE,
                boxed: None,
            },
        },
        SensorEvent {
            kind: EventKind::AdvisoryWarning,
            label: "Blackspot Warning".to_string(),
            window: (78.0, 84.0),
            color: palette::YELLOW,
            spike_start: 799,
            spike: vec![1.8, 2.8, 3.2, 2.5, 2.0],
            annotation: Annotation {
                lines: vec![
                    "Blackspot Warning".to_string(),
                    "KNN Alert Triggered".to_string(),
                ],
                point: (80.0, 3.2),
                text_at: (95.0, 7.0),
                color: palette::GOLDENROD,
                boxed: None,
            },
        },
        SensorEvent {
            kind: EventKind::SevereIncident,
            label: "Severe Accident".to_string(),
            window: (118.0, 124.0),
            color: palette::RED,
            spike_start: 1197,
            spike: vec![2.1, 4.2, 7.8, 8.5, 6.9, 4.1, 3.0, 2.5, 2.0, 1.7, 1.5],
            annotation: Annotation {
                lines: vec![
                    "SEVERE ACCIDENT".to_string(),
                    "8.5G - Auto SOS".to_string(),
                ],
                point: (120.0, 8.5),
                text_at: (135.0, 9.5),
                color: palette::RED,
                boxed: Some(palette::YELLOW),
            },
        },
    ]
}
