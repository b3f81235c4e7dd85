//! The interactive companion page.

use std::fs;

use drivesync_report::config::ReportConfig;
use drivesync_report::dataset::drivesync_figure;
use drivesync_report::report::{build_report, write_html_report};

#[test]
fn one_plot_per_panel() {
    let figure = drivesync_figure(Some(2)).unwrap();
    let report = build_report(&ReportConfig::default(), &figure).unwrap();
    assert_eq!(report.plot_count(), 7);

    let sections: Vec<&str> = report.sections().collect();
    assert_eq!(sections.first(), Some(&"Overview"));
    assert!(sections.contains(&"(G) Real-Time Multi-Feature Detection Timeline (Accidents + Blackspots + Emergency Response)"));
    assert_eq!(sections.last(), Some(&"Configuration"));
}

#[test]
fn written_page_embeds_plots_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drivesync_report.html");
    let figure = drivesync_figure(Some(2)).unwrap();

    let written = write_html_report(&ReportConfig::default(), &figure, &path).unwrap();
    assert_eq!(written, path);

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("plot-1"));
    assert!(html.contains("plot-7"));
    assert!(html.contains("(A) ML Algorithm Performance"));
    assert!(html.contains("DRIVESYNC PROJECT SUMMARY"));
    assert!(html.contains("drivesync_complete_analysis.png"));
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.html");
    let figure = drivesync_figure(Some(2)).unwrap();
    assert!(write_html_report(&ReportConfig::default(), &figure, &path).is_err());
}
