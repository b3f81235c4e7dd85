use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use drivesync_report::config::ReportConfig;
use drivesync_report::dataset::drivesync_figure;
use drivesync_report::render::render_png;
use drivesync_report::report::write_html_report;
use drivesync_report::summary;

use crate::viewer;

/// Files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub png: PathBuf,
    pub html: Option<PathBuf>,
}

/// Render the figure, write the optional report and print the console
/// summary.
pub fn run_render(config: &ReportConfig) -> Result<RunOutcome> {
    println!("{}", summary::generation_banner());

    log::debug!("Noise seed: {:?}", config.seed);
    let figure = drivesync_figure(config.seed).context("Failed to build the figure")?;

    let png = render_png(config, &figure)
        .with_context(|| format!("Failed to render {}", config.output_file.display()))?;
    println!("{}", summary::generation_checklist(&figure));

    let html = match &config.html_report {
        Some(path) => Some(write_html_report(config, &figure, path)?),
        None => None,
    };

    let mut saved: Vec<&Path> = vec![png.as_path()];
    if let Some(html) = &html {
        saved.push(html.as_path());
    }
    println!("{}", summary::completion_notice(&saved));

    if config.display {
        viewer::open(html.as_deref().unwrap_or(&png));
    }

    println!("{}", summary::ProjectSummary::drivesync());
    println!("{}", summary::closing_remarks());

    Ok(RunOutcome { png, html })
}
