use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use drivesync_report::config::ReportConfig;

/// Effective configuration: the JSON file (or defaults) with command line
/// overrides applied on top.
pub fn from_arguments(matches: &ArgMatches) -> Result<ReportConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[DriveSync] Using config: {:?}", path);
            ReportConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?
        }
        None => {
            log::debug!("[DriveSync] No config provided; using defaults.");
            ReportConfig::default()
        }
    };

    // Apply CLI overrides
    if let Some(output_file) = matches.get_one::<PathBuf>("output_file") {
        config.output_file = output_file.clone();
    }

    if let Some(&dpi) = matches.get_one::<u32>("dpi") {
        config.dpi = dpi;
    }

    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }

    if let Some(report) = matches.get_one::<PathBuf>("html_report") {
        config.html_report = Some(report.clone());
    }

    if let Some(font) = matches.get_one::<PathBuf>("font") {
        config.font_path = Some(font.clone());
        config.bold_font_path = None;
    }

    if matches.get_flag("no_display") {
        config.display = false;
    }

    config.validate()?;
    Ok(config)
}
