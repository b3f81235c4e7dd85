use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dataset::{FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};
use crate::error::ReportError;

pub const DEFAULT_OUTPUT_FILE: &str = "drivesync_complete_analysis.png";
pub const DEFAULT_DPI: u32 = 300;

/// Everything a run can vary. The figure content itself is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub version: String,
    pub output_file: PathBuf,
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    /// Seed for the timeline noise. Unseeded runs differ sample by sample.
    pub seed: Option<u64>,
    /// Open the result in the desktop viewer once written.
    pub display: bool,
    /// Interactive HTML companion; not written when unset.
    pub html_report: Option<PathBuf>,
    pub font_path: Option<PathBuf>,
    pub bold_font_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dpi: DEFAULT_DPI,
            width_in: FIGURE_WIDTH_IN,
            height_in: FIGURE_HEIGHT_IN,
            seed: None,
            display: true,
            html_report: None,
            font_path: None,
            bold_font_path: None,
        }
    }
}

impl ReportConfig {
    /// Load a JSON config, falling back to the default for every field that
    /// is missing or has the wrong type.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let partial: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        if !partial.is_object() {
            return Err(ReportError::InvalidConfig(format!(
                "{} must contain a JSON object",
                path.display()
            ))
            .into());
        }

        let mut config = ReportConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(output_file);
        load_or_default!(dpi);
        load_or_default!(width_in);
        load_or_default!(height_in);
        load_or_default!(seed);
        load_or_default!(display);
        load_or_default!(html_report);
        load_or_default!(font_path);
        load_or_default!(bold_font_path);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.dpi == 0 {
            return Err(ReportError::InvalidConfig("dpi must be positive".to_string()));
        }
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(ReportError::InvalidConfig(format!(
                "figure size must be positive, got {} x {} in",
                self.width_in, self.height_in
            )));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig(
                "output_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Canvas size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }
}
