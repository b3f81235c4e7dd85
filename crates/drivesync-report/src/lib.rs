//! drivesync-report: the DriveSync analysis figure.
//!
//! This crate holds the fixed summary statistics, synthesises the G-force
//! timeline, assembles the seven-panel figure model and renders it to a
//! raster image with plotters. An optional interactive companion is written
//! as an HTML page with one plotly chart per panel.
//!
//! Rendering is generic over the plotters `DrawingBackend`, so the same
//! drawing code produces the PNG and can be replayed against other backends.
pub mod config;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod palette;
pub mod render;
pub mod report;
pub mod series;
pub mod signal;
pub mod summary;

pub use config::ReportConfig;
pub use error::ReportError;
pub use figure::Figure;
pub use signal::SyntheticSignal;
