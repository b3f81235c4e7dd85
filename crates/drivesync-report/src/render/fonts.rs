//! Font discovery and registration for the ab_glyph text backend.
//!
//! plotters only rasterises text with fonts registered by name, so a
//! TrueType face is registered at runtime as `sans-serif` in both the normal
//! and bold styles. Explicit files win, then common system locations, then
//! the DejaVu Sans faces compiled into the crate.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{register_font, FontDesc, FontFamily, FontStyle, TextStyle};

use crate::error::ReportError;

static BUNDLED_REGULAR: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static BUNDLED_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

/// Regular/bold pairs probed in order. A missing bold face falls back to the
/// regular one.
const CANDIDATES: &[(&str, &str)] = &[
    (
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    ),
    (
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    ),
    ("/Library/Fonts/Arial.ttf", "/Library/Fonts/Arial Bold.ttf"),
    ("C:\\Windows\\Fonts\\arial.ttf", "C:\\Windows\\Fonts\\arialbd.ttf"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFiles {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

/// Where the registered faces came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Files(FontFiles),
    Bundled,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Files(files) => write!(
                f,
                "regular={}, bold={}",
                files.regular.display(),
                files.bold.display()
            ),
            FontSource::Bundled => f.write_str("bundled DejaVu Sans"),
        }
    }
}

static INSTALLED: OnceLock<FontSource> = OnceLock::new();

/// First candidate pair whose regular face exists on this host.
pub fn discover() -> Option<FontFiles> {
    CANDIDATES.iter().find_map(|(regular, bold)| {
        let regular = PathBuf::from(regular);
        if !regular.is_file() {
            return None;
        }
        let bold = PathBuf::from(bold);
        let bold = if bold.is_file() { bold } else { regular.clone() };
        Some(FontFiles { regular, bold })
    })
}

/// Pick the faces to register: explicit paths, then discovery, then the
/// bundled fallback.
pub fn resolve(regular: Option<&Path>, bold: Option<&Path>) -> FontSource {
    match regular {
        Some(regular) => FontSource::Files(FontFiles {
            regular: regular.to_path_buf(),
            bold: bold.unwrap_or(regular).to_path_buf(),
        }),
        None => discover().map_or(FontSource::Bundled, FontSource::Files),
    }
}

/// Register the sans-serif faces used by every text element.
///
/// Registration happens once per process; later calls return the source
/// already in use.
pub fn install(regular: Option<&Path>, bold: Option<&Path>) -> Result<FontSource, ReportError> {
    if let Some(source) = INSTALLED.get() {
        return Ok(source.clone());
    }

    let source = resolve(regular, bold);
    match &source {
        FontSource::Files(files) => {
            register_file(&files.regular, FontStyle::Normal)?;
            register_file(&files.bold, FontStyle::Bold)?;
        }
        FontSource::Bundled => {
            register_bytes(BUNDLED_REGULAR, FontStyle::Normal, Path::new("DejaVuSans.ttf"))?;
            register_bytes(BUNDLED_BOLD, FontStyle::Bold, Path::new("DejaVuSans-Bold.ttf"))?;
        }
    }
    log::debug!("Registered fonts: {}", source);

    let _ = INSTALLED.set(source.clone());
    Ok(source)
}

fn register_file(path: &Path, style: FontStyle) -> Result<(), ReportError> {
    let bytes = fs::read(path).map_err(|e| ReportError::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    // The registry keeps `&'static [u8]`; each face is loaded once.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_bytes(bytes, style, path)
}

fn register_bytes(bytes: &'static [u8], style: FontStyle, origin: &Path) -> Result<(), ReportError> {
    register_font(FontFamily::SansSerif.as_str(), style, bytes).map_err(|_| {
        ReportError::FontLoad {
            path: origin.to_path_buf(),
            reason: "not a valid TrueType font".to_string(),
        }
    })
}

pub fn regular(px: f64) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal).into()
}

pub fn bold(px: f64) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Bold).into()
}
