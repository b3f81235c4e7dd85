//! Colours shared by the raster and interactive renderers.
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`, the form plotly expects.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// `rgba(r, g, b, a)` for translucent plotly fills.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }

    pub fn to_plotters(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}

pub const EMERALD: Rgb = Rgb(0x10, 0xB9, 0x81);
pub const ROYAL_BLUE: Rgb = Rgb(0x25, 0x63, 0xEB);
pub const VIOLET: Rgb = Rgb(0x8B, 0x5C, 0xF6);
pub const CORAL_RED: Rgb = Rgb(0xEF, 0x44, 0x44);
pub const AMBER: Rgb = Rgb(0xF5, 0x9E, 0x0B);
pub const CRIMSON: Rgb = Rgb(0xDC, 0x26, 0x26);

// Named colours used by the timeline overlays.
pub const ORANGE: Rgb = Rgb(255, 165, 0);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GOLDENROD: Rgb = Rgb(218, 165, 32);
pub const LIGHT_BLUE: Rgb = Rgb(173, 216, 230);
pub const GRAY: Rgb = Rgb(128, 128, 128);

/// Traffic-light colours for a metric measured against pass/warn thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdColors {
    pub pass_at: f64,
    pub warn_at: f64,
    pub pass: Rgb,
    pub warn: Rgb,
    pub fail: Rgb,
}

impl ThresholdColors {
    pub fn pick(&self, value: f64) -> Rgb {
        if value >= self.pass_at {
            self.pass
        } else if value >= self.warn_at {
            self.warn
        } else {
            self.fail
        }
    }
}

impl Default for ThresholdColors {
    fn default() -> Self {
        Self {
            pass_at: 95.0,
            warn_at: 90.0,
            pass: EMERALD,
            warn: AMBER,
            fail: CORAL_RED,
        }
    }
}
