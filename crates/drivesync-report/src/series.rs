//! Labelled value sequences feeding the bar and pie panels.
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::palette::Rgb;

/// One value and one colour per category, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<Rgb>,
}

impl CategorySeries {
    pub fn new<S: Into<String>>(
        panel: &str,
        labels: Vec<S>,
        values: Vec<f64>,
        colors: Vec<Rgb>,
    ) -> Result<Self, ReportError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        check_len(panel, labels.len(), values.len())?;
        check_len(panel, labels.len(), colors.len())?;
        Ok(Self {
            labels,
            values,
            colors,
        })
    }

    /// Same value and colour layout, but colours chosen per value.
    pub fn colored_by<S: Into<String>>(
        panel: &str,
        labels: Vec<S>,
        values: Vec<f64>,
        color_of: impl Fn(f64) -> Rgb,
    ) -> Result<Self, ReportError> {
        let colors = values.iter().map(|&v| color_of(v)).collect();
        Self::new(panel, labels, values, colors)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64, Rgb)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, &value), &color)| (label.as_str(), value, color))
    }
}

/// A single-colour series used as one side of a grouped comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Rgb,
}

impl NamedSeries {
    pub fn new(name: &str, values: Vec<f64>, color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            values,
            color,
        }
    }
}

/// Two series sharing a category axis, drawn side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedSeries {
    pub labels: Vec<String>,
    pub primary: NamedSeries,
    pub secondary: NamedSeries,
}

impl GroupedSeries {
    pub fn new<S: Into<String>>(
        panel: &str,
        labels: Vec<S>,
        primary: NamedSeries,
        secondary: NamedSeries,
    ) -> Result<Self, ReportError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        check_len(panel, labels.len(), primary.values.len())?;
        check_len(panel, labels.len(), secondary.values.len())?;
        Ok(Self {
            labels,
            primary,
            secondary,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn groups(&self) -> [&NamedSeries; 2] {
        [&self.primary, &self.secondary]
    }
}

/// How a bar's value is printed above (or beside) it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// `92.5%`
    Percent1,
    /// `95%`
    Percent0,
    /// Seconds under a minute (`3.5s`), minutes otherwise (`3.0min`).
    Duration,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Percent1 => format!("{:.1}%", value),
            ValueFormat::Percent0 => format!("{:.0}%", value),
            ValueFormat::Duration => {
                if value < 60.0 {
                    format!("{:.1}s", value)
                } else {
                    format!("{:.1}min", value / 60.0)
                }
            }
        }
    }
}

fn check_len(panel: &str, labels: usize, values: usize) -> Result<(), ReportError> {
    if labels != values {
        return Err(ReportError::LengthMismatch {
            panel: panel.to_string(),
            labels,
            values,
        });
    }
    Ok(())
}
