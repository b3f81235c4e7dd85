//! Category axis for bar panels.
use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;

/// `n` categories centred on the integers `0..n`, each one unit wide.
///
/// Bars are placed with fractional offsets around a centre, so the axis stays
/// continuous while ticks land only on the centres.
pub struct CategoryAxis {
    inner: RangedCoordf64,
    count: usize,
}

impl CategoryAxis {
    pub fn new(count: usize) -> Self {
        let upper = count.max(1) as f64 - 0.5;
        Self {
            inner: (-0.5..upper).into(),
            count,
        }
    }

    pub fn centers(&self) -> Vec<f64> {
        (0..self.count).map(|i| i as f64).collect()
    }
}

impl Ranged for CategoryAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            self.centers()
        }
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}
