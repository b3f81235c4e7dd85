//! Synthetic G-force timeline with overwritten event spikes.
use std::ops::Range;

use itertools_num::linspace;
use ndarray::{s, Array1, ArrayView1};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::error::ReportError;
use crate::palette::Rgb;

/// Shape of the baseline noise and of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    pub samples: usize,
    pub duration_s: f64,
    pub baseline_mean: f64,
    pub baseline_std: f64,
    pub clip_min: f64,
    pub clip_max: f64,
}

impl Default for SignalParams {
    /// 150 s at 10 Hz around a 1.5 G cruising baseline.
    fn default() -> Self {
        Self {
            samples: 1500,
            duration_s: 150.0,
            baseline_mean: 1.5,
            baseline_std: 0.2,
            clip_min: 0.8,
            clip_max: 2.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    MinorIncident,
    AdvisoryWarning,
    SevereIncident,
}

/// Text with an arrow pointing at a (time, magnitude) coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub lines: Vec<String>,
    pub point: (f64, f64),
    pub text_at: (f64, f64),
    pub color: Rgb,
    /// Background fill for the text, when boxed.
    pub boxed: Option<Rgb>,
}

/// A simulated incident: a shaded window on the timeline plus the literal
/// samples written over the baseline noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorEvent {
    pub kind: EventKind,
    pub label: String,
    pub window: (f64, f64),
    pub color: Rgb,
    pub spike_start: usize,
    pub spike: Vec<f64>,
    pub annotation: Annotation,
}

impl SensorEvent {
    pub fn spike_range(&self) -> Range<usize> {
        self.spike_start..self.spike_start + self.spike.len()
    }

    pub fn peak(&self) -> f64 {
        self.spike.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Sampled magnitude against time, both of length `SignalParams::samples`.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSignal {
    pub time: Array1<f64>,
    pub magnitude: Array1<f64>,
}

impl SyntheticSignal {
    /// Draw clipped normal noise, then overwrite each event's spike range.
    ///
    /// Without a seed the generator is seeded from entropy, so only the
    /// structure (length, clip range, spike values) repeats across runs.
    pub fn generate(
        params: &SignalParams,
        events: &[SensorEvent],
        seed: Option<u64>,
    ) -> Result<Self, ReportError> {
        for event in events {
            let range = event.spike_range();
            if range.end > params.samples {
                return Err(ReportError::SpikeOutOfRange {
                    event: event.label.clone(),
                    start: range.start,
                    end: range.end,
                    len: params.samples,
                });
            }
        }

        let noise = Normal::new(params.baseline_mean, params.baseline_std)
            .map_err(|e| ReportError::InvalidDistribution(e.to_string()))?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let time: Array1<f64> = linspace(0.0, params.duration_s, params.samples).collect();
        let mut magnitude: Array1<f64> = (0..params.samples)
            .map(|_| noise.sample(&mut rng))
            .collect();
        magnitude.mapv_inplace(|g| g.clamp(params.clip_min, params.clip_max));

        for event in events {
            log::debug!(
                "Writing {} samples for '{}' at index {}",
                event.spike.len(),
                event.label,
                event.spike_start
            );
            magnitude
                .slice_mut(s![event.spike_range()])
                .assign(&ArrayView1::from(&event.spike[..]));
        }

        Ok(Self { time, magnitude })
    }

    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .zip(self.magnitude.iter())
            .map(|(&t, &g)| (t, g))
    }

    pub fn max(&self) -> f64 {
        self.magnitude.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
