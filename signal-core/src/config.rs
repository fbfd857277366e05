//! Stage configuration
//!
//! `channels` has no default: a stage cannot size its filter bank without
//! it, so both the constructor and the serde representation require it.
//! Everything else defaults to the conventional EEG acquisition setup
//! (2 cascaded sections, Butterworth, 2 Hz cutoff at 256 Hz).

use serde::{Deserialize, Serialize};

use crate::filters::FilterShape;

/// Immutable construction parameters for a high-pass stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Number of channels in every incoming record.
    pub channels: usize,

    /// Number of cascaded second-order sections per channel.
    #[serde(default = "default_order")]
    pub order: usize,

    /// Filter characteristic.
    #[serde(default)]
    pub shape: FilterShape,

    /// High-pass cutoff frequency in Hz.
    #[serde(default = "default_cutoff_hz")]
    pub cutoff_hz: f64,

    /// Sampling rate of the incoming records in Hz.
    #[serde(default = "default_sampling_rate_hz")]
    pub sampling_rate_hz: f64,
}

fn default_order() -> usize {
    2
}

fn default_cutoff_hz() -> f64 {
    2.0
}

fn default_sampling_rate_hz() -> f64 {
    256.0
}

impl StageConfig {
    /// Configuration with the given channel count and default filter
    /// parameters.
    pub fn new(channels: usize) -> Self {
        Self {
            channels,
            order: default_order(),
            shape: FilterShape::default(),
            cutoff_hz: default_cutoff_hz(),
            sampling_rate_hz: default_sampling_rate_hz(),
        }
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_shape(mut self, shape: FilterShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_cutoff_hz(mut self, cutoff_hz: f64) -> Self {
        self.cutoff_hz = cutoff_hz;
        self
    }

    pub fn with_sampling_rate_hz(mut self, sampling_rate_hz: f64) -> Self {
        self.sampling_rate_hz = sampling_rate_hz;
        self
    }
}
