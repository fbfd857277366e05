//! Per-channel filter bank
//!
//! One independent `IirFilter` per channel, all running the same synthesized
//! cascade. Channels are plain owned elements of a `Vec`, so no channel's
//! state can alias another's, and every channel advances only through its own
//! `step_one`/`step_many` calls.

use log::debug;

use super::design::design_highpass;
use super::iir::IirFilter;
use crate::config::StageConfig;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    filters: Vec<IirFilter>,
}

impl FilterBank {
    /// Synthesize and hold one filter per configured channel.
    ///
    /// Synthesis happens here, once; a constructed bank never fails to
    /// filter. Any invalid parameter surfaces as a `ConfigError` before the
    /// first record is processed.
    pub fn new(config: &StageConfig) -> Result<Self> {
        if config.channels < 1 {
            return Err(ConfigError::MissingChannels);
        }

        let mut filters = Vec::with_capacity(config.channels);
        for _ in 0..config.channels {
            let cascade = design_highpass(
                config.order,
                config.shape,
                config.cutoff_hz,
                config.sampling_rate_hz,
            )?;
            filters.push(IirFilter::new(cascade));
        }

        debug!(
            "filter bank ready: {} channel(s), {} section(s) each, {:?} high-pass at {} Hz (fs {} Hz)",
            filters.len(),
            filters[0].section_count(),
            config.shape,
            config.cutoff_hz,
            config.sampling_rate_hz,
        );

        Ok(Self { filters })
    }

    /// Number of channels in the bank.
    pub fn channels(&self) -> usize {
        self.filters.len()
    }

    /// Advance one channel's filter by exactly one sample.
    ///
    /// The caller guarantees `value` is a real sample: gaps are repaired (or
    /// skipped) before the bank ever sees them.
    pub fn step_one(&mut self, channel: usize, value: f64) -> f64 {
        self.filters[channel].process_sample(value)
    }

    /// Advance one channel's filter by a whole block.
    ///
    /// Equivalent to calling `step_one` once per element in order; the output
    /// length always equals the input length.
    pub fn step_many(&mut self, channel: usize, values: &[f64]) -> Vec<f64> {
        self.filters[channel].process_block(values)
    }
}
