//! High-pass IIR design as a cascade of second-order sections
//!
//! Each section is an RBJ-cookbook high-pass biquad. The per-section quality
//! factor and cutoff scale come from the analog low-pass prototype of the
//! chosen characteristic, so a cascade of `order` sections realizes a
//! 2·`order`-pole response. Cascading low-order sections instead of expanding
//! a single high-order polynomial keeps the filter numerically stable.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{ConfigError, Result};

/// Filter characteristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterShape {
    /// Maximally flat passband
    Butterworth,

    /// Chebyshev Type I, 0.5 dB passband ripple: steeper rolloff
    Chebyshev05,

    /// Chebyshev Type I, 1 dB passband ripple
    Chebyshev1,
}

impl Default for FilterShape {
    fn default() -> Self {
        FilterShape::Butterworth
    }
}

/// Coefficients of one second-order section, normalized so a0 = 1:
/// H(z) = (b0 + b1·z⁻¹ + b2·z⁻²) / (1 + a1·z⁻¹ + a2·z⁻²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

/// Design a high-pass cascade
///
/// # Arguments
/// * `order` - Number of second-order sections (total pole count is 2·order)
/// * `shape` - Filter characteristic
/// * `cutoff_hz` - Cutoff frequency in Hz, must lie below Nyquist
/// * `sampling_rate_hz` - Sampling rate in Hz
///
/// # Returns
/// One `BiquadCoeffs` per section, in cascade order
pub fn design_highpass(
    order: usize,
    shape: FilterShape,
    cutoff_hz: f64,
    sampling_rate_hz: f64,
) -> Result<Vec<BiquadCoeffs>> {
    if order < 1 {
        return Err(design_error("filter order must be at least 1"));
    }
    if !(sampling_rate_hz > 0.0) {
        return Err(design_error(format!(
            "sampling rate must be positive, got {sampling_rate_hz} Hz"
        )));
    }
    if !(cutoff_hz > 0.0) {
        return Err(design_error(format!(
            "cutoff frequency must be positive, got {cutoff_hz} Hz"
        )));
    }

    let nyquist = sampling_rate_hz / 2.0;
    if cutoff_hz >= nyquist {
        return Err(design_error(format!(
            "cutoff {cutoff_hz} Hz must lie below the Nyquist frequency ({nyquist} Hz)"
        )));
    }

    prototype_sections(order, shape)
        .into_iter()
        .map(|(q, cutoff_scale)| {
            // High-pass sections invert the prototype scale: a low-pass pole
            // at radius r maps to a section corner at cutoff / r.
            let section_cutoff = cutoff_hz / cutoff_scale;
            if section_cutoff >= nyquist {
                return Err(design_error(format!(
                    "{shape:?} section corner {section_cutoff:.3} Hz exceeds Nyquist \
                     ({nyquist} Hz); lower the cutoff or the order"
                )));
            }
            Ok(highpass_biquad(section_cutoff, sampling_rate_hz, q))
        })
        .collect()
}

fn design_error(reason: impl Into<String>) -> ConfigError {
    ConfigError::Design {
        reason: reason.into(),
    }
}

/// Per-section (quality factor, cutoff scale) pairs of the analog low-pass
/// prototype for the given characteristic.
fn prototype_sections(order: usize, shape: FilterShape) -> Vec<(f64, f64)> {
    match shape {
        FilterShape::Butterworth => {
            // Butterworth poles sit on the unit circle, so every section
            // shares the cutoff and only Q varies:
            // Q_i = 1 / (2·sin(π/(2N)·(i + 1/2)))
            (0..order)
                .map(|i| {
                    let q = 0.5 / ((PI / (2.0 * order as f64)) * (i as f64 + 0.5)).sin();
                    (q, 1.0)
                })
                .collect()
        }
        FilterShape::Chebyshev05 => chebyshev_sections(order, 0.5),
        FilterShape::Chebyshev1 => chebyshev_sections(order, 1.0),
    }
}

/// Chebyshev Type I prototype poles for a cascade of `order` biquads
/// (total order 2·order).
///
/// Poles lie on an ellipse: p_k = -sinh(μ)·sin(θ_k) + j·cosh(μ)·cos(θ_k)
/// with μ = asinh(1/ε)/N and θ_k = (2k+1)π/(2N). Section Q and cutoff
/// scale follow from the pole location: Q = |p| / (2·|Re p|), scale = |p|.
fn chebyshev_sections(order: usize, ripple_db: f64) -> Vec<(f64, f64)> {
    let n = 2.0 * order as f64;
    let epsilon = (10f64.powf(ripple_db / 10.0) - 1.0).sqrt();
    let mu = (1.0 / epsilon).asinh() / n;

    (0..order)
        .map(|k| {
            let theta = PI * (2 * k + 1) as f64 / (2.0 * n);
            let pole = Complex64::new(-mu.sinh() * theta.sin(), mu.cosh() * theta.cos());
            (pole.norm() / (2.0 * pole.re.abs()), pole.norm())
        })
        .collect()
}

/// RBJ-cookbook high-pass biquad for one section.
///
/// Normalized to unity gain at Nyquist per section, so the cascade passband
/// gain stays at unity regardless of order.
fn highpass_biquad(cutoff_hz: f64, sampling_rate_hz: f64, q: f64) -> BiquadCoeffs {
    let w0 = 2.0 * PI * cutoff_hz / sampling_rate_hz;
    let cos_w0 = w0.cos();
    let alpha = w0.sin() / (2.0 * q);
    let a0 = 1.0 + alpha;

    BiquadCoeffs {
        b0: (1.0 + cos_w0) / 2.0 / a0,
        b1: -(1.0 + cos_w0) / a0,
        b2: (1.0 + cos_w0) / 2.0 / a0,
        a1: -2.0 * cos_w0 / a0,
        a2: (1.0 - alpha) / a0,
    }
}
