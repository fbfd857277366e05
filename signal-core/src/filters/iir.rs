//! Streaming IIR cascade with per-section state
//!
//! Implements Direct Form II Transposed, which needs only two delay values
//! per section and has better numerical behavior than Direct Form I for
//! cascaded low-cutoff filters. State persists across calls so consecutive
//! blocks produce continuous output.

use super::design::BiquadCoeffs;

/// One second-order section and its delay-line memory.
#[derive(Debug, Clone, PartialEq)]
struct Section {
    coeffs: BiquadCoeffs,
    w1: f64,
    w2: f64,
}

impl Section {
    fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            w1: 0.0,
            w2: 0.0,
        }
    }

    #[inline]
    fn process(&mut self, input: f64) -> f64 {
        // y[n] = b0·x[n] + w1
        // w1   = b1·x[n] - a1·y[n] + w2
        // w2   = b2·x[n] - a2·y[n]
        let c = &self.coeffs;
        let output = c.b0 * input + self.w1;
        self.w1 = c.b1 * input - c.a1 * output + self.w2;
        self.w2 = c.b2 * input - c.a2 * output;
        output
    }
}

/// Stateful streaming filter: a chain of second-order sections.
///
/// State is created once and advanced by exactly one step per processed
/// sample; it is never reset during the filter's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct IirFilter {
    sections: Vec<Section>,
}

impl IirFilter {
    /// Build a filter from synthesized cascade coefficients.
    pub fn new(cascade: Vec<BiquadCoeffs>) -> Self {
        Self {
            sections: cascade.into_iter().map(Section::new).collect(),
        }
    }

    /// Number of second-order sections in the cascade.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Advance the filter by one sample and return the filtered value.
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let mut value = input;
        for section in &mut self.sections {
            value = section.process(value);
        }
        value
    }

    /// Process a block of samples.
    ///
    /// Defined as sequential `process_sample` over the slice, so the state
    /// after a block is identical to single-stepping the same samples. The
    /// stage relies on that equivalence when it mixes block and
    /// single-sample records on one channel.
    pub fn process_block(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }
}
