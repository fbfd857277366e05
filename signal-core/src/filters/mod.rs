//! High-pass IIR design and per-channel streaming filters

pub mod bank;
pub mod design;
pub mod iir;

pub use bank::FilterBank;
pub use design::{design_highpass, BiquadCoeffs, FilterShape};
pub use iir::IirFilter;
