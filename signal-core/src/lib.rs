//! Biosignal Conditioning - Gap-Tolerant High-Pass Stage
//!
//! Streaming high-pass IIR filtering for multi-channel biosignal records.
//! Each channel runs its own stateful filter cascade; missing samples are
//! interpolated around for the filter's benefit and re-marked as missing in
//! the output, so gaps survive the stage without corrupting filter state.

pub mod config;
pub mod error;
pub mod filters;
pub mod stage;

pub use config::StageConfig;
pub use error::{ConfigError, Result};
pub use filters::{FilterBank, FilterShape};
pub use stage::{ChannelData, HighpassStage, Record};
