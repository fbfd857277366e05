//! Stage error taxonomy
//!
//! Every failure in this crate is a configuration problem: either the stage
//! was built from invalid parameters, or a record contradicts the
//! configuration it was built with. There are no transient errors and no
//! retries; steady-state processing is a pure in-memory transform.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The stage cannot size its filter bank without a channel count.
    #[error("a positive channel count is required")]
    MissingChannels,

    /// Coefficient synthesis rejected the requested filter. Only possible
    /// at construction time; a constructed stage never fails to filter.
    #[error("filter design failed: {reason}")]
    Design { reason: String },

    /// An incoming record does not match the configured channel count.
    #[error("record carries {actual} channel(s), stage is configured for {expected}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    /// An incoming record mixes single samples and blocks across channels.
    #[error("record mixes single samples and blocks across its channels")]
    MixedShapes,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
