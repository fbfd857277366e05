//! Record-level orchestration: gap repair, filtering, envelope reassembly

pub mod gaps;
pub mod highpass;
pub mod record;

pub use highpass::HighpassStage;
pub use record::{ChannelData, Record};
