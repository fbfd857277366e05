//! Record envelope
//!
//! A record carries one series per channel plus arbitrary passthrough
//! metadata. Missing samples are `None` rather than a NaN sentinel: the gap
//! protocol works on index positions, so no legitimate numeric value can
//! collide with the marker, and JSON `null` round-trips naturally.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One channel's contribution to a record: a single sample or a contiguous
/// block of samples. `None` marks a missing sample in either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelData {
    Sample(Option<f64>),
    Block(Vec<Option<f64>>),
}

impl ChannelData {
    pub fn is_block(&self) -> bool {
        matches!(self, ChannelData::Block(_))
    }
}

/// A multi-channel unit of the stream.
///
/// `data` holds one `ChannelData` per channel, in channel order. All other
/// fields of the wire representation are opaque to the stage and flow
/// through it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: Vec<ChannelData>,

    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl Record {
    pub fn new(data: Vec<ChannelData>) -> Self {
        Self {
            data,
            meta: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_record_round_trips_with_nulls() {
        let wire = json!({
            "data": [[1.0, null, 3.0], [4.0, 5.0, null]],
            "timestamp": 1724572800123u64,
            "info": { "samplingRate": 256 }
        });

        let record: Record = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(
            record.data[0],
            ChannelData::Block(vec![Some(1.0), None, Some(3.0)])
        );
        assert_eq!(record.meta.get("timestamp"), Some(&json!(1724572800123u64)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, wire);
    }

    #[test]
    fn test_sample_record_parses_scalars_and_null() {
        let record: Record = serde_json::from_value(json!({
            "data": [2.5, null]
        }))
        .unwrap();

        assert_eq!(record.data[0], ChannelData::Sample(Some(2.5)));
        assert_eq!(record.data[1], ChannelData::Sample(None));
        assert!(!record.data[0].is_block());
    }
}
