//! JSON object view of payloads behind a pluggable codec trait.

use bytes::Bytes;
use serde_json::Value;

use crate::codec::{decode_with_config, encode_with_config, CodecConfig, RangePolicy};
use crate::error::Result;
use crate::payload::CayenneLpp;

/// Converts device payloads to and from the JSON objects integrations see.
///
/// Applications select an implementation per device profile and stay
/// agnostic of the binary format behind it.
pub trait PayloadCodec: Send + Sync {
    /// Decode raw bytes into a JSON object.
    fn decode_object(&self, payload: &[u8]) -> Result<Value>;

    /// Encode a JSON object into raw bytes.
    fn encode_object(&self, object: &Value) -> Result<Bytes>;
}

/// Cayenne LPP codec bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct LppCodec {
    config: CodecConfig,
}

impl LppCodec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Decode a payload.
    pub fn decode(&self, payload: &[u8]) -> Result<CayenneLpp> {
        decode_with_config(payload, &self.config)
    }

    /// Encode a payload.
    pub fn encode(&self, lpp: &CayenneLpp) -> Result<Bytes> {
        encode_with_config(lpp, &self.config)
    }

    /// Update the maximum wire size for subsequent calls.
    pub fn set_max_payload_size(&mut self, max_payload_size: Option<usize>) {
        self.config.max_payload_size = max_payload_size;
    }

    /// Update the out-of-range policy for subsequent encodes.
    pub fn set_range_policy(&mut self, range_policy: RangePolicy) {
        self.config.range_policy = range_policy;
    }

    /// Current codec configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl PayloadCodec for LppCodec {
    fn decode_object(&self, payload: &[u8]) -> Result<Value> {
        self.decode(payload)?.to_json()
    }

    fn encode_object(&self, object: &Value) -> Result<Bytes> {
        self.encode(&CayenneLpp::from_json(object)?)
    }
}
