use crate::sensor::SensorType;

/// Errors that can occur during payload encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum LppError {
    /// A record carries a type tag with no registered transcoder.
    #[error("unknown type tag {tag} at offset {offset}")]
    UnknownTypeTag { tag: u8, offset: usize },

    /// The buffer ended before the current record was complete.
    #[error("truncated buffer at offset {offset} ({needed} bytes needed, {remaining} remaining)")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A value does not fit the integer range of its sensor type once descaled.
    #[error("value out of range for {sensor} on channel {channel}")]
    ValueOutOfRange { sensor: SensorType, channel: u8 },

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The JSON object view could not be converted.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LppError>;
