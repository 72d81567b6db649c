//! Record-level decode and encode drivers.

use bytes::{Buf, Bytes, BytesMut};
use tracing::{debug, trace, warn};

use crate::error::{LppError, Result};
use crate::payload::{CayenneLpp, Reading};
use crate::sensor::SensorType;

/// Record header: channel (1) + type tag (1) = 2 bytes.
pub const HEADER_SIZE: usize = 2;

/// What encode does with a value that does not fit its field once descaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Fail with `LppError::ValueOutOfRange`.
    #[default]
    Reject,
    /// Saturate at the field bounds. Non-finite values are still rejected.
    Clamp,
}

/// Configuration for the payload codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum wire size in bytes, checked on both decode input and encode
    /// output. Default: unbounded.
    pub max_payload_size: Option<usize>,
    /// Out-of-range handling on encode. Default: reject.
    pub range_policy: RangePolicy,
}

/// Decode a payload with the default configuration.
///
/// Wire format, repeated until the buffer ends on a record boundary:
/// ```text
/// ┌──────────────┬──────────────┬───────────────────────────┐
/// │ Channel (1B) │ Type (1B)    │ Value (size fixed by type)│
/// └──────────────┴──────────────┴───────────────────────────┘
/// ```
pub fn decode(src: &[u8]) -> Result<CayenneLpp> {
    decode_with_config(src, &CodecConfig::default())
}

/// Decode a payload.
///
/// Decoding is all-or-nothing: a malformed record anywhere in the buffer
/// fails the whole call.
pub fn decode_with_config(src: &[u8], config: &CodecConfig) -> Result<CayenneLpp> {
    check_size(src.len(), config)?;

    let mut lpp = CayenneLpp::default();
    let mut buf = src;
    while buf.has_remaining() {
        let offset = src.len() - buf.remaining();
        let reading = decode_record(&mut buf, offset).inspect_err(|err| {
            debug!(offset, error = %err, "payload decode failed");
        })?;
        trace!(
            offset,
            channel = reading.channel,
            tag = reading.sensor.tag(),
            "decoded record"
        );
        lpp.insert(reading);
    }

    debug!(bytes = src.len(), records = lpp.len(), "decoded payload");
    Ok(lpp)
}

fn decode_record(buf: &mut &[u8], offset: usize) -> Result<Reading> {
    if buf.remaining() < HEADER_SIZE {
        return Err(LppError::TruncatedBuffer {
            offset,
            needed: HEADER_SIZE,
            remaining: buf.remaining(),
        });
    }

    let channel = buf.get_u8();
    let tag = buf.get_u8();
    let sensor = SensorType::from_tag(tag).ok_or(LppError::UnknownTypeTag { tag, offset })?;

    let size = sensor.size();
    if buf.remaining() < size {
        return Err(LppError::TruncatedBuffer {
            offset,
            needed: HEADER_SIZE + size,
            remaining: HEADER_SIZE + buf.remaining(),
        });
    }

    let mut values = [0.0; 3];
    for (value, field) in values.iter_mut().zip(sensor.fields()) {
        *value = field.to_value(field.read_raw(buf));
    }

    Ok(Reading {
        sensor,
        channel,
        values,
    })
}

/// Encode a payload with the default configuration.
pub fn encode(lpp: &CayenneLpp) -> Result<Bytes> {
    encode_with_config(lpp, &CodecConfig::default())
}

/// Encode a payload into a fresh buffer.
pub fn encode_with_config(lpp: &CayenneLpp, config: &CodecConfig) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(lpp.encoded_len());
    encode_into(lpp, &mut dst, config)?;
    Ok(dst.freeze())
}

/// Append the wire encoding of a payload to `dst`.
///
/// Records are emitted in tag order, then channel order. On error `dst` is
/// left exactly as it was.
pub fn encode_into(lpp: &CayenneLpp, dst: &mut BytesMut, config: &CodecConfig) -> Result<()> {
    check_size(lpp.encoded_len(), config)?;

    let start = dst.len();
    dst.reserve(lpp.encoded_len());
    for reading in lpp.readings() {
        if let Err(err) = encode_record(&reading, dst, config.range_policy) {
            debug!(
                channel = reading.channel,
                tag = reading.sensor.tag(),
                error = %err,
                "payload encode failed"
            );
            dst.truncate(start);
            return Err(err);
        }
        trace!(
            channel = reading.channel,
            tag = reading.sensor.tag(),
            "encoded record"
        );
    }

    debug!(bytes = dst.len() - start, records = lpp.len(), "encoded payload");
    Ok(())
}

fn encode_record(reading: &Reading, dst: &mut BytesMut, policy: RangePolicy) -> Result<()> {
    let Reading {
        sensor,
        channel,
        values,
    } = *reading;
    let out_of_range = || LppError::ValueOutOfRange { sensor, channel };

    dst.extend_from_slice(&[channel, sensor.tag()]);
    for (value, field) in values.iter().zip(sensor.fields()) {
        let raw = match field.to_raw(*value) {
            Some(raw) => raw,
            None if policy == RangePolicy::Clamp => {
                let raw = field.to_raw_saturating(*value).ok_or_else(out_of_range)?;
                warn!(channel, tag = sensor.tag(), value, raw, "clamped out-of-range value");
                raw
            }
            None => return Err(out_of_range()),
        };
        field.write_raw(raw, dst);
    }
    Ok(())
}

fn check_size(size: usize, config: &CodecConfig) -> Result<()> {
    match config.max_payload_size {
        Some(max) if size > max => Err(LppError::PayloadTooLarge { size, max }),
        _ => Ok(()),
    }
}
