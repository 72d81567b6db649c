//! Cayenne Low Power Payload (LPP) codec.
//!
//! A payload is a flat run of records, each framed as:
//! - a 1-byte channel identifier
//! - a 1-byte sensor type tag
//! - a fixed-size, big-endian fixed-point value whose layout the tag selects
//!
//! There is no header, length prefix or checksum. Decoding groups values by
//! sensor type and channel; encoding is the inverse.

pub mod codec;
pub mod error;
pub mod fixed;
pub mod object;
pub mod payload;
pub mod sensor;

pub use codec::{
    decode, decode_with_config, encode, encode_into, encode_with_config, CodecConfig, RangePolicy,
    HEADER_SIZE,
};
pub use error::{LppError, Result};
pub use object::{LppCodec, PayloadCodec};
pub use payload::{Accelerometer, CayenneLpp, GpsLocation, Gyrometer};
pub use sensor::{is_known_tag, sensor_name, SensorType};
