//! Decoded payload model, grouped by sensor type and channel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::Result;
use crate::sensor::SensorType;

/// Accelerometer reading in G.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accelerometer {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Gyrometer reading in degrees per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gyrometer {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// GPS fix: latitude and longitude in degrees, altitude in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GpsLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// A decoded Cayenne LPP payload.
///
/// Values are grouped by sensor type and keyed by channel. A channel seen
/// twice for the same type keeps the last value.
///
/// # Example
/// ```
/// use cayenne_lpp::CayenneLpp;
///
/// let lpp = CayenneLpp::decode(&[3, 103, 1, 16, 5, 103, 0, 255]).unwrap();
/// assert_eq!(lpp.temperature_sensor[&3], 27.2);
/// assert_eq!(lpp.temperature_sensor[&5], 25.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CayenneLpp {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub digital_input: BTreeMap<u8, u8>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub digital_output: BTreeMap<u8, u8>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analog_input: BTreeMap<u8, f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub analog_output: BTreeMap<u8, f64>,
    /// Lux.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub illuminance_sensor: BTreeMap<u8, u16>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub presence_sensor: BTreeMap<u8, u8>,
    /// Degrees Celsius.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub temperature_sensor: BTreeMap<u8, f64>,
    /// Relative humidity in percent.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub humidity_sensor: BTreeMap<u8, f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub accelerometer: BTreeMap<u8, Accelerometer>,
    /// Hectopascal.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub barometer: BTreeMap<u8, f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub gyrometer: BTreeMap<u8, Gyrometer>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub gps_location: BTreeMap<u8, GpsLocation>,
}

/// One (type, channel, value) triple with the value flattened to its fields.
///
/// Scalar types only use `values[0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Reading {
    pub sensor: SensorType,
    pub channel: u8,
    pub values: [f64; 3],
}

impl CayenneLpp {
    /// Decode a payload with the default configuration.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        codec::decode(buf)
    }

    /// Encode the payload with the default configuration.
    pub fn encode(&self) -> Result<bytes::Bytes> {
        codec::encode(self)
    }

    /// JSON object view, as handed to integrations.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Build a payload from its JSON object view.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Total number of records across all sensor types.
    pub fn len(&self) -> usize {
        self.counts().iter().map(|(_, count)| count).sum()
    }

    /// True when no sensor type holds a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the wire encoding in bytes.
    pub fn encoded_len(&self) -> usize {
        self.counts()
            .iter()
            .map(|(sensor, count)| count * (2 + sensor.size()))
            .sum()
    }

    fn counts(&self) -> [(SensorType, usize); 12] {
        [
            (SensorType::DigitalInput, self.digital_input.len()),
            (SensorType::DigitalOutput, self.digital_output.len()),
            (SensorType::AnalogInput, self.analog_input.len()),
            (SensorType::AnalogOutput, self.analog_output.len()),
            (SensorType::IlluminanceSensor, self.illuminance_sensor.len()),
            (SensorType::PresenceSensor, self.presence_sensor.len()),
            (SensorType::TemperatureSensor, self.temperature_sensor.len()),
            (SensorType::HumiditySensor, self.humidity_sensor.len()),
            (SensorType::Accelerometer, self.accelerometer.len()),
            (SensorType::Barometer, self.barometer.len()),
            (SensorType::Gyrometer, self.gyrometer.len()),
            (SensorType::GpsLocation, self.gps_location.len()),
        ]
    }

    /// Store a decoded value, replacing whatever the channel held before.
    ///
    /// Integer-valued types are only ever fed raw integers in range, so the
    /// narrowing casts are exact.
    pub(crate) fn insert(&mut self, reading: Reading) {
        let Reading {
            sensor,
            channel,
            values: [a, b, c],
        } = reading;
        match sensor {
            SensorType::DigitalInput => {
                self.digital_input.insert(channel, a as u8);
            }
            SensorType::DigitalOutput => {
                self.digital_output.insert(channel, a as u8);
            }
            SensorType::AnalogInput => {
                self.analog_input.insert(channel, a);
            }
            SensorType::AnalogOutput => {
                self.analog_output.insert(channel, a);
            }
            SensorType::IlluminanceSensor => {
                self.illuminance_sensor.insert(channel, a as u16);
            }
            SensorType::PresenceSensor => {
                self.presence_sensor.insert(channel, a as u8);
            }
            SensorType::TemperatureSensor => {
                self.temperature_sensor.insert(channel, a);
            }
            SensorType::HumiditySensor => {
                self.humidity_sensor.insert(channel, a);
            }
            SensorType::Accelerometer => {
                self.accelerometer
                    .insert(channel, Accelerometer { x: a, y: b, z: c });
            }
            SensorType::Barometer => {
                self.barometer.insert(channel, a);
            }
            SensorType::Gyrometer => {
                self.gyrometer.insert(channel, Gyrometer { x: a, y: b, z: c });
            }
            SensorType::GpsLocation => {
                self.gps_location.insert(
                    channel,
                    GpsLocation {
                        latitude: a,
                        longitude: b,
                        altitude: c,
                    },
                );
            }
        }
    }

    /// Every stored value, ordered by tag then channel.
    pub(crate) fn readings(&self) -> Vec<Reading> {
        let mut out = Vec::with_capacity(self.len());
        collect(&mut out, SensorType::DigitalInput, &self.digital_input, |v| {
            [f64::from(*v), 0.0, 0.0]
        });
        collect(&mut out, SensorType::DigitalOutput, &self.digital_output, |v| {
            [f64::from(*v), 0.0, 0.0]
        });
        collect(&mut out, SensorType::AnalogInput, &self.analog_input, |v| {
            [*v, 0.0, 0.0]
        });
        collect(&mut out, SensorType::AnalogOutput, &self.analog_output, |v| {
            [*v, 0.0, 0.0]
        });
        collect(
            &mut out,
            SensorType::IlluminanceSensor,
            &self.illuminance_sensor,
            |v| [f64::from(*v), 0.0, 0.0],
        );
        collect(&mut out, SensorType::PresenceSensor, &self.presence_sensor, |v| {
            [f64::from(*v), 0.0, 0.0]
        });
        collect(
            &mut out,
            SensorType::TemperatureSensor,
            &self.temperature_sensor,
            |v| [*v, 0.0, 0.0],
        );
        collect(&mut out, SensorType::HumiditySensor, &self.humidity_sensor, |v| {
            [*v, 0.0, 0.0]
        });
        collect(&mut out, SensorType::Accelerometer, &self.accelerometer, |v| {
            [v.x, v.y, v.z]
        });
        collect(&mut out, SensorType::Barometer, &self.barometer, |v| {
            [*v, 0.0, 0.0]
        });
        collect(&mut out, SensorType::Gyrometer, &self.gyrometer, |v| {
            [v.x, v.y, v.z]
        });
        collect(&mut out, SensorType::GpsLocation, &self.gps_location, |v| {
            [v.latitude, v.longitude, v.altitude]
        });
        out
    }
}

impl TryFrom<&[u8]> for CayenneLpp {
    type Error = crate::error::LppError;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::decode(buf)
    }
}

fn collect<T>(
    out: &mut Vec<Reading>,
    sensor: SensorType,
    values: &BTreeMap<u8, T>,
    flatten: impl Fn(&T) -> [f64; 3],
) {
    out.extend(values.iter().map(|(channel, value)| Reading {
        sensor,
        channel: *channel,
        values: flatten(value),
    }));
}
