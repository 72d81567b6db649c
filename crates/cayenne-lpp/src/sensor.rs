//! Sensor type tags and their field layouts.
//!
//! The set of types is closed: anything else on the wire is rejected.

use std::fmt;

use crate::fixed::FieldFormat;

/// Digital input (tag 0).
pub const DIGITAL_INPUT: u8 = 0;

/// Digital output (tag 1).
pub const DIGITAL_OUTPUT: u8 = 1;

/// Analog input (tag 2).
pub const ANALOG_INPUT: u8 = 2;

/// Analog output (tag 3).
pub const ANALOG_OUTPUT: u8 = 3;

/// Illuminance sensor (tag 101).
pub const ILLUMINANCE_SENSOR: u8 = 101;

/// Presence sensor (tag 102).
pub const PRESENCE_SENSOR: u8 = 102;

/// Temperature sensor (tag 103).
pub const TEMPERATURE_SENSOR: u8 = 103;

/// Humidity sensor (tag 104).
pub const HUMIDITY_SENSOR: u8 = 104;

/// Accelerometer (tag 113).
pub const ACCELEROMETER: u8 = 113;

/// Barometer (tag 115).
pub const BAROMETER: u8 = 115;

/// Gyrometer (tag 134).
pub const GYROMETER: u8 = 134;

/// GPS location (tag 136).
pub const GPS_LOCATION: u8 = 136;

const U8: &[FieldFormat] = &[FieldFormat::unsigned(1, 1)];
const ANALOG: &[FieldFormat] = &[FieldFormat::signed(2, 100)];
const ILLUMINANCE: &[FieldFormat] = &[FieldFormat::unsigned(2, 1)];
const TEMPERATURE: &[FieldFormat] = &[FieldFormat::signed(2, 10)];
const HUMIDITY: &[FieldFormat] = &[FieldFormat::unsigned(1, 2)];
const PRESSURE: &[FieldFormat] = &[FieldFormat::unsigned(2, 10)];
const ACCELERATION: &[FieldFormat] = &[
    FieldFormat::signed(2, 1000),
    FieldFormat::signed(2, 1000),
    FieldFormat::signed(2, 1000),
];
const ANGULAR_RATE: &[FieldFormat] = &[
    FieldFormat::signed(2, 100),
    FieldFormat::signed(2, 100),
    FieldFormat::signed(2, 100),
];
const LOCATION: &[FieldFormat] = &[
    FieldFormat::signed(3, 10_000),
    FieldFormat::signed(3, 10_000),
    FieldFormat::signed(3, 100),
];

/// A sensor type known to the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SensorType {
    DigitalInput = DIGITAL_INPUT,
    DigitalOutput = DIGITAL_OUTPUT,
    AnalogInput = ANALOG_INPUT,
    AnalogOutput = ANALOG_OUTPUT,
    IlluminanceSensor = ILLUMINANCE_SENSOR,
    PresenceSensor = PRESENCE_SENSOR,
    TemperatureSensor = TEMPERATURE_SENSOR,
    HumiditySensor = HUMIDITY_SENSOR,
    Accelerometer = ACCELEROMETER,
    Barometer = BAROMETER,
    Gyrometer = GYROMETER,
    GpsLocation = GPS_LOCATION,
}

impl SensorType {
    /// Every known sensor type, in tag order.
    pub const ALL: [SensorType; 12] = [
        SensorType::DigitalInput,
        SensorType::DigitalOutput,
        SensorType::AnalogInput,
        SensorType::AnalogOutput,
        SensorType::IlluminanceSensor,
        SensorType::PresenceSensor,
        SensorType::TemperatureSensor,
        SensorType::HumiditySensor,
        SensorType::Accelerometer,
        SensorType::Barometer,
        SensorType::Gyrometer,
        SensorType::GpsLocation,
    ];

    /// Look up the sensor type for a wire tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        let sensor = match tag {
            DIGITAL_INPUT => SensorType::DigitalInput,
            DIGITAL_OUTPUT => SensorType::DigitalOutput,
            ANALOG_INPUT => SensorType::AnalogInput,
            ANALOG_OUTPUT => SensorType::AnalogOutput,
            ILLUMINANCE_SENSOR => SensorType::IlluminanceSensor,
            PRESENCE_SENSOR => SensorType::PresenceSensor,
            TEMPERATURE_SENSOR => SensorType::TemperatureSensor,
            HUMIDITY_SENSOR => SensorType::HumiditySensor,
            ACCELEROMETER => SensorType::Accelerometer,
            BAROMETER => SensorType::Barometer,
            GYROMETER => SensorType::Gyrometer,
            GPS_LOCATION => SensorType::GpsLocation,
            _ => return None,
        };
        Some(sensor)
    }

    /// The wire tag.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            SensorType::DigitalInput => "digital input",
            SensorType::DigitalOutput => "digital output",
            SensorType::AnalogInput => "analog input",
            SensorType::AnalogOutput => "analog output",
            SensorType::IlluminanceSensor => "illuminance sensor",
            SensorType::PresenceSensor => "presence sensor",
            SensorType::TemperatureSensor => "temperature sensor",
            SensorType::HumiditySensor => "humidity sensor",
            SensorType::Accelerometer => "accelerometer",
            SensorType::Barometer => "barometer",
            SensorType::Gyrometer => "gyrometer",
            SensorType::GpsLocation => "gps location",
        }
    }

    /// Field layouts of the value, in wire order.
    pub fn fields(self) -> &'static [FieldFormat] {
        match self {
            SensorType::DigitalInput | SensorType::DigitalOutput | SensorType::PresenceSensor => U8,
            SensorType::AnalogInput | SensorType::AnalogOutput => ANALOG,
            SensorType::IlluminanceSensor => ILLUMINANCE,
            SensorType::TemperatureSensor => TEMPERATURE,
            SensorType::HumiditySensor => HUMIDITY,
            SensorType::Barometer => PRESSURE,
            SensorType::Accelerometer => ACCELERATION,
            SensorType::Gyrometer => ANGULAR_RATE,
            SensorType::GpsLocation => LOCATION,
        }
    }

    /// Value size in bytes, excluding the channel and tag bytes.
    pub fn size(self) -> usize {
        self.fields().iter().map(|field| field.width).sum()
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.tag())
    }
}

/// Returns a human-readable name for a wire tag.
pub fn sensor_name(tag: u8) -> &'static str {
    SensorType::from_tag(tag).map_or("UNKNOWN", SensorType::name)
}

/// Returns true if the codec has a transcoder for the tag.
pub fn is_known_tag(tag: u8) -> bool {
    SensorType::from_tag(tag).is_some()
}
