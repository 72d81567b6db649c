use std::collections::BTreeMap;

use cayenne_lpp::{
    decode, encode, Accelerometer, CayenneLpp, GpsLocation, Gyrometer, LppError, SensorType,
};

fn channels<T>(entries: [(u8, T); 2]) -> BTreeMap<u8, T> {
    entries.into_iter().collect()
}

fn reference_vectors() -> Vec<(&'static str, Vec<u8>, CayenneLpp)> {
    vec![
        (
            "2 digital input",
            vec![3, 0, 100, 5, 0, 210],
            CayenneLpp {
                digital_input: channels([(3, 100), (5, 210)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 digital output",
            vec![3, 1, 100, 5, 1, 210],
            CayenneLpp {
                digital_output: channels([(3, 100), (5, 210)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 analog input",
            vec![3, 2, 0, 10, 5, 2, 3, 232],
            CayenneLpp {
                analog_input: channels([(3, 0.1), (5, 10.0)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 analog output",
            vec![3, 3, 0, 10, 5, 3, 3, 232],
            CayenneLpp {
                analog_output: channels([(3, 0.1), (5, 10.0)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 illuminance sensors",
            vec![3, 101, 0, 10, 5, 101, 3, 232],
            CayenneLpp {
                illuminance_sensor: channels([(3, 10), (5, 1000)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 presence sensors",
            vec![3, 102, 5, 5, 102, 3],
            CayenneLpp {
                presence_sensor: channels([(3, 5), (5, 3)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 temperature sensors",
            vec![3, 103, 1, 16, 5, 103, 0, 255],
            CayenneLpp {
                temperature_sensor: channels([(3, 27.2), (5, 25.5)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 humidity sensors",
            vec![3, 104, 41, 5, 104, 150],
            CayenneLpp {
                humidity_sensor: channels([(3, 20.5), (5, 75.0)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 accelerometers",
            vec![3, 113, 0, 1, 0, 2, 0, 3, 5, 113, 3, 234, 7, 211, 11, 187],
            CayenneLpp {
                accelerometer: channels([
                    (
                        3,
                        Accelerometer {
                            x: 0.001,
                            y: 0.002,
                            z: 0.003,
                        },
                    ),
                    (
                        5,
                        Accelerometer {
                            x: 1.002,
                            y: 2.003,
                            z: 3.003,
                        },
                    ),
                ]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 barometers",
            vec![3, 115, 4, 31, 5, 115, 9, 196],
            CayenneLpp {
                barometer: channels([(3, 105.5), (5, 250.0)]),
                ..CayenneLpp::default()
            },
        ),
        (
            "2 gyrometer sensors",
            vec![3, 134, 0, 1, 0, 2, 0, 3, 5, 134, 3, 233, 7, 210, 11, 187],
            CayenneLpp {
                gyrometer: channels([
                    (
                        3,
                        Gyrometer {
                            x: 0.01,
                            y: 0.02,
                            z: 0.03,
                        },
                    ),
                    (
                        5,
                        Gyrometer {
                            x: 10.01,
                            y: 20.02,
                            z: 30.03,
                        },
                    ),
                ]),
                ..CayenneLpp::default()
            },
        ),
        (
            "gps sensor",
            vec![1, 136, 6, 118, 95, 242, 150, 10, 0, 3, 232],
            CayenneLpp {
                gps_location: [(
                    1,
                    GpsLocation {
                        latitude: 42.3519,
                        longitude: -87.9094,
                        altitude: 10.0,
                    },
                )]
                .into_iter()
                .collect(),
                ..CayenneLpp::default()
            },
        ),
    ]
}

#[test]
fn decode_reference_vectors() {
    for (name, bytes, expected) in reference_vectors() {
        let lpp = decode(&bytes).unwrap_or_else(|err| panic!("{name}: {err}"));
        assert_eq!(lpp, expected, "{name}");
    }
}

#[test]
fn encode_reference_vectors() {
    for (name, bytes, expected) in reference_vectors() {
        let encoded = encode(&expected).unwrap_or_else(|err| panic!("{name}: {err}"));
        // Channels are ascending in every vector, so the bytes match exactly.
        assert_eq!(encoded.as_ref(), bytes.as_slice(), "{name}");
        assert_eq!(decode(&encoded).unwrap(), expected, "{name}");
    }
}

#[test]
fn combined_payload_round_trip() {
    let mut combined = CayenneLpp::default();
    let mut wire = Vec::new();
    for (_, bytes, expected) in reference_vectors() {
        wire.extend_from_slice(&bytes);
        let lpp = decode(&bytes).unwrap();
        assert_eq!(lpp, expected);
        combined.digital_input.extend(lpp.digital_input);
        combined.digital_output.extend(lpp.digital_output);
        combined.analog_input.extend(lpp.analog_input);
        combined.analog_output.extend(lpp.analog_output);
        combined.illuminance_sensor.extend(lpp.illuminance_sensor);
        combined.presence_sensor.extend(lpp.presence_sensor);
        combined.temperature_sensor.extend(lpp.temperature_sensor);
        combined.humidity_sensor.extend(lpp.humidity_sensor);
        combined.accelerometer.extend(lpp.accelerometer);
        combined.barometer.extend(lpp.barometer);
        combined.gyrometer.extend(lpp.gyrometer);
        combined.gps_location.extend(lpp.gps_location);
    }

    assert_eq!(decode(&wire).unwrap(), combined);
    assert_eq!(combined.len(), 23);
    assert_eq!(combined.encoded_len(), wire.len());

    let encoded = encode(&combined).unwrap();
    assert_eq!(encoded.len(), wire.len());
    assert_eq!(decode(&encoded).unwrap(), combined);
}

#[test]
fn field_bounds_round_trip() {
    let mut lpp = CayenneLpp::default();
    lpp.digital_input.insert(0, 255);
    lpp.digital_output.insert(255, 0);
    lpp.analog_input.insert(1, -327.68);
    lpp.analog_output.insert(2, 327.67);
    lpp.illuminance_sensor.insert(3, u16::MAX);
    lpp.presence_sensor.insert(4, 1);
    lpp.temperature_sensor.insert(5, -3276.8);
    lpp.humidity_sensor.insert(6, 127.5);
    lpp.accelerometer.insert(
        7,
        Accelerometer {
            x: -32.768,
            y: 32.767,
            z: 0.0,
        },
    );
    lpp.barometer.insert(8, 6553.5);
    lpp.gyrometer.insert(
        9,
        Gyrometer {
            x: -327.68,
            y: 327.67,
            z: -0.01,
        },
    );
    lpp.gps_location.insert(
        10,
        GpsLocation {
            latitude: -90.0,
            longitude: 179.9999,
            altitude: -83886.08,
        },
    );

    let encoded = encode(&lpp).unwrap();
    assert_eq!(encoded.len(), lpp.encoded_len());
    assert_eq!(decode(&encoded).unwrap(), lpp);
}

#[test]
fn truncated_buffers_never_decode() {
    for (name, bytes, _) in reference_vectors() {
        for len in 1..bytes.len() {
            let result = decode(&bytes[..len]);
            if result.is_ok() {
                // Cutting exactly between two records is a valid payload.
                continue;
            }
            assert!(
                matches!(result, Err(LppError::TruncatedBuffer { .. })),
                "{name} cut at {len}: {result:?}"
            );
        }
    }
}

#[test]
fn truncated_after_header() {
    let err = decode(&[3, 103]).unwrap_err();
    assert!(matches!(err, LppError::TruncatedBuffer { offset: 0, .. }));
}

#[test]
fn unknown_tag_aborts_whole_payload() {
    let err = decode(&[3, 0, 100, 9, 255, 0, 0, 5, 0, 210]).unwrap_err();
    assert!(matches!(
        err,
        LppError::UnknownTypeTag {
            tag: 255,
            offset: 3
        }
    ));
    assert_eq!(err.to_string(), "unknown type tag 255 at offset 3");
}

#[test]
fn duplicate_channel_keeps_last_record() {
    let lpp = decode(&[3, 103, 1, 16, 3, 103, 0, 255]).unwrap();
    assert_eq!(lpp.temperature_sensor.len(), 1);
    assert_eq!(lpp.temperature_sensor[&3], 25.5);
}

#[test]
fn out_of_range_error_names_sensor_and_channel() {
    let mut lpp = CayenneLpp::default();
    lpp.barometer.insert(12, 7000.0);
    let err = encode(&lpp).unwrap_err();
    assert!(matches!(
        err,
        LppError::ValueOutOfRange {
            sensor: SensorType::Barometer,
            channel: 12
        }
    ));
    assert_eq!(
        err.to_string(),
        "value out of range for barometer (115) on channel 12"
    );
}

#[test]
fn try_from_bytes() {
    let bytes: &[u8] = &[3, 102, 5];
    let lpp = CayenneLpp::try_from(bytes).unwrap();
    assert_eq!(lpp.presence_sensor[&3], 5);
    assert_eq!(lpp.encode().unwrap().as_ref(), bytes);
}
