//! Decode a hex-encoded Cayenne LPP payload and print its JSON object view.
//!
//! Run with:
//!   RUST_LOG=cayenne_lpp=trace cargo run --example decode-hex -- 03670110056700ff

use cayenne_lpp::{LppCodec, PayloadCodec};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    let input = std::env::args()
        .nth(1)
        .ok_or("usage: decode-hex <hex payload>")?;
    let object = decode_hex(&LppCodec::new(), &input)?;
    println!("{}", serde_json::to_string_pretty(&object)?);
    Ok(())
}

fn decode_hex(
    codec: &dyn PayloadCodec,
    input: &str,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let payload = hex::decode(input.trim())?;
    Ok(codec.decode_object(&payload)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_hex_payload() {
        let object = decode_hex(&LppCodec::new(), " 03670110056700ff\n").unwrap();
        assert_eq!(object, json!({"temperatureSensor": {"3": 27.2, "5": 25.5}}));
    }

    #[test]
    fn rejects_invalid_hex() {
        let err = decode_hex(&LppCodec::new(), "0g").unwrap_err();
        assert!(err.downcast_ref::<hex::FromHexError>().is_some());

        let err = decode_hex(&LppCodec::new(), "036").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<hex::FromHexError>(),
            Some(hex::FromHexError::OddLength)
        ));
    }

    #[test]
    fn reports_codec_errors() {
        let err = decode_hex(&LppCodec::new(), "03ff00").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<cayenne_lpp::LppError>(),
            Some(cayenne_lpp::LppError::UnknownTypeTag { tag: 255, .. })
        ));
    }

    #[test]
    fn env_filter_accepts_target_directives() {
        assert!(EnvFilter::try_new("cayenne_lpp=trace").is_ok());
        assert!(EnvFilter::try_new("warn").is_ok());
    }
}
