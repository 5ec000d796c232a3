//! Decode-time failure modes: truncated input, rejected lengths, invalid
//! UTF-8, and a panicking `Default` impl.

mod common;

use common::{doomed_codec, scalar_codec, Scalar};
use recodec_codec::CodecError;

#[test]
fn truncated_input_surfaces_as_wire_error() {
    let codec = scalar_codec();
    let value = Scalar {
        a: 1,
        ..Scalar::default()
    };
    let mut bytes = codec.encode(Some(&value));
    bytes.truncate(bytes.len() - 2);
    let err = codec.decode(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::Wire(_)));
}

#[test]
fn empty_input_decodes_to_none_like_the_null_sentinel() {
    let codec = scalar_codec();
    assert_eq!(codec.decode(&[]).unwrap(), None);
}

#[test]
fn panicking_default_becomes_construction_failed_error() {
    let codec = doomed_codec();
    let bytes = vec![0x01]; // presence byte only; Doomed has no fields
    let err = codec.decode(&bytes).unwrap_err();
    match err {
        CodecError::ConstructionFailed { type_name, reason } => {
            assert_eq!(type_name, "Doomed");
            assert!(reason.contains("panics"));
        }
        other => panic!("expected ConstructionFailed, got {other:?}"),
    }
}

#[test]
fn oversized_length_prefix_is_rejected_without_panicking() {
    // Hand-craft a `Scalar` payload whose string length prefix claims an
    // absurd element count; decoding must reject it before ever calling
    // `Vec::with_capacity`/`String::from_utf8` with attacker-controlled size.
    let codec = scalar_codec();
    let mut bytes = codec.encode(Some(&Scalar::default()));
    // Overwrite the label field's length prefix (the last 4 bytes before
    // the empty presence+scalar payload wouldn't exist — since label is
    // `None` in the default, the prefix is the trailing 4 bytes: -1).
    let len = bytes.len();
    bytes[len - 4..].copy_from_slice(&i32::MAX.to_le_bytes());
    let err = codec.decode(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::InvalidLength { .. }));
}

#[test]
fn invalid_utf8_in_string_field_is_rejected() {
    let codec = scalar_codec();
    let mut bytes = codec.encode(Some(&Scalar::default()));
    let len = bytes.len();
    bytes[len - 4..].copy_from_slice(&3i32.to_le_bytes());
    bytes.extend_from_slice(&[0xFF, 0xFE, 0xFD]);
    let err = codec.decode(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::InvalidUtf8 { .. }));
}
