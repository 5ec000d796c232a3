#![no_main]

use std::sync::{Arc, OnceLock};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use recodec_codec::RecordCodec;

#[derive(Arbitrary, Default, Clone, Debug)]
struct Scalars {
    a: i32,
    b: i64,
    label: Option<String>,
    values: Option<Vec<i32>>,
}

fn codec() -> &'static Arc<RecordCodec<Scalars>> {
    static CODEC: OnceLock<Arc<RecordCodec<Scalars>>> = OnceLock::new();
    CODEC.get_or_init(|| {
        RecordCodec::builder("Scalars")
            .field_i32("a", |s: &Scalars| s.a, |s: &mut Scalars, v| s.a = v)
            .field_i64("b", |s: &Scalars| s.b, |s: &mut Scalars, v| s.b = v)
            .field_string(
                "label",
                |s: &Scalars| &s.label,
                |s: &mut Scalars, v| s.label = v,
            )
            .field_list(
                "values",
                |s: &Scalars| &s.values,
                |s: &mut Scalars, v| s.values = v,
            )
            .build()
            .unwrap()
    })
}

// Fuzz target: arbitrary `Scalars` values must survive an encode/decode
// round trip byte-for-byte equivalent to the original.
fuzz_target!(|value: Scalars| {
    let codec = codec();
    let bytes = codec.encode(Some(&value));
    let decoded = codec
        .decode(&bytes)
        .expect("decoding the codec's own encoder output must never fail")
        .expect("a Some(value) input must decode back to Some(_)");

    assert_eq!(decoded.a, value.a);
    assert_eq!(decoded.b, value.b);
    assert_eq!(decoded.label, value.label);
    assert_eq!(decoded.values, value.values);
});
