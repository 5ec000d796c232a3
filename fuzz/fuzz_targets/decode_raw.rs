#![no_main]

use std::sync::{Arc, OnceLock};

use libfuzzer_sys::fuzz_target;
use recodec_codec::RecordCodec;

#[derive(Default)]
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

// Fuzz target: feed arbitrary bytes straight into `RecordCodec::decode`.
//
// Decoding adversarial input must never panic — only typed `CodecError`
// variants (or a successful decode) are acceptable outcomes. This covers
// length-prefix validation, UTF-8 validation, and truncated-read handling
// on raw, non-encoder-produced bytes.
fuzz_target!(|data: &[u8]| {
    let _ = codec().decode(data);
});
