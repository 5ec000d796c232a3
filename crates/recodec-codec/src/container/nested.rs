use recodec_wire::{CursorReader, CursorWriter};

use crate::error::CodecError;
use crate::record::RecordCodec;

/// Nested-record presence marker: `0x00` for null, `0x01` for present. A
/// present value is followed immediately by the nested type's own field
/// bytes — there is no redundant second presence byte or length envelope,
/// since the container already knows where the nested record starts and
/// the nested `RecordCodec` knows its own field layout.
pub fn write_nested<U: Default + 'static>(w: &mut CursorWriter, value: &Option<Box<U>>, codec: &RecordCodec<U>) {
    match value {
        None => w.write_u8(0x00),
        Some(inner) => {
            w.write_u8(0x01);
            codec.encode_fields(inner, w);
        }
    }
}

pub fn read_nested<U: Default + 'static>(
    r: &mut CursorReader,
    codec: &RecordCodec<U>,
) -> Result<Option<Box<U>>, CodecError> {
    match r.read_u8()? {
        0x00 => Ok(None),
        _ => {
            let mut instance = codec.construct_default()?;
            codec.decode_fields(&mut instance, r)?;
            Ok(Some(Box::new(instance)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordCodec;

    #[derive(Default, PartialEq, Debug)]
    struct Leaf {
        value: i32,
    }

    fn leaf_codec() -> std::sync::Arc<RecordCodec<Leaf>> {
        RecordCodec::builder("Leaf")
            .field_i32("value", |l: &Leaf| l.value, |l: &mut Leaf, v| l.value = v)
            .build()
            .unwrap()
    }

    #[test]
    fn null_nested_is_single_zero_byte() {
        let codec = leaf_codec();
        let mut w = CursorWriter::new();
        write_nested::<Leaf>(&mut w, &None, &codec);
        assert_eq!(w.finish(), vec![0x00]);
    }

    #[test]
    fn present_nested_roundtrips_through_field_bytes() {
        let codec = leaf_codec();
        let value = Some(Box::new(Leaf { value: 42 }));
        let mut w = CursorWriter::new();
        write_nested(&mut w, &value, &codec);
        let bytes = w.finish();
        assert_eq!(bytes[0], 0x01);
        let mut r = CursorReader::new(&bytes);
        let decoded = read_nested(&mut r, &codec).unwrap();
        assert_eq!(decoded, value);
    }
}
