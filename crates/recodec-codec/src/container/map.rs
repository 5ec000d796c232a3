use std::collections::HashMap;
use std::hash::Hash;

use recodec_wire::{CursorReader, CursorWriter};

use super::{read_length, write_length};
use crate::element::ElementCodec;
use crate::error::CodecError;
use crate::record::RecordCodec;

/// Generated map routine for a scalar value kind. Entries are written in
/// the iteration order of the caller's `HashMap`, which is unspecified —
/// callers that need a canonical byte stream for a given set of entries
/// must sort on their own side before encoding.
pub fn write_map<K: ElementCodec, V: ElementCodec>(
    w: &mut CursorWriter,
    value: &Option<HashMap<K, V>>,
) {
    write_length(w, value.as_ref().map(HashMap::len));
    if let Some(entries) = value {
        for (k, v) in entries {
            k.write_element(w);
            v.write_element(w);
        }
    }
}

pub fn read_map<K: ElementCodec + Eq + Hash, V: ElementCodec>(
    r: &mut CursorReader,
) -> Result<Option<HashMap<K, V>>, CodecError> {
    let Some(n) = read_length(r, "map")? else {
        return Ok(None);
    };
    let mut entries = HashMap::with_capacity(n);
    for _ in 0..n {
        let k = K::read_element(r)?;
        let v = V::read_element(r)?;
        entries.insert(k, v);
    }
    Ok(Some(entries))
}

/// Map-with-nested-record-values variant: keys stay scalar (a `NESTED_RECORD`
/// key has no defined ordering/equality and is rejected at analysis time),
/// values delegate to the value type's own `RecordCodec`.
pub fn write_map_nested_value<K: ElementCodec, U: Default + 'static>(
    w: &mut CursorWriter,
    value: &Option<HashMap<K, Option<Box<U>>>>,
    codec: &RecordCodec<U>,
) {
    write_length(w, value.as_ref().map(HashMap::len));
    if let Some(entries) = value {
        for (k, v) in entries {
            k.write_element(w);
            super::nested::write_nested(w, v, codec);
        }
    }
}

pub fn read_map_nested_value<K: ElementCodec + Eq + Hash, U: Default + 'static>(
    r: &mut CursorReader,
    codec: &RecordCodec<U>,
) -> Result<Option<HashMap<K, Option<Box<U>>>>, CodecError> {
    let Some(n) = read_length(r, "map")? else {
        return Ok(None);
    };
    let mut entries = HashMap::with_capacity(n);
    for _ in 0..n {
        let k = K::read_element(r)?;
        let v = super::nested::read_nested(r, codec)?;
        entries.insert(k, v);
    }
    Ok(Some(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_int_keyed_map() {
        let mut entries = HashMap::new();
        entries.insert(1i32, 100i32);
        entries.insert(2i32, 200i32);
        let value = Some(entries);
        let mut w = CursorWriter::new();
        write_map(&mut w, &value);
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        assert_eq!(read_map::<i32, i32>(&mut r).unwrap(), value);
    }

    #[test]
    fn null_map_is_minus_one() {
        let mut w = CursorWriter::new();
        write_map::<i32, i32>(&mut w, &None);
        let bytes = w.finish();
        assert_eq!(bytes, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn empty_map_is_zero_with_no_entries() {
        let mut w = CursorWriter::new();
        write_map::<i32, i32>(&mut w, &Some(HashMap::new()));
        let bytes = w.finish();
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn oversized_length_is_rejected_before_allocating() {
        let mut w = CursorWriter::new();
        w.write_i32(i32::MAX);
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        let err = read_map::<i32, i32>(&mut r).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { .. }));
    }
}
