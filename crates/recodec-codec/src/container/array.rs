use recodec_wire::{CursorReader, CursorWriter};

use super::{read_length, write_length};
use crate::element::ElementCodec;
use crate::error::CodecError;

/// Generated primitive-array routine.
///
/// Identical wire framing to [`super::list::write_list`]; the difference
/// is entirely in the Rust-side representation. Decoding allocates a
/// boxed slice of exactly length *n* rather than a `Vec`, which may carry
/// spare capacity — this is the Rust realization of "allocate an array of
/// exactly length n" from the design notes. `field_prim_array`'s trait
/// bound restricts `E` to primitive and char element kinds; string and
/// nested-record elements are never valid here.
pub fn write_prim_array<E: ElementCodec>(w: &mut CursorWriter, value: &Option<Box<[E]>>) {
    write_length(w, value.as_deref().map(<[E]>::len));
    if let Some(items) = value {
        for item in items.iter() {
            item.write_element(w);
        }
    }
}

pub fn read_prim_array<E: ElementCodec>(
    r: &mut CursorReader,
) -> Result<Option<Box<[E]>>, CodecError> {
    let Some(n) = read_length(r, "prim_array")? else {
        return Ok(None);
    };
    let mut items = Vec::with_capacity(n);
    for _ in 0..n {
        items.push(E::read_element(r)?);
    }
    Ok(Some(items.into_boxed_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_prim_array_matches_list_wire_bytes() {
        let value: Option<Box<[i32]>> = Some(vec![1, 2, 3].into_boxed_slice());
        let mut w = CursorWriter::new();
        write_prim_array(&mut w, &value);
        let array_bytes = w.finish();

        let mut w2 = CursorWriter::new();
        super::super::list::write_list(&mut w2, &Some(vec![1i32, 2, 3]));
        let list_bytes = w2.finish();

        assert_eq!(array_bytes, list_bytes);

        let mut r = CursorReader::new(&array_bytes);
        let decoded = read_prim_array::<i32>(&mut r).unwrap().unwrap();
        assert_eq!(&*decoded, &[1, 2, 3]);
    }

    #[test]
    fn null_array_roundtrips() {
        let mut w = CursorWriter::new();
        write_prim_array::<i32>(&mut w, &None);
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        assert_eq!(read_prim_array::<i32>(&mut r).unwrap(), None);
    }

    #[test]
    fn decoded_array_has_exact_length_capacity() {
        let mut w = CursorWriter::new();
        write_prim_array(&mut w, &Some(vec![1i32, 2, 3, 4, 5].into_boxed_slice()));
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        let decoded = read_prim_array::<i32>(&mut r).unwrap().unwrap();
        assert_eq!(decoded.len(), 5);
    }
}
