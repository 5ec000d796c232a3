use recodec_wire::{CursorReader, CursorWriter};

use super::{read_length, write_length};
use crate::element::ElementCodec;
use crate::error::CodecError;
use crate::record::RecordCodec;

/// Generated list routine for scalar (primitive or string) element kinds.
///
/// This is a generic function, monomorphized once per concrete `E` used
/// anywhere in the program — the element loop below contains a single
/// static call to `E::write_element`, never a branch on `E::KIND`.
pub fn write_list<E: ElementCodec>(w: &mut CursorWriter, value: &Option<Vec<E>>) {
    write_length(w, value.as_ref().map(Vec::len));
    if let Some(items) = value {
        for item in items {
            item.write_element(w);
        }
    }
}

pub fn read_list<E: ElementCodec>(r: &mut CursorReader) -> Result<Option<Vec<E>>, CodecError> {
    let Some(n) = read_length(r, "list")? else {
        return Ok(None);
    };
    let mut items = Vec::with_capacity(n);
    for _ in 0..n {
        items.push(E::read_element(r)?);
    }
    Ok(Some(items))
}

/// List-of-nested-record variant: identical framing to [`write_list`], but
/// each element delegates to the nested type's own `RecordCodec` rather
/// than a self-contained `ElementCodec` impl.
pub fn write_list_nested<U: Default + 'static>(
    w: &mut CursorWriter,
    value: &Option<Vec<Option<Box<U>>>>,
    codec: &RecordCodec<U>,
) {
    write_length(w, value.as_ref().map(Vec::len));
    if let Some(items) = value {
        for item in items {
            super::nested::write_nested(w, item, codec);
        }
    }
}

pub fn read_list_nested<U: Default + 'static>(
    r: &mut CursorReader,
    codec: &RecordCodec<U>,
) -> Result<Option<Vec<Option<Box<U>>>>, CodecError> {
    let Some(n) = read_length(r, "list")? else {
        return Ok(None);
    };
    let mut items = Vec::with_capacity(n);
    for _ in 0..n {
        items.push(super::nested::read_nested(r, codec)?);
    }
    Ok(Some(items))
}
