use recodec_schema::{ElementKind, PrimKind};
use recodec_wire::{CursorReader, CursorWriter};

use crate::error::CodecError;
use crate::MAX_CONTAINER_LEN;

/// A single UTF-16 code unit.
///
/// Rust's native `char` is a 21-bit Unicode scalar value and cannot
/// represent a lone UTF-16 surrogate half, so `PRIM_CHAR` fields (which the
/// wire format fixes at exactly 2 bytes, matching a source platform whose
/// native `char` is 16 bits wide) are represented by this newtype instead
/// of `char`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Utf16CodeUnit(pub u16);

/// A self-contained element codec: a type that can write and read itself
/// against a [`CursorWriter`]/[`CursorReader`] pair with no external
/// context.
///
/// This trait is intentionally sealed to the primitive types, the
/// [`Utf16CodeUnit`] newtype, and `Option<String>` — it does not, and
/// cannot, cover `NESTED_RECORD`, because reading or writing a nested
/// record requires an extra argument (the nested type's own
/// `RecordCodec`) that a zero-argument trait method has no way to carry.
/// Nested-record element encoding lives in
/// [`crate::container::nested`] as a pair of free functions instead.
///
/// Container generators (`write_list`, `read_prim_array`, ...) are
/// generic over `E: ElementCodec` and are monomorphized once per concrete
/// `E` actually used in the program — there is no dynamic dispatch inside
/// the per-element loop.
pub trait ElementCodec: Sized {
    /// The element kind this type is bound to, for field-descriptor
    /// diagnostics. Never branched on at the element level.
    const KIND: ElementKind;

    fn write_element(&self, w: &mut CursorWriter);
    fn read_element(r: &mut CursorReader) -> Result<Self, CodecError>;
}

macro_rules! impl_prim_element_codec {
    ($ty:ty, $kind:expr, $write:ident, $read:ident) => {
        impl ElementCodec for $ty {
            const KIND: ElementKind = $kind;

            fn write_element(&self, w: &mut CursorWriter) {
                w.$write(*self);
            }

            fn read_element(r: &mut CursorReader) -> Result<Self, CodecError> {
                Ok(r.$read()?)
            }
        }
    };
}

impl_prim_element_codec!(i8, ElementKind::Prim(PrimKind::I8), write_i8, read_i8);
impl_prim_element_codec!(i16, ElementKind::Prim(PrimKind::I16), write_i16, read_i16);
impl_prim_element_codec!(i32, ElementKind::Prim(PrimKind::I32), write_i32, read_i32);
impl_prim_element_codec!(i64, ElementKind::Prim(PrimKind::I64), write_i64, read_i64);
impl_prim_element_codec!(f32, ElementKind::Prim(PrimKind::F32), write_f32, read_f32);
impl_prim_element_codec!(f64, ElementKind::Prim(PrimKind::F64), write_f64, read_f64);

impl ElementCodec for bool {
    const KIND: ElementKind = ElementKind::Prim(PrimKind::Bool);

    fn write_element(&self, w: &mut CursorWriter) {
        w.write_u8(if *self { 0x01 } else { 0x00 });
    }

    fn read_element(r: &mut CursorReader) -> Result<Self, CodecError> {
        Ok(r.read_u8()? != 0x00)
    }
}

impl ElementCodec for Utf16CodeUnit {
    const KIND: ElementKind = ElementKind::Prim(PrimKind::Char);

    fn write_element(&self, w: &mut CursorWriter) {
        w.write_u16(self.0);
    }

    fn read_element(r: &mut CursorReader) -> Result<Self, CodecError> {
        Ok(Utf16CodeUnit(r.read_u16()?))
    }
}

/// `Option<String>`: length-prefixed UTF-8 with `-1` as the null sentinel.
///
/// This is the one `ElementCodec` impl that is individually nullable —
/// every primitive above always writes a fixed number of bytes, but a
/// `STRING` element (whether it's a top-level field or a list/map element)
/// can itself be absent, independent of whether the *container* around it
/// is null.
impl ElementCodec for Option<String> {
    const KIND: ElementKind = ElementKind::String;

    fn write_element(&self, w: &mut CursorWriter) {
        match self {
            None => w.write_i32(-1),
            Some(s) => {
                w.write_i32(s.len() as i32);
                w.write_bytes(s.as_bytes());
            }
        }
    }

    fn read_element(r: &mut CursorReader) -> Result<Self, CodecError> {
        let len = r.read_i32()?;
        if len == -1 {
            return Ok(None);
        }
        if len < -1 || len > MAX_CONTAINER_LEN {
            return Err(CodecError::InvalidLength {
                what: "string",
                value: i64::from(len),
                offset: r.position(),
            });
        }
        let bytes = r.read_bytes(len as usize)?;
        let s = String::from_utf8(bytes.to_vec())
            .map_err(|_| CodecError::InvalidUtf8 { field: "string" })?;
        Ok(Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<E: ElementCodec + PartialEq + std::fmt::Debug>(value: E) {
        let mut w = CursorWriter::new();
        value.write_element(&mut w);
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        let decoded = E::read_element(&mut r).unwrap();
        assert_eq!(decoded, value);
        assert!(r.is_exhausted());
    }

    #[test]
    fn roundtrip_primitives() {
        roundtrip(-5i8);
        roundtrip(-1000i16);
        roundtrip(70_000i32);
        roundtrip(-9_000_000_000i64);
        roundtrip(0.25f32);
        roundtrip(1.5f64);
        roundtrip(true);
        roundtrip(false);
        roundtrip(Utf16CodeUnit(0xD83D)); // lone high surrogate, valid as a code unit
    }

    #[test]
    fn bool_any_nonzero_is_true() {
        let bytes = [0xFFu8];
        let mut r = CursorReader::new(&bytes);
        assert!(bool::read_element(&mut r).unwrap());
    }

    #[test]
    fn roundtrip_string_present_and_null() {
        roundtrip(Some("Hi".to_string()));
        roundtrip(None::<String>);
        roundtrip(Some(String::new()));
    }

    #[test]
    fn string_rejects_invalid_length() {
        let mut w = CursorWriter::new();
        w.write_i32(-2);
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        let err = Option::<String>::read_element(&mut r).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { value: -2, .. }));
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let mut w = CursorWriter::new();
        w.write_i32(3);
        w.write_bytes(&[0xFF, 0xFE, 0xFD]);
        let bytes = w.finish();
        let mut r = CursorReader::new(&bytes);
        let err = Option::<String>::read_element(&mut r).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8 { .. }));
    }
}
