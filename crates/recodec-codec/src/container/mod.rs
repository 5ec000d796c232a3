pub mod array;
pub mod list;
pub mod map;
pub mod nested;

use recodec_wire::{CursorReader, CursorWriter};

use crate::error::CodecError;
use crate::MAX_CONTAINER_LEN;

/// Write a container's 4-byte length prefix: `-1` for null, otherwise the
/// element (or entry) count.
pub(crate) fn write_length(w: &mut CursorWriter, len: Option<usize>) {
    match len {
        None => w.write_i32(-1),
        Some(n) => w.write_i32(n as i32),
    }
}

/// Read and validate a container's 4-byte length prefix.
///
/// Returns `Ok(None)` for the null sentinel (`-1`), `Ok(Some(n))` for a
/// valid non-negative count, or `Err(InvalidLength)` for anything else —
/// including a suspiciously large count, which is rejected before any
/// allocation is attempted.
pub(crate) fn read_length(r: &mut CursorReader, what: &'static str) -> Result<Option<usize>, CodecError> {
    let offset = r.position();
    let len = r.read_i32()?;
    if len == -1 {
        return Ok(None);
    }
    if len < -1 || len > MAX_CONTAINER_LEN {
        return Err(CodecError::InvalidLength {
            what,
            value: i64::from(len),
            offset,
        });
    }
    Ok(Some(len as usize))
}
