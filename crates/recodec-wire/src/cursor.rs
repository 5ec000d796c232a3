use crate::error::WireError;

/// A forward-only, growable byte buffer that appends primitives and byte
/// runs in little-endian order.
///
/// `CursorWriter` is the write half of the byte-cursor pair described by
/// the codec engine: it knows nothing about fields, records, or element
/// kinds, only about appending fixed-width primitives and raw byte runs.
/// Everything above this layer (`recodec-codec`) is built by composing
/// these primitive operations.
///
/// The backing storage grows geometrically, following `Vec<u8>`'s own
/// growth strategy. [`CursorWriter::finish`] returns the exact-length byte
/// run written so far and clears the internal buffer (retaining its
/// capacity) so the cursor can be returned to a pool and reused without
/// reallocating from zero.
#[derive(Debug, Default)]
pub struct CursorWriter {
    buf: Vec<u8>,
}

impl CursorWriter {
    /// Create a writer with no preallocated capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create a writer with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Current write position, in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes currently reserved in the backing allocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append `data` verbatim.
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Copy the bytes written so far into a fresh, exact-length `Vec<u8>`
    /// and clear the internal buffer (retaining its capacity) for reuse.
    ///
    /// The returned `Vec` is an independent allocation: the writer's own
    /// backing storage is pool-owned (see `recodec_codec::pool`) and must
    /// never be aliased by the caller past this call.
    pub fn finish(&mut self) -> Vec<u8> {
        let out = self.buf.clone();
        self.buf.clear();
        out
    }

    /// Truncate the buffer to empty, retaining its capacity. Used by the
    /// scratch-buffer pool to reset a returned writer without `finish`'s
    /// extra clone.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

/// A non-owning, forward-only view over a byte slice.
///
/// `CursorReader` borrows its input for its entire lifetime and never
/// copies bytes except when the caller explicitly asks for an owned value
/// (e.g. `read_bytes` returns a borrowed sub-slice, not a `Vec`).
#[derive(Debug, Clone, Copy)]
pub struct CursorReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> CursorReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read position, in bytes from the start of the slice.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes remaining between the cursor and the end of the slice.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos + n;
        if end > self.buf.len() {
            return Err(WireError::Truncated {
                offset: self.pos,
                requested: n,
                available: self.buf.len() - self.pos,
            });
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, WireError> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, WireError> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        let b = self.take(8)?;
        Ok(i64::from_le_bytes(b.try_into().expect("take(8) yields 8 bytes")))
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f64(&mut self) -> Result<f64, WireError> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes(b.try_into().expect("take(8) yields 8 bytes")))
    }

    /// Borrow the next `n` bytes without copying.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        self.take(n)
    }
}
