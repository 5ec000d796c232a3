use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

use recodec_wire::CursorWriter;

thread_local! {
    static SCRATCH: RefCell<Vec<CursorWriter>> = const { RefCell::new(Vec::new()) };
}

/// A [`CursorWriter`] borrowed from the thread-local scratch pool.
///
/// `encode` calls that stay within one field's closure hierarchy reuse the
/// same buffer across calls instead of allocating a fresh `Vec` every
/// time; the buffer is cleared (not deallocated) and returned to the pool
/// on drop, so steady-state encoding after the first few calls performs no
/// further heap allocation unless a record's encoded size grows past the
/// buffer's prior high-water mark.
pub struct PooledWriter {
    writer: Option<CursorWriter>,
}

impl PooledWriter {
    pub fn acquire() -> Self {
        let writer = SCRATCH.with(|pool| pool.borrow_mut().pop());
        Self {
            writer: Some(writer.unwrap_or_default()),
        }
    }
}

impl Deref for PooledWriter {
    type Target = CursorWriter;

    fn deref(&self) -> &CursorWriter {
        self.writer.as_ref().expect("writer taken before drop")
    }
}

impl DerefMut for PooledWriter {
    fn deref_mut(&mut self) -> &mut CursorWriter {
        self.writer.as_mut().expect("writer taken before drop")
    }
}

impl Drop for PooledWriter {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            writer.clear();
            SCRATCH.with(|pool| pool.borrow_mut().push(writer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquired_writer_starts_empty() {
        let w = PooledWriter::acquire();
        assert!(w.is_empty());
    }

    #[test]
    fn writer_is_reused_after_drop() {
        {
            let mut w = PooledWriter::acquire();
            w.write_i32(7);
            assert!(w.capacity() > 0);
        }
        let w = PooledWriter::acquire();
        assert!(w.is_empty());
        assert!(w.capacity() > 0, "expected the prior buffer's capacity to be reused");
    }
}
