use recodec_schema::FieldCategory;
use recodec_wire::{CursorReader, CursorWriter};

use crate::error::CodecError;

/// One field's write and read routines, erased behind a boxed closure.
///
/// Each closure itself closes over a monomorphized container/element
/// routine (`write_list::<i32>`, `read_prim_array::<Utf16CodeUnit>`, ...),
/// so the dynamic dispatch here happens once per field per record, not
/// once per element — the per-element loop inside the closed-over
/// function is still a static call.
pub struct FieldBinding<T> {
    pub name: &'static str,
    pub category: FieldCategory,
    write: Box<dyn Fn(&T, &mut CursorWriter) + Send + Sync>,
    read: Box<dyn Fn(&mut T, &mut CursorReader) -> Result<(), CodecError> + Send + Sync>,
}

impl<T> FieldBinding<T> {
    pub fn new(
        name: &'static str,
        category: FieldCategory,
        write: impl Fn(&T, &mut CursorWriter) + Send + Sync + 'static,
        read: impl Fn(&mut T, &mut CursorReader) -> Result<(), CodecError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            category,
            write: Box::new(write),
            read: Box::new(read),
        }
    }

    pub fn write(&self, record: &T, w: &mut CursorWriter) {
        (self.write)(record, w);
    }

    pub fn read(&self, record: &mut T, r: &mut CursorReader) -> Result<(), CodecError> {
        (self.read)(record, r)
    }
}
