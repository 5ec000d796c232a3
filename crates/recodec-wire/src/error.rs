/// Errors raised by [`crate::cursor::CursorReader`] while consuming a byte slice.
///
/// These are the lowest-level errors in the codec stack — they know nothing
/// about fields, records, or element kinds, only about running out of bytes.
/// Higher layers (`recodec-schema`, `recodec-codec`) wrap this error rather
/// than duplicating its variants.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum WireError {
    /// The reader needed more bytes than remained in the underlying slice.
    ///
    /// `offset` is the cursor position at the start of the failed read;
    /// `requested` is how many bytes that read needed; `available` is how
    /// many bytes actually remained from `offset` to the end of the slice.
    #[error(
        "unexpected end of input at offset {offset}: requested {requested} bytes, {available} available"
    )]
    Truncated {
        offset: usize,
        requested: usize,
        available: usize,
    },
}

// NOTE Summary
// #[derive(thiserror::Error)] generates Display + std::error::Error for us;
// each #[error("...")] attribute becomes the Display output. Without it
// we'd hand-write the boilerplate trait impls ourselves.
// Every variant carries enough context (offset, requested/available byte
// counts) that a caller can localize a truncation without re-running the
// decoder under a debugger — the same rationale the corpus uses for its
// own wire-level errors.
