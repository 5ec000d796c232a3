use recodec_schema::SchemaError;
use recodec_wire::WireError;

/// The umbrella error type returned from codec construction, `encode`
/// (infallible in practice, but shares this type for symmetry with
/// `decode`), and `decode`.
///
/// Error hierarchy:
///
/// ```text
///   CodecError
///   ├── Schema(SchemaError)      ← analyzer-time: UnsupportedElement, CyclicType
///   ├── Wire(WireError)          ← decode-time: Truncated reads
///   ├── InvalidLength            ← decode-time: a length prefix fails validation
///   ├── ConstructionFailed       ← decode-time: T::default() panicked
///   └── InvalidUtf8              ← decode-time: a STRING field's bytes are not valid UTF-8
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// An analyzer-time failure surfaced while building a `RecordCodec`.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A wire-level truncation surfaced while reading a primitive or byte run.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A length prefix was negative (other than the `-1` null sentinel) or
    /// exceeded [`crate::MAX_CONTAINER_LEN`].
    #[error("invalid length {value} for {what} at offset {offset}")]
    InvalidLength {
        what: &'static str,
        value: i64,
        offset: usize,
    },

    /// `T::default()` (or a nested record's) panicked while constructing
    /// an instance to decode into.
    #[error("construction of `{type_name}` failed: {reason}")]
    ConstructionFailed {
        type_name: &'static str,
        reason: String,
    },

    /// A string field's bytes were not valid UTF-8.
    #[error("field `{field}` contains invalid UTF-8")]
    InvalidUtf8 { field: &'static str },
}
