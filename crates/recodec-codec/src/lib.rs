#![warn(clippy::pedantic)]

pub mod container;
pub mod element;
pub mod error;
pub mod field;
pub mod pool;
pub mod record;

pub use element::{ElementCodec, Utf16CodeUnit};
pub use error::CodecError;
pub use record::{NestedCodecRef, Record, RecordCodec, RecordCodecBuilder};

/// Maximum number of elements (or key/value pairs) a single container may
/// declare on the wire.
///
/// A corrupt or adversarial length field must never be allowed to trigger
/// an unbounded allocation before the reader has confirmed the bytes
/// actually exist. This limit is generous for any realistic record but
/// finite: `decode` rejects anything larger with
/// [`CodecError::InvalidLength`] before calling `Vec::with_capacity` or
/// `HashMap::with_capacity`.
pub const MAX_CONTAINER_LEN: i32 = 64_000_000;
