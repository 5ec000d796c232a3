/// Errors raised by the type analyzer while building a record's field
/// descriptor list.
///
/// These are analyzer-time, not decode-time: every variant here is
/// returned from a `RecordCodec::build*` call, never from `encode` or
/// `decode`. See `recodec_codec::error::CodecError` for the umbrella error
/// type that wraps this alongside wire- and decode-level failures.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A container field's element kind could not be resolved to a
    /// supported [`crate::ElementKind`].
    ///
    /// In this codebase most instances of this failure are Rust compile
    /// errors (an `ElementCodec` bound that cannot be satisfied); this
    /// variant exists for the one residual runtime case — a nested
    /// record field whose own codec failed to construct — where the
    /// failure is only observable once the inner `RecordCodec::build`
    /// call returns.
    #[error("field `{field}` has an unsupported element kind")]
    UnsupportedElement { field: &'static str },

    /// A record type reached itself via nested-record fields during
    /// analysis, through a path other than the supported
    /// self-referential construction route.
    #[error("cyclic type graph detected while constructing a codec for `{type_name}`")]
    CyclicType { type_name: &'static str },
}
