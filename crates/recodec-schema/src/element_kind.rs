/// The primitive component kinds: scalar values that never carry a null
/// sentinel of their own on the wire.
///
/// This is a strict subset of [`ElementKind`] — every `PrimKind` has a
/// matching `ElementKind` variant, but `ElementKind` additionally covers
/// `String` and `NestedRecord`, which *are* individually nullable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimKind {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    /// A single UTF-16 code unit (see [`ElementKind::Char`] for why this
    /// is not Rust's native `char`).
    Char,
}

impl PrimKind {
    /// Fixed wire width in bytes for this primitive kind.
    #[must_use]
    pub fn wire_width(self) -> usize {
        match self {
            PrimKind::I8 | PrimKind::Bool => 1,
            PrimKind::I16 | PrimKind::Char => 2,
            PrimKind::I32 | PrimKind::F32 => 4,
            PrimKind::I64 | PrimKind::F64 => 8,
        }
    }
}

/// The closed, finite tag set enumerating which codec pair to use for a
/// single scalar or container-element position.
///
/// `ElementKind` is the axis along which the container generators in
/// `recodec-codec` are specialized: a `List<i32>` field and a `List<String>`
/// field share the same generic `write_list`/`read_list` functions,
/// monomorphized once per concrete element type, and this enum exists so
/// field descriptors can *name* which instantiation a field is bound to,
/// for diagnostics — it is never branched on in the hot encode/decode path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Prim(PrimKind),
    /// Length-prefixed UTF-8, individually nullable (length `-1`).
    String,
    /// A 1-byte presence marker followed by a full nested record, if
    /// present. Carries the nested type's name for diagnostics, matching
    /// the type-name payload `FieldCategory::NestedRecord` carries for a
    /// direct (non-container) nested field.
    NestedRecord(&'static str),
}

impl ElementKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Prim(PrimKind::I8) => "PRIM_I8",
            ElementKind::Prim(PrimKind::I16) => "PRIM_I16",
            ElementKind::Prim(PrimKind::I32) => "PRIM_I32",
            ElementKind::Prim(PrimKind::I64) => "PRIM_I64",
            ElementKind::Prim(PrimKind::F32) => "PRIM_F32",
            ElementKind::Prim(PrimKind::F64) => "PRIM_F64",
            ElementKind::Prim(PrimKind::Bool) => "PRIM_BOOL",
            ElementKind::Prim(PrimKind::Char) => "PRIM_CHAR",
            ElementKind::String => "STRING",
            ElementKind::NestedRecord(_) => "NESTED_RECORD",
        }
    }
}

impl From<PrimKind> for ElementKind {
    fn from(kind: PrimKind) -> Self {
        ElementKind::Prim(kind)
    }
}
