use crate::element_kind::{ElementKind, PrimKind};

/// The category a field is bound to, as determined by which builder method
/// registered it (see `recodec_codec::record::RecordCodecBuilder`).
///
/// This mirrors the category tag set in the data model: every field
/// belongs to exactly one of these, and containers additionally carry the
/// resolved element (and, for maps, key) kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldCategory {
    Prim(PrimKind),
    String,
    List(ElementKind),
    Map(ElementKind, ElementKind),
    PrimArray(PrimKind),
    NestedRecord(&'static str),
}

impl FieldCategory {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FieldCategory::Prim(k) => ElementKind::Prim(k).name(),
            FieldCategory::String => "STRING",
            FieldCategory::List(_) => "LIST",
            FieldCategory::Map(_, _) => "MAP",
            FieldCategory::PrimArray(_) => "PRIM_ARRAY",
            FieldCategory::NestedRecord(_) => "NESTED_RECORD",
        }
    }
}

/// A single field's metadata, as produced by the type analyzer.
///
/// The name exists for diagnostics only — it never appears on the wire.
/// Wire position is implied by the field's index in the owning
/// `RecordCodec`'s field table, which is exactly the order fields were
/// registered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub category: FieldCategory,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: &'static str, category: FieldCategory) -> Self {
        Self { name, category }
    }
}
