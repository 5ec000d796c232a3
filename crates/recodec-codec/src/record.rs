use std::any::TypeId;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};

use recodec_schema::{ElementKind, FieldCategory, PrimKind, SchemaError};
use recodec_wire::{CursorReader, CursorWriter};

use crate::container::{array, list, map, nested};
use crate::element::ElementCodec;
use crate::error::CodecError;
use crate::field::FieldBinding;
use crate::pool::PooledWriter;

/// A type whose shape is described entirely by the field bindings attached
/// to its [`RecordCodec`] rather than by any compile-time derive. The
/// `Default` bound supplies the "empty instance to decode into" that
/// [`RecordCodec::decode`] fills in field-by-field.
pub trait Record: Default + 'static {}

impl<T: Default + 'static> Record for T {}

thread_local! {
    static BUILDING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

/// RAII guard marking `TypeId::of::<T>()` as under construction for the
/// duration of a `build()` call. A second, reentrant `build()` for the
/// same type on the same thread (which would only happen if a builder
/// closure synchronously tried to build its own type rather than going
/// through [`RecordCodec::build_self_referential`]) is rejected as a
/// cyclic type instead of recursing forever.
struct BuildGuard {
    id: TypeId,
}

impl BuildGuard {
    fn enter(id: TypeId, type_name: &'static str) -> Result<Self, SchemaError> {
        let inserted = BUILDING.with(|set| set.borrow_mut().insert(id));
        if !inserted {
            return Err(SchemaError::CyclicType { type_name });
        }
        Ok(Self { id })
    }
}

impl Drop for BuildGuard {
    fn drop(&mut self) {
        BUILDING.with(|set| {
            set.borrow_mut().remove(&self.id);
        });
    }
}

/// A reference to a nested type's codec: either an already-built codec
/// shared by `Arc`, or a not-yet-upgraded `Weak` handle used when a type
/// refers to itself (directly or through a cycle of other record types).
///
/// The `Weak` variant is only ever populated from inside
/// [`RecordCodec::build_self_referential`], where the strong `Arc` that
/// the weak handle points at is guaranteed to be alive for as long as any
/// encode/decode call that reaches this field is in progress.
pub enum NestedCodecRef<U> {
    Owned(Arc<RecordCodec<U>>),
    SelfRef(Weak<RecordCodec<U>>),
}

impl<U> NestedCodecRef<U> {
    fn resolve(&self) -> Arc<RecordCodec<U>> {
        match self {
            Self::Owned(codec) => Arc::clone(codec),
            Self::SelfRef(weak) => weak
                .upgrade()
                .expect("self-referential codec dropped while an encode/decode call was in flight"),
        }
    }
}

impl<U> Clone for NestedCodecRef<U> {
    fn clone(&self) -> Self {
        match self {
            Self::Owned(codec) => Self::Owned(Arc::clone(codec)),
            Self::SelfRef(weak) => Self::SelfRef(Weak::clone(weak)),
        }
    }
}

impl<U> From<Arc<RecordCodec<U>>> for NestedCodecRef<U> {
    fn from(codec: Arc<RecordCodec<U>>) -> Self {
        Self::Owned(codec)
    }
}

/// A generated codec for one record type `T`, built once (typically behind
/// [`crate::RecordCodec::build`] and cached in a process-wide registry) and
/// reused for every subsequent `encode`/`decode` call.
///
/// `RecordCodec` holds no knowledge of `ElementKind` beyond the
/// [`FieldCategory`] stashed alongside each binding for diagnostics — the
/// actual read/write work for a field is a closure captured at build time
/// that calls directly into a monomorphized `ElementCodec` impl or
/// container generator, with no per-encode branch on field kind.
pub struct RecordCodec<T> {
    type_name: &'static str,
    fields: Vec<FieldBinding<T>>,
}

impl<T> std::fmt::Debug for RecordCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCodec")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields.iter().map(|fb| fb.name).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Record> RecordCodec<T> {
    #[must_use]
    pub fn builder(type_name: &'static str) -> RecordCodecBuilder<T> {
        RecordCodecBuilder {
            type_name,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldBinding<T>] {
        &self.fields
    }

    /// Encode `record` (or the top-level-null sentinel, for `None`) into a
    /// freshly returned `Vec<u8>`. The writer used internally is drawn
    /// from a thread-local scratch pool, so only the final copy out of the
    /// pool — unavoidable, since the caller needs an owned, independently
    /// sized buffer — allocates once the pool's buffer has grown to its
    /// steady-state size.
    pub fn encode(&self, record: Option<&T>) -> Vec<u8> {
        let mut w = PooledWriter::acquire();
        match record {
            None => w.write_u8(0x00),
            Some(r) => {
                w.write_u8(0x01);
                self.encode_fields(r, &mut w);
            }
        }
        w.finish()
    }

    pub(crate) fn encode_fields(&self, record: &T, w: &mut CursorWriter) {
        for field in &self.fields {
            field.write(record, w);
        }
    }

    /// Decode a top-level record, honoring the leading null/presence byte.
    /// An empty input is treated the same as the null sentinel rather than
    /// a truncation error.
    pub fn decode(&self, bytes: &[u8]) -> Result<Option<T>, CodecError> {
        if bytes.is_empty() {
            return Ok(None);
        }
        let mut r = CursorReader::new(bytes);
        match r.read_u8()? {
            0x00 => Ok(None),
            _ => {
                let mut instance = self.construct_default()?;
                self.decode_fields(&mut instance, &mut r)?;
                Ok(Some(instance))
            }
        }
    }

    pub(crate) fn decode_fields(
        &self,
        record: &mut T,
        r: &mut CursorReader,
    ) -> Result<(), CodecError> {
        for field in &self.fields {
            field.read(record, r)?;
        }
        Ok(())
    }

    /// Build an empty `T` to decode field values into, converting a panic
    /// inside a hand-written `Default` impl into a typed error instead of
    /// unwinding across the decode boundary.
    pub(crate) fn construct_default(&self) -> Result<T, CodecError> {
        catch_unwind(AssertUnwindSafe(T::default)).map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panicked during construction".to_string());
            CodecError::ConstructionFailed {
                type_name: self.type_name,
                reason,
            }
        })
    }
}

/// Accumulates field bindings before producing an immutable, shareable
/// [`RecordCodec`]. Each `field_*` method takes an accessor pair — a
/// borrowing getter used on the encode path and a setter used on the
/// decode path — rather than an owned value, so encoding a `Vec`/`String`/
/// `HashMap` field never clones it just to hand it to the writer.
pub struct RecordCodecBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldBinding<T>>,
}

macro_rules! scalar_field_method {
    ($method:ident, $ty:ty, $prim:expr, $write:ident, $read:ident) => {
        #[must_use]
        pub fn $method(
            mut self,
            name: &'static str,
            get: impl Fn(&T) -> $ty + Send + Sync + 'static,
            set: impl Fn(&mut T, $ty) + Send + Sync + 'static,
        ) -> Self {
            self.fields.push(FieldBinding::new(
                name,
                FieldCategory::Prim($prim),
                move |record, w| w.$write(get(record)),
                move |record, r| {
                    let value = r.$read()?;
                    set(record, value);
                    Ok(())
                },
            ));
            self
        }
    };
}

impl<T: Record> RecordCodecBuilder<T> {
    scalar_field_method!(field_i8, i8, PrimKind::I8, write_i8, read_i8);
    scalar_field_method!(field_i16, i16, PrimKind::I16, write_i16, read_i16);
    scalar_field_method!(field_i32, i32, PrimKind::I32, write_i32, read_i32);
    scalar_field_method!(field_i64, i64, PrimKind::I64, write_i64, read_i64);
    scalar_field_method!(field_f32, f32, PrimKind::F32, write_f32, read_f32);
    scalar_field_method!(field_f64, f64, PrimKind::F64, write_f64, read_f64);

    #[must_use]
    pub fn field_bool(
        mut self,
        name: &'static str,
        get: impl Fn(&T) -> bool + Send + Sync + 'static,
        set: impl Fn(&mut T, bool) + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::Prim(PrimKind::Bool),
            move |record, w| w.write_u8(if get(record) { 0x01 } else { 0x00 }),
            move |record, r| {
                set(record, r.read_u8()? != 0x00);
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_char(
        mut self,
        name: &'static str,
        get: impl Fn(&T) -> crate::Utf16CodeUnit + Send + Sync + 'static,
        set: impl Fn(&mut T, crate::Utf16CodeUnit) + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::Prim(PrimKind::Char),
            move |record, w| w.write_u16(get(record).0),
            move |record, r| {
                set(record, crate::Utf16CodeUnit(r.read_u16()?));
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_string(
        mut self,
        name: &'static str,
        get: impl Fn(&T) -> &Option<String> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<String>) + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::String,
            move |record, w| get(record).write_element(w),
            move |record, r| {
                let value = Option::<String>::read_element(r)?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_list<E: ElementCodec + Send + Sync + 'static>(
        mut self,
        name: &'static str,
        get: impl Fn(&T) -> &Option<Vec<E>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<Vec<E>>) + Send + Sync + 'static,
    ) -> Self {
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::List(E::KIND),
            move |record, w| list::write_list(w, get(record)),
            move |record, r| {
                let value = list::read_list::<E>(r)?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_prim_array<E: ElementCodec + Send + Sync + 'static>(
        mut self,
        name: &'static str,
        get: impl Fn(&T) -> &Option<Box<[E]>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<Box<[E]>>) + Send + Sync + 'static,
    ) -> Self {
        let category = match E::KIND {
            ElementKind::Prim(p) => FieldCategory::PrimArray(p),
            other => panic!("field_prim_array requires a primitive element kind, got {other:?}"),
        };
        self.fields.push(FieldBinding::new(
            name,
            category,
            move |record, w| array::write_prim_array(w, get(record)),
            move |record, r| {
                let value = array::read_prim_array::<E>(r)?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_map<K, V>(
        mut self,
        name: &'static str,
        get: impl Fn(&T) -> &Option<HashMap<K, V>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<HashMap<K, V>>) + Send + Sync + 'static,
    ) -> Self
    where
        K: ElementCodec + Eq + Hash + Send + Sync + 'static,
        V: ElementCodec + Send + Sync + 'static,
    {
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::Map(K::KIND, V::KIND),
            move |record, w| map::write_map(w, get(record)),
            move |record, r| {
                let value = map::read_map::<K, V>(r)?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_nested<U: Record>(
        mut self,
        name: &'static str,
        type_name: &'static str,
        codec: impl Into<NestedCodecRef<U>>,
        get: impl Fn(&T) -> &Option<Box<U>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<Box<U>>) + Send + Sync + 'static,
    ) -> Self {
        let codec = codec.into();
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::NestedRecord(type_name),
            {
                let codec = codec.clone();
                move |record, w| nested::write_nested(w, get(record), &codec.resolve())
            },
            move |record, r| {
                let value = nested::read_nested(r, &codec.resolve())?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    /// Convenience wrapper over [`field_nested`](Self::field_nested) for the
    /// self-referential case: takes the `Weak` handle directly instead of
    /// requiring the caller to wrap it in [`NestedCodecRef::SelfRef`].
    #[must_use]
    pub fn field_nested_weak<U: Record>(
        self,
        name: &'static str,
        type_name: &'static str,
        codec: Weak<RecordCodec<U>>,
        get: impl Fn(&T) -> &Option<Box<U>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<Box<U>>) + Send + Sync + 'static,
    ) -> Self {
        self.field_nested(name, type_name, NestedCodecRef::SelfRef(codec), get, set)
    }

    #[must_use]
    pub fn field_list_nested<U: Record>(
        mut self,
        name: &'static str,
        type_name: &'static str,
        codec: impl Into<NestedCodecRef<U>>,
        get: impl Fn(&T) -> &Option<Vec<Option<Box<U>>>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<Vec<Option<Box<U>>>>) + Send + Sync + 'static,
    ) -> Self {
        let codec = codec.into();
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::List(ElementKind::NestedRecord(type_name)),
            {
                let codec = codec.clone();
                move |record, w| list::write_list_nested(w, get(record), &codec.resolve())
            },
            move |record, r| {
                let value = list::read_list_nested(r, &codec.resolve())?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    #[must_use]
    pub fn field_map_nested_value<K: ElementCodec + Eq + Hash + Send + Sync + 'static, U: Record>(
        mut self,
        name: &'static str,
        type_name: &'static str,
        codec: impl Into<NestedCodecRef<U>>,
        get: impl Fn(&T) -> &Option<HashMap<K, Option<Box<U>>>> + Send + Sync + 'static,
        set: impl Fn(&mut T, Option<HashMap<K, Option<Box<U>>>>) + Send + Sync + 'static,
    ) -> Self {
        let codec = codec.into();
        self.fields.push(FieldBinding::new(
            name,
            FieldCategory::Map(K::KIND, ElementKind::NestedRecord(type_name)),
            {
                let codec = codec.clone();
                move |record, w| map::write_map_nested_value(w, get(record), &codec.resolve())
            },
            move |record, r| {
                let value = map::read_map_nested_value(r, &codec.resolve())?;
                set(record, value);
                Ok(())
            },
        ));
        self
    }

    /// Finalize the codec. Fails only if this thread is already in the
    /// middle of building another `RecordCodec<T>` for the same `T` —
    /// evidence of a genuine construction cycle rather than the
    /// intentionally self-referential case, which goes through
    /// [`RecordCodec::build_self_referential`] instead.
    pub fn build(self) -> Result<Arc<RecordCodec<T>>, CodecError> {
        let _guard = BuildGuard::enter(TypeId::of::<T>(), self.type_name)?;
        Ok(Arc::new(RecordCodec {
            type_name: self.type_name,
            fields: self.fields,
        }))
    }
}

impl<T: Record> RecordCodec<T> {
    /// Build a codec for a type that refers to itself, directly or through
    /// a chain of nested types. `f` receives a `Weak` handle to the codec
    /// being constructed — pass it through to [`RecordCodecBuilder::field_nested`]
    /// (or the list/map variants) for whichever field closes the cycle.
    pub fn build_self_referential(
        type_name: &'static str,
        f: impl FnOnce(&Weak<RecordCodec<T>>) -> RecordCodecBuilder<T>,
    ) -> Result<Arc<RecordCodec<T>>, CodecError> {
        let _guard = BuildGuard::enter(TypeId::of::<T>(), type_name)?;
        let codec = Arc::new_cyclic(|weak| {
            let builder = f(weak);
            RecordCodec {
                type_name,
                fields: builder.fields,
            }
        });
        Ok(codec)
    }
}
