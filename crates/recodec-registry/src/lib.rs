#![warn(clippy::pedantic)]

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use recodec_codec::{CodecError, Record, RecordCodec};

/// Process-wide cache of lazily built [`RecordCodec`]s, keyed by `T`'s
/// `TypeId`.
///
/// Building a codec walks a type's full field list once; most callers want
/// to pay that cost a single time per type and then share the resulting
/// `Arc<RecordCodec<T>>` across every thread that encodes or decodes `T`.
/// `CodecRegistry` is that cache — interior mutability lives behind an
/// `RwLock` around a type-erased table, following the same pattern other
/// shared, concurrently-read stores in this crate family use.
pub struct CodecRegistry {
    entries: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl CodecRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default registry, initialized on first use.
    #[must_use]
    pub fn global() -> &'static CodecRegistry {
        static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CodecRegistry::default)
    }

    /// Insert (or replace) the codec for `T`.
    pub fn register<T: Record>(&self, codec: Arc<RecordCodec<T>>) {
        let mut entries = self.entries.write().expect("registry lock poisoned");
        entries.insert(TypeId::of::<T>(), codec as Arc<dyn Any + Send + Sync>);
    }

    /// Look up a previously registered codec for `T`, if any.
    #[must_use]
    pub fn get<T: Record>(&self) -> Option<Arc<RecordCodec<T>>> {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries.get(&TypeId::of::<T>()).map(|entry| {
            Arc::clone(entry)
                .downcast::<RecordCodec<T>>()
                .expect("TypeId key guarantees the stored value is RecordCodec<T>")
        })
    }

    /// Return the cached codec for `T`, building and registering it with
    /// `build` if this is the first call for `T`.
    ///
    /// # Errors
    ///
    /// Propagates whatever `build` returns if construction fails (e.g. a
    /// [`recodec_codec::CodecError::Schema`] for a genuinely cyclic type).
    pub fn get_or_init<T: Record>(
        &self,
        build: impl FnOnce() -> Result<Arc<RecordCodec<T>>, CodecError>,
    ) -> Result<Arc<RecordCodec<T>>, CodecError> {
        if let Some(codec) = self.get::<T>() {
            return Ok(codec);
        }
        let codec = build()?;
        self.register(Arc::clone(&codec));
        Ok(codec)
    }

    /// Drop every cached codec. Mainly useful for tests that rebuild a
    /// type's codec under different conditions between cases.
    pub fn clear(&self) {
        self.entries.write().expect("registry lock poisoned").clear();
    }
}
