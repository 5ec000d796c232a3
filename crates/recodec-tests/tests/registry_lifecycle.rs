//! Cross-thread registry lifecycle: register on one thread, retrieve on
//! another, then clear and confirm lookups miss while handles obtained
//! before the clear remain valid.

mod common;

use std::sync::Arc;

use common::{scalar_codec, Scalar};
use recodec_registry::CodecRegistry;

#[test]
fn registered_codec_is_visible_from_another_thread_then_cleared() {
    let registry = Arc::new(CodecRegistry::new());
    registry.register(scalar_codec());

    let handle = {
        let registry = Arc::clone(&registry);
        std::thread::spawn(move || registry.get::<Scalar>())
    };
    let from_other_thread = handle.join().unwrap();
    assert!(from_other_thread.is_some());

    let held = registry.get::<Scalar>().unwrap();
    registry.clear();
    assert!(registry.get::<Scalar>().is_none());

    // The handle obtained before `clear` is still fully usable.
    let bytes = held.encode(Some(&Scalar::default()));
    assert_eq!(held.decode(&bytes).unwrap(), Some(Scalar::default()));
}
