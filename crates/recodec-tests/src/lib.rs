//! Placeholder library target.
//!
//! This crate exists to host integration tests (see `tests/`) that exercise
//! `recodec-wire`, `recodec-schema`, `recodec-codec`, and `recodec-registry`
//! together. It ships no public API of its own.
