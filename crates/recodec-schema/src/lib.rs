#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod element_kind;
pub mod error;

pub use descriptor::{FieldCategory, FieldDescriptor};
pub use element_kind::{ElementKind, PrimKind};
pub use error::SchemaError;
