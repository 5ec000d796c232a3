#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;

pub use cursor::{CursorReader, CursorWriter};
pub use error::WireError;
