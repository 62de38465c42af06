//! Akkhara core: script identifiers, transliteration primitives and the
//! conversion registry.
//!
//! Nothing in this crate performs I/O. The HTTP surface lives in
//! `akkhara-api`.

pub mod error;
pub mod registry;
pub mod script;
pub mod translit;
