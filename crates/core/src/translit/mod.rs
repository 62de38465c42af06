//! Transliteration primitives.
//!
//! Each public function here is total: it never fails and passes through
//! anything it does not recognise. The registry treats them as opaque
//! `&str -> String` capabilities.

pub mod kana;
pub mod pali;
pub mod thai;

pub use kana::roman_to_kana;
pub use thai::{roman_to_thai, thai_to_roman, Style};
