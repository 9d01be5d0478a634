// crates/domain/src/classify.rs
//! Per-character classification.
//!
//! Letters and digits are ASCII only. Anything outside `A-Z`, `a-z`, `0-9`
//! that is not whitespace is a symbol, unless canonical decomposition
//! exposes an ASCII base letter first.

use cetnik_shared_kernel::{COMPOSITE_SEPARATOR, CharKey};
use serde::{Deserialize, Serialize};

use crate::diacritics;

/// 文字種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Symbol,
}

#[inline]
pub fn classify(c: char) -> CharClass {
    if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_letter(c) {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

#[inline]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Unicode `White_Space`, plus U+FEFF which editors leave at file starts.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// A key counts as a letter when it holds an ASCII letter anywhere.
pub fn key_has_letter(key: &str) -> bool {
    key.chars().any(is_letter)
}

pub fn key_has_digit(key: &str) -> bool {
    key.chars().any(is_digit)
}

/// Diacritic keys: anything holding the composite separator, or one of the
/// combining marks listed in the glyph table. Other marks are symbols.
pub fn is_diacritic_key(key: &CharKey) -> bool {
    key.as_str().contains(COMPOSITE_SEPARATOR) || diacritics::is_known_combining(key.as_str())
}
