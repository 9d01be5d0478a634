// crates/infra/src/collation/czech.rs
//! Czech collation.
//!
//! Strings are compared level by level over their whole length:
//!
//! 1. primary: symbols < digits < Czech alphabet < other letters.
//!    `č ř š ž` and the digraph `ch` are letters of their own.
//! 2. secondary: remaining accents (`a` < `á`, `ú` < `ů`).
//! 3. tertiary: lowercase before uppercase, consulted only when
//!    case-sensitive.

use std::cmp::Ordering;

use cetnik_ports::collation::Collator;
use cetnik_shared_kernel::CaseMode;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

const CARON: char = '\u{030C}';

const GROUP_SYMBOL: u64 = 1 << 32;
const GROUP_DIGIT: u64 = 2 << 32;
const GROUP_LETTER: u64 = 3 << 32;
const GROUP_OTHER: u64 = 4 << 32;

/// Czech alphabet; the index is the primary weight within [`GROUP_LETTER`].
const ALPHABET: [&str; 31] = [
    "a", "b", "c", "č", "d", "e", "f", "g", "h", "ch", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "ř", "s",
    "š", "t", "u", "v", "w", "x", "y", "z", "ž",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    primary: u64,
    secondary: u64,
    tertiary: u8,
}

impl Element {
    const fn new(primary: u64, tertiary: u8) -> Self {
        Self { primary, secondary: 0, tertiary }
    }

    fn add_mark(&mut self, mark: char) {
        self.secondary = self.secondary.saturating_mul(128).saturating_add(mark_weight(mark));
    }
}

/// Czech (`cs`) collator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CzechCollator;

impl CzechCollator {
    pub const fn new() -> Self {
        Self
    }
}

impl Collator for CzechCollator {
    fn compare(&self, a: &str, b: &str, case_mode: CaseMode) -> Ordering {
        let left = elements(a);
        let right = elements(b);

        let primary = left.iter().map(|e| e.primary).cmp(right.iter().map(|e| e.primary));
        primary
            .then_with(|| left.iter().map(|e| e.secondary).cmp(right.iter().map(|e| e.secondary)))
            .then_with(|| match case_mode {
                CaseMode::Sensitive => left.iter().map(|e| e.tertiary).cmp(right.iter().map(|e| e.tertiary)),
                CaseMode::Insensitive => Ordering::Equal,
            })
    }

    fn locale(&self) -> &str {
        "cs"
    }
}

fn letter_weight(unit: &str) -> Option<u64> {
    ALPHABET.iter().position(|l| *l == unit).map(|i| GROUP_LETTER + i as u64)
}

fn mark_weight(mark: char) -> u64 {
    match mark {
        '\u{0301}' => 1,
        CARON => 2,
        '\u{030A}' => 3,
        '\u{0300}'..='\u{036F}' => 4 + (u64::from(mark) - 0x300),
        _ => 127,
    }
}

#[inline]
fn case_weight(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

fn elements(s: &str) -> Vec<Element> {
    let chars: Vec<char> = s.nfd().collect();
    let mut out: Vec<Element> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if is_combining_mark(c) {
            match out.last_mut() {
                Some(last) => last.add_mark(c),
                None => out.push(Element::new(GROUP_SYMBOL + u64::from(c), 0)),
            }
            i += 1;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let lower = c.to_ascii_lowercase();
            let mut buf = [0u8; 4];
            let (unit, consumed): (&str, usize) = match (lower, next) {
                ('c', Some('h' | 'H')) => ("ch", 2),
                ('c', Some(CARON)) => ("č", 2),
                ('r', Some(CARON)) => ("ř", 2),
                ('s', Some(CARON)) => ("š", 2),
                ('z', Some(CARON)) => ("ž", 2),
                _ => (lower.encode_utf8(&mut buf), 1),
            };
            let primary = letter_weight(unit).unwrap_or(GROUP_OTHER + u64::from(lower));
            out.push(Element::new(primary, case_weight(c)));
            i += consumed;
            continue;
        }

        let primary = if let Some(digit) = c.to_digit(10).filter(|_| c.is_ascii_digit()) {
            GROUP_DIGIT + u64::from(digit)
        } else if c.is_numeric() {
            GROUP_DIGIT + u64::from(c)
        } else if c.is_alphabetic() {
            GROUP_OTHER + c.to_lowercase().next().map_or(u64::from(c), u64::from)
        } else {
            GROUP_SYMBOL + u64::from(c)
        };
        out.push(Element::new(primary, case_weight(c)));
        i += 1;
    }

    out
}
