// crates/domain/src/analytics/sort.rs
use std::{cmp::Ordering, fmt, str::FromStr};

use cetnik_shared_kernel::{CharKey, Count, DomainError};
use serde::{Deserialize, Serialize};

use super::display::CharDisplay;
use crate::classify::{is_diacritic_key, key_has_digit, key_has_letter};

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Type tier first, then collation of the display form.
    #[default]
    Alphabetical,
    /// Descending count; equal counts keep their input order.
    Frequency,
}

impl SortMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::Frequency => "frequency",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetical" | "alpha" | "az" => Ok(Self::Alphabetical),
            "frequency" | "freq" | "count" => Ok(Self::Frequency),
            other => Err(DomainError::UnknownSortMode { value: other.to_string() }),
        }
    }
}

/// 文字種別による大分類（アルファベット順ソート用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTier {
    Letter = 0,
    Diacritic = 1,
    Symbol = 2,
    Digit = 3,
}

impl TypeTier {
    pub fn of(key: &CharKey) -> Self {
        // composite keys contain ASCII letters (CAP/SMALL), so check them first
        if is_diacritic_key(key) {
            Self::Diacritic
        } else if key_has_letter(key.as_str()) {
            Self::Letter
        } else if key_has_digit(key.as_str()) {
            Self::Digit
        } else {
            Self::Symbol
        }
    }
}

/// Orders `(key, count)` entries.
///
/// `compare_text` compares display forms within a tier; callers pass a
/// locale collator already set to the wanted case sensitivity. Both modes
/// use a stable sort, so sorting an already sorted list leaves it as is.
pub fn sort_entries<F>(mut entries: Vec<(CharKey, Count)>, mode: SortMode, compare_text: F) -> Vec<(CharKey, Count)>
where
    F: Fn(&str, &str) -> Ordering,
{
    match mode {
        SortMode::Frequency => entries.sort_by(|a, b| b.1.cmp(&a.1)),
        SortMode::Alphabetical => {
            let mut keyed: Vec<_> = entries
                .into_iter()
                .map(|entry| {
                    let tier = TypeTier::of(&entry.0);
                    let text = CharDisplay::of(&entry.0).glyph;
                    (tier, text, entry)
                })
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| compare_text(&a.1, &b.1)));
            entries = keyed.into_iter().map(|(_, _, entry)| entry).collect();
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, i64)]) -> Vec<(CharKey, Count)> {
        pairs.iter().map(|(k, v)| (CharKey::from(*k), Count::new(*v))).collect()
    }

    fn keys(sorted: &[(CharKey, Count)]) -> Vec<&str> {
        sorted.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn codepoint(a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn alphabetical_puts_letters_before_digits() {
        let sorted = sort_entries(entries(&[("B", 1), ("A", 3), ("1", 5)]), SortMode::Alphabetical, codepoint);
        assert_eq!(keys(&sorted), vec!["A", "B", "1"]);
    }

    #[test]
    fn frequency_is_descending() {
        let sorted = sort_entries(entries(&[("B", 1), ("A", 3), ("1", 5)]), SortMode::Frequency, codepoint);
        assert_eq!(keys(&sorted), vec!["1", "A", "B"]);
    }

    #[test]
    fn frequency_ties_keep_input_order() {
        let sorted = sort_entries(entries(&[("x", 2), ("a", 2), ("m", 2)]), SortMode::Frequency, codepoint);
        assert_eq!(keys(&sorted), vec!["x", "a", "m"]);
    }

    #[test]
    fn tiers_order_letter_diacritic_symbol_digit() {
        let input = entries(&[("7", 1), ("?", 1), ("\u{0301}_CAP", 1), ("q", 1), ("\u{030C}", 1)]);
        let sorted = sort_entries(input, SortMode::Alphabetical, codepoint);
        let tiers: Vec<_> = sorted.iter().map(|(k, _)| TypeTier::of(k)).collect();
        assert_eq!(
            tiers,
            vec![
                TypeTier::Letter,
                TypeTier::Diacritic,
                TypeTier::Diacritic,
                TypeTier::Symbol,
                TypeTier::Digit
            ]
        );
    }

    #[test]
    fn diacritics_compare_by_glyph() {
        // ´ (U+00B4) sorts before ˇ (U+02C7) by code point
        let input = entries(&[("\u{030C}", 1), ("\u{0301}", 1)]);
        let sorted = sort_entries(input, SortMode::Alphabetical, codepoint);
        assert_eq!(keys(&sorted), vec!["\u{0301}", "\u{030C}"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let input = entries(&[("b", 1), ("B", 1), ("a", 4), ("%", 2), ("0", 2)]);
        for mode in [SortMode::Alphabetical, SortMode::Frequency] {
            let once = sort_entries(input.clone(), mode, codepoint);
            let twice = sort_entries(once.clone(), mode, codepoint);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn parse_sort_mode() {
        assert_eq!("frequency".parse::<SortMode>().unwrap(), SortMode::Frequency);
        assert_eq!(" Alphabetical ".parse::<SortMode>().unwrap(), SortMode::Alphabetical);
        assert!("random".parse::<SortMode>().is_err());
    }
}
