// crates/domain/src/analysis/merge.rs
use cetnik_shared_kernel::CharKey;

use crate::{
    classify::{is_diacritic_key, key_has_digit, key_has_letter},
    model::{AnalysisResult, Category, DiscountTable},
};

/// Subtracts `discount` from a copy of `original`.
///
/// Each discount key is credited to the first table (letters, diacritics,
/// numbers, symbols) that already holds it. Keys found nowhere are
/// classified with [`classify_key`] and inserted with a negative count.
/// `original` is left untouched so callers can compare before and after.
pub fn merge_discount(original: &AnalysisResult, discount: &DiscountTable) -> AnalysisResult {
    let mut merged = original.clone();

    for (key, amount) in discount.iter() {
        if let Some(category) = merged.find_category(key.as_str()) {
            let table = merged.table_mut(category);
            let current = table.count(key.as_str());
            table.set(key.clone(), current - amount);
        } else if amount.is_positive() {
            let category = classify_key(key);
            log::debug!("discount key {key:?} absent from text, booked under {category}");
            merged.table_mut(category).set(key.clone(), -amount);
        }
    }

    merged
}

/// Category for a key that was never produced by the analyzer.
pub fn classify_key(key: &CharKey) -> Category {
    if is_diacritic_key(key) {
        Category::Diacritics
    } else if key_has_letter(key.as_str()) {
        Category::Letters
    } else if key_has_digit(key.as_str()) {
        Category::Numbers
    } else {
        Category::Symbols
    }
}
