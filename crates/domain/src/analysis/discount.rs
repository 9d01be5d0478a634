// crates/domain/src/analysis/discount.rs
use cetnik_shared_kernel::{CaseMode, CharKey};

use super::decompose::Decomposition;
use crate::{
    classify::{is_letter, is_whitespace},
    diacritics,
    model::DiscountTable,
};

/// Builds the flat table of characters to subtract.
///
/// Decomposes like [`super::analyze_text`], with two differences: a
/// standalone diacritic glyph (`´`, `ˇ`, ...) counts as one bare combining
/// mark, and the base of a decomposed character is always recorded, ASCII
/// or not. A combining mark typed on its own is kept literally, untagged.
pub fn parse_discount(text: &str, case_mode: CaseMode) -> DiscountTable {
    let mut table = DiscountTable::new();

    for c in text.chars().filter(|c| !is_whitespace(*c)) {
        if let Some(mark) = diacritics::combining_for(c) {
            table.increment(CharKey::from_char(mark));
            continue;
        }

        let decomposition = Decomposition::of(c);
        if decomposition.has_marks() {
            table.increment(case_mode.fold(decomposition.base()));
            for key in decomposition.mark_keys(case_mode) {
                table.increment(key);
            }
            continue;
        }

        if is_letter(c) {
            table.increment(case_mode.fold(c));
        } else {
            table.increment(CharKey::from_char(c));
        }
    }

    log::trace!("discount text yielded {} keys", table.len());
    table
}
