// crates/domain/src/analysis/analyzer.rs
use cetnik_shared_kernel::{CaseMode, CharKey};

use super::decompose::Decomposition;
use crate::{
    classify::{CharClass, classify, key_has_letter},
    model::AnalysisResult,
};

/// Builds the letter / diacritic / number / symbol histograms of `text`.
///
/// The text is walked one code point at a time. Whitespace is skipped.
/// A code point that decomposes under NFD contributes its base letter
/// (only when that is an ASCII letter after folding) plus one diacritic
/// per trailing mark. Anything else is classified on its own, so a combining
/// mark that arrives alone (text already in NFD) is a symbol. Digits and
/// symbols are never case-folded.
pub fn analyze_text(text: &str, case_mode: CaseMode) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    for c in text.chars() {
        let class = classify(c);
        if class == CharClass::Whitespace {
            continue;
        }

        let decomposition = Decomposition::of(c);
        if decomposition.has_marks() {
            let letter_key = case_mode.fold(decomposition.base());
            if key_has_letter(letter_key.as_str()) {
                result.letters.increment(letter_key);
            }
            for key in decomposition.mark_keys(case_mode) {
                result.diacritics.increment(key);
            }
            continue;
        }

        match class {
            CharClass::Digit => result.numbers.increment(CharKey::from_char(c)),
            CharClass::Letter => result.letters.increment(case_mode.fold(c)),
            CharClass::Symbol | CharClass::Whitespace => result.symbols.increment(CharKey::from_char(c)),
        }
    }

    log::trace!(
        "analyzed {} bytes into {} distinct keys ({case_mode:?})",
        text.len(),
        result.distinct_keys()
    );
    result
}
