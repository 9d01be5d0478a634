// crates/usecase/src/api.rs
use cetnik_domain::{AnalysisResult, DiscountTable, analytics::SortMode, analytics::sort_entries};
use cetnik_ports::collation::Collator;
use cetnik_shared_kernel::{CaseMode, CharKey, Count};

/// Count the characters of `text` into the four category tables.
pub fn analyze_text(text: &str, case_sensitive: bool) -> AnalysisResult {
    cetnik_domain::analyze_text(text, CaseMode::from(case_sensitive))
}

/// Parse the characters to subtract into a single table.
pub fn parse_discount(text: &str, case_sensitive: bool) -> DiscountTable {
    cetnik_domain::parse_discount(text, CaseMode::from(case_sensitive))
}

/// Order entries for display.
///
/// Alphabetical mode compares display glyphs with `collator`.
pub fn sort_characters(
    entries: Vec<(CharKey, Count)>,
    mode: SortMode,
    case_sensitive: bool,
    collator: &dyn Collator,
) -> Vec<(CharKey, Count)> {
    let case_mode = CaseMode::from(case_sensitive);
    sort_entries(entries, mode, |a, b| collator.compare(a, b, case_mode))
}
