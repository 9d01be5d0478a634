// crates/ports/src/collation.rs
use std::cmp::Ordering;

use cetnik_shared_kernel::CaseMode;

/// Locale-aware string comparison.
///
/// With [`CaseMode::Insensitive`] strings differing only in case compare
/// equal; with [`CaseMode::Sensitive`] case breaks the tie.
pub trait Collator: Send + Sync {
    fn compare(&self, a: &str, b: &str, case_mode: CaseMode) -> Ordering;

    /// Short identifier of the collation (e.g. `"cs"`).
    fn locale(&self) -> &str;
}
