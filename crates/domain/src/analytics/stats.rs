// crates/domain/src/analytics/stats.rs
use cetnik_shared_kernel::Count;
use serde::Serialize;

use crate::model::{AnalysisResult, Category};

/// Per-category sums of a (possibly discounted) result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: Count,
    pub letters: Count,
    pub diacritics: Count,
    pub numbers: Count,
    pub symbols: Count,
}

impl Stats {
    pub fn of(result: &AnalysisResult) -> Self {
        let letters = result.letters.total();
        let diacritics = result.diacritics.total();
        let numbers = result.numbers.total();
        let symbols = result.symbols.total();
        Self {
            total: letters + diacritics + numbers + symbols,
            letters,
            diacritics,
            numbers,
            symbols,
        }
    }

    pub const fn get(&self, category: Category) -> Count {
        match category {
            Category::Letters => self.letters,
            Category::Diacritics => self.diacritics,
            Category::Numbers => self.numbers,
            Category::Symbols => self.symbols,
        }
    }
}

impl From<&AnalysisResult> for Stats {
    fn from(result: &AnalysisResult) -> Self {
        Self::of(result)
    }
}
