// crates/domain/src/model/analysis_result.rs
use cetnik_shared_kernel::Count;
use serde::{Deserialize, Serialize};

use super::{Category, FrequencyTable};

/// Four frequency tables, one per [`Category`].
///
/// Keys are disjoint across tables in analyzer output. A merged result may
/// hold negative counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub letters: FrequencyTable,
    pub diacritics: FrequencyTable,
    pub numbers: FrequencyTable,
    pub symbols: FrequencyTable,
}

impl AnalysisResult {
    pub fn table(&self, category: Category) -> &FrequencyTable {
        match category {
            Category::Letters => &self.letters,
            Category::Diacritics => &self.diacritics,
            Category::Numbers => &self.numbers,
            Category::Symbols => &self.symbols,
        }
    }

    pub fn table_mut(&mut self, category: Category) -> &mut FrequencyTable {
        match category {
            Category::Letters => &mut self.letters,
            Category::Diacritics => &mut self.diacritics,
            Category::Numbers => &mut self.numbers,
            Category::Symbols => &mut self.symbols,
        }
    }

    /// Tables in `letters, diacritics, numbers, symbols` order.
    pub fn tables(&self) -> impl Iterator<Item = (Category, &FrequencyTable)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.table(c)))
    }

    /// First category (in [`Category::ALL`] order) holding `key`.
    pub fn find_category(&self, key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| self.table(*c).contains(key))
    }

    /// Count of `key` in the first table that holds it.
    pub fn lookup(&self, key: &str) -> Option<Count> {
        self.find_category(key).and_then(|c| self.table(c).get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.tables().all(|(_, t)| t.is_empty())
    }

    /// Number of distinct keys over all tables.
    pub fn distinct_keys(&self) -> usize {
        self.tables().map(|(_, t)| t.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use cetnik_shared_kernel::CharKey;

    use super::*;

    #[test]
    fn find_category_uses_fixed_order() {
        let mut result = AnalysisResult::default();
        result.symbols.increment(CharKey::from('x'));
        result.letters.increment(CharKey::from('x'));

        assert_eq!(result.find_category("x"), Some(Category::Letters));
        assert_eq!(result.find_category("y"), None);
    }

    #[test]
    fn lookup_and_emptiness() {
        let mut result = AnalysisResult::default();
        assert!(result.is_empty());
        result.numbers.add(CharKey::from('4'), Count::new(3));
        assert_eq!(result.lookup("4"), Some(Count::new(3)));
        assert_eq!(result.distinct_keys(), 1);
        assert!(!result.is_empty());
    }
}
