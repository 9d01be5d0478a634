// crates/domain/src/model/frequency_table.rs
use cetnik_shared_kernel::{CharKey, Count};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Character key -> count histogram.
///
/// Iteration follows first-insertion order, which is the display order
/// before any explicit sort. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(IndexMap<CharKey, Count>);

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&mut self, key: CharKey) {
        self.0.entry(key).or_default().increment();
    }

    #[inline]
    pub fn add(&mut self, key: CharKey, amount: Count) {
        *self.0.entry(key).or_default() += amount;
    }

    /// Overwrites the count, keeping the key's position if it already exists.
    #[inline]
    pub fn set(&mut self, key: CharKey, count: Count) {
        self.0.insert(key, count);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<Count> {
        self.0.get(key).copied()
    }

    /// Count at `key`, zero when absent.
    #[inline]
    pub fn count(&self, key: &str) -> Count {
        self.get(key).unwrap_or_default()
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CharKey, Count)> + '_ {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &CharKey> + '_ {
        self.0.keys()
    }

    /// Sum of all counts; negative entries reduce it.
    pub fn total(&self) -> Count {
        self.0.values().sum()
    }

    /// Builds a table from literal pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        pairs.into_iter().map(|(k, v)| (CharKey::from(k), Count::new(v))).collect()
    }

    /// Owned `(key, count)` pairs in insertion order.
    pub fn entries(&self) -> Vec<(CharKey, Count)> {
        self.0.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }
}

impl FromIterator<(CharKey, Count)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (CharKey, Count)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (CharKey, Count);
    type IntoIter = indexmap::map::IntoIter<CharKey, Count>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_and_lookup() {
        let mut table = FrequencyTable::new();
        table.increment(CharKey::from('a'));
        table.increment(CharKey::from('b'));
        table.increment(CharKey::from('a'));

        assert_eq!(table.count("a"), 2);
        assert_eq!(table.count("b"), 1);
        assert_eq!(table.count("c"), 0);
        assert_eq!(table.get("c"), None);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn insertion_order_is_kept_across_updates() {
        let mut table = FrequencyTable::new();
        table.increment(CharKey::from('z'));
        table.increment(CharKey::from('a'));
        table.set(CharKey::from('z'), Count::new(-2));

        let keys: Vec<_> = table.keys().map(CharKey::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(table.total(), -1);
    }

    #[test]
    fn equality_ignores_order() {
        let left = FrequencyTable::from_pairs([("a", 1), ("b", 2)]);
        let right = FrequencyTable::from_pairs([("b", 2), ("a", 1)]);
        assert_eq!(left, right);
    }

    #[test]
    fn serializes_as_plain_object() {
        let table = FrequencyTable::from_pairs([("A", 2), ("1", -1)]);
        let json = serde_json::to_string(&table).expect("serializes");
        assert_eq!(json, r#"{"A":2,"1":-1}"#);
    }
}
