use alloc::{collections::BTreeMap, vec::Vec};

use crate::attribute::types::AccessorPair;

/// Backing storage for a registry: accessors and valid values, both keyed
/// by attribute and kept in ascending key order.
///
/// The two maps are independent. A key may have valid values without
/// accessors and vice versa.
pub(crate) struct AttributeTable<'a, K, V> {
    accessors: BTreeMap<K, AccessorPair<'a, V>>,
    valid_values: BTreeMap<K, Vec<V>>,
}

impl<'a, K: Ord, V> AttributeTable<'a, K, V> {
    pub(crate) fn new() -> Self {
        Self {
            accessors: BTreeMap::new(),
            valid_values: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the accessors for `key`. Returns true if an
    /// existing entry was replaced.
    pub(crate) fn insert_accessors(&mut self, key: K, pair: AccessorPair<'a, V>) -> bool {
        self.accessors.insert(key, pair).is_some()
    }

    /// Inserts or replaces the valid values for `key`. Returns true if an
    /// existing list was replaced.
    pub(crate) fn insert_valid_values(&mut self, key: K, values: Vec<V>) -> bool {
        self.valid_values.insert(key, values).is_some()
    }

    pub(crate) fn accessors(&self, key: &K) -> Option<&AccessorPair<'a, V>> {
        self.accessors.get(key)
    }

    pub(crate) fn accessors_mut(&mut self, key: &K) -> Option<&mut AccessorPair<'a, V>> {
        self.accessors.get_mut(key)
    }

    pub(crate) fn valid_values(&self, key: &K) -> Option<&[V]> {
        self.valid_values.get(key).map(Vec::as_slice)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> {
        self.accessors.keys()
    }

    pub(crate) fn len(&self) -> usize {
        self.accessors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    type TestTable<'a> = AttributeTable<'a, u32, i32>;

    #[test]
    fn new_table_is_empty() {
        let table = TestTable::new();
        assert_eq!(table.len(), 0);
        assert_eq!(table.keys().count(), 0);
        assert!(table.accessors(&1).is_none());
        assert!(table.valid_values(&1).is_none());
    }

    #[test]
    fn insert_accessors_reports_replacement() {
        let mut table = TestTable::new();
        assert!(!table.insert_accessors(1, AccessorPair::read_only(|| 1)));
        assert!(table.insert_accessors(1, AccessorPair::read_only(|| 2)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.accessors(&1).and_then(|p| p.read()), Some(2));
    }

    #[test]
    fn keys_are_ascending() {
        let mut table = TestTable::new();
        for key in [30, 10, 20] {
            table.insert_accessors(key, AccessorPair::new(None, None));
        }
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn valid_values_are_independent_of_accessors() {
        let mut table = TestTable::new();
        assert!(!table.insert_valid_values(5, vec![1, 2]));
        assert_eq!(table.valid_values(&5), Some(&[1, 2][..]));
        assert!(table.accessors(&5).is_none());
        assert_eq!(table.keys().count(), 0);

        assert!(table.insert_valid_values(5, vec![3]));
        assert_eq!(table.valid_values(&5), Some(&[3][..]));
    }

    #[test]
    fn accessors_mut_dispatches_to_setter() {
        let stored = core::cell::Cell::new(0);
        let mut table = TestTable::new();
        table.insert_accessors(1, AccessorPair::write_only(|v| stored.set(v)));

        let pair = table.accessors_mut(&1).unwrap();
        assert_eq!(pair.write(42), Ok(()));
        assert_eq!(stored.get(), 42);
    }
}
