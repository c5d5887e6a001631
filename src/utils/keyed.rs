// ============================================================================
// collection-emitter - Keyed Utilities
// groupBy / countBy / sortBy over a computed key
// ============================================================================

use std::collections::BTreeMap;

/// Group elements by `key`, keeping each group in list order.
pub fn group_by<T, K: Ord>(list: &[T], mut key: impl FnMut(&T) -> K) -> BTreeMap<K, Vec<&T>> {
    let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();
    for item in list {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Count elements per `key`.
pub fn count_by<T, K: Ord>(list: &[T], mut key: impl FnMut(&T) -> K) -> BTreeMap<K, usize> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for item in list {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Elements ordered by `key`. The sort is stable; `key` runs once per element.
pub fn sort_by<T, K: Ord>(list: &[T], mut key: impl FnMut(&T) -> K) -> Vec<&T> {
    let mut keyed: Vec<(K, &T)> = list.iter().map(|item| (key(item), item)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}
