use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first record for every key, preserving input order.
pub fn dedupe_by_key<T, K, F>(records: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(records.len());
    let before = records.len();
    let kept: Vec<T> = records
        .into_iter()
        .filter(|record| seen.insert(key(record)))
        .collect();
    if kept.len() < before {
        tracing::debug!(removed = before - kept.len(), kept = kept.len(), "dropped duplicates");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_in_order() {
        let rows = vec![("A1", 1), ("A2", 2), ("A1", 3), ("A3", 4), ("A2", 5)];
        let kept = dedupe_by_key(rows, |row| row.0);
        assert_eq!(kept, vec![("A1", 1), ("A2", 2), ("A3", 4)]);
    }

    #[test]
    fn empty_input_stays_empty() {
        let kept: Vec<(&str, i32)> = dedupe_by_key(Vec::new(), |row| row.0);
        assert!(kept.is_empty());
    }
}
