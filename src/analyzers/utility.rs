use std::collections::HashMap;
use std::hash::Hash;

use crate::analyzers::types::{Distribution, ValueCount};

/// Counts occurrences and sorts by descending count, breaking ties by the
/// value's natural ordering so the result does not depend on input order.
pub fn value_counts<K, I>(values: I) -> Vec<ValueCount<K>>
where
    K: Ord + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut out: Vec<ValueCount<K>> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    out
}

/// Most frequent value, smallest on ties. `None` for empty input.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Ord + Hash,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next().map(|c| c.value)
}

pub fn distribution<K, I>(values: I) -> Distribution<K>
where
    K: Ord + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let counts = value_counts(values);
    Distribution {
        most_common: counts.first().map(|c| c.value.clone()),
        counts,
    }
}

/// Arithmetic mean, `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
