use std::collections::BTreeMap;

/// Symbol frequencies for one input text.
///
/// A `BTreeMap` so that iteration order is fixed: the tree builder seeds its
/// queue from this map and needs a reproducible leaf order.
pub type FrequencyTable = BTreeMap<char, usize>;

/// Count how often each symbol occurs in `text`.
///
/// Every char of `text` is counted as-is; normalization (case-folding,
/// whitespace removal) is the caller's job. An empty input yields an empty
/// table, which the tree builder rejects.
pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut counts = FrequencyTable::new();
    for symbol in text.chars() {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}
