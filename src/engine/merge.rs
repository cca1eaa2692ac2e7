use std::collections::HashSet;

/// Ascending sequence of the set's members. Pure; an empty set yields an
/// empty sequence.
pub fn finalize(seen: HashSet<i64>) -> Vec<i64> {
    let mut numbers: Vec<i64> = seen.into_iter().collect();
    numbers.sort_unstable();
    numbers
}
