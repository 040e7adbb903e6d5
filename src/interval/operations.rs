use super::half_open::{Endpoint, Interval};

/// Returns true if `intervals` are ascending and pairwise disjoint
/// (previous end <= next start).
pub fn is_ascending<T: Endpoint>(intervals: &[Interval<T>]) -> bool {
    intervals
        .windows(2)
        .all(|w| w[0].end() <= w[1].start())
}

/// Computes the intersection of two ascending, internally disjoint sequences.
///
/// Touching endpoints produce nothing: the ranges are half-open.
pub fn intersect_sorted<T: Endpoint>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    debug_assert!(is_ascending(a));
    debug_assert!(is_ascending(b));

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(a.len().max(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        if let Some(common) = a[i].intersection(&b[j]) {
            result.push(common);
        }

        match a[i].end().cmp(&b[j].end()) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    result
}
