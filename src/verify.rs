//! Order validation run after sorting.

/// Reports whether `v` is in non-decreasing order. Pure query, single linear
/// scan.
pub fn is_ascending<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
