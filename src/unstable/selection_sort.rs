//! Selection sort. Grows a sorted prefix by repeatedly swapping the minimum
//! of the unsorted suffix to its front.
//!
//! Unstable (the minimum can jump ahead of equal elements), in-place,
//! *O*(*n*^2) comparisons but only *O*(*n*) swaps.

sort_impl!("selection_sort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    selection_sort(v);
}

// --- IMPL ---

fn selection_sort<T: Ord>(v: &mut [T]) {
    if v.is_empty() {
        return;
    }

    // `i` is the first index of the unsorted suffix.
    for i in 0..v.len() - 1 {
        let mut min_idx = i;

        for j in i + 1..v.len() {
            if v[j] < v[min_idx] {
                min_idx = j;
            }
        }

        // Swapping an already minimal element with itself is a no-op.
        v.swap(i, min_idx);
    }
}
