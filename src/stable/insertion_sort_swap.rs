//! Insertion sort, swap-based variant. Bubbles each element of the unsorted
//! suffix down through the sorted prefix with neighbor swaps.
//!
//! Stable, in-place, adaptive: *O*(*n*) on already sorted input, *O*(*n*^2)
//! worst-case.

sort_impl!("insertion_sort_swap_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    insertion_sort(v);
}

// --- IMPL ---

fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;

        // Strict comparison, equal elements are never swapped past each
        // other.
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
