pub mod insertion_sort_binary;
pub mod insertion_sort_shift;
pub mod insertion_sort_swap;
pub mod merge_sort;
