pub mod quicksort_hoare;
pub mod quicksort_lomuto;
pub mod selection_sort;
