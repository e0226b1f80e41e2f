use sort_classics::stable::{
    insertion_sort_binary, insertion_sort_shift, insertion_sort_swap, merge_sort,
};
use sort_classics::unstable::{quicksort_hoare, quicksort_lomuto, selection_sort};
use sort_classics::{
    instantiate_sort_tests, instantiate_stable_sort_tests, patterns, search, shuffle, verify, Sort,
};

instantiate_sort_tests!(quicksort_hoare::SortImpl, quicksort_hoare);
instantiate_sort_tests!(quicksort_lomuto::SortImpl, quicksort_lomuto);
instantiate_sort_tests!(selection_sort::SortImpl, selection_sort);
instantiate_stable_sort_tests!(merge_sort::SortImpl, merge_sort);
instantiate_stable_sort_tests!(insertion_sort_swap::SortImpl, insertion_sort_swap);
instantiate_stable_sort_tests!(insertion_sort_shift::SortImpl, insertion_sort_shift);
instantiate_stable_sort_tests!(insertion_sort_binary::SortImpl, insertion_sort_binary);

// --- SEARCH ---

#[test]
fn binary_search_present() {
    let v = [1, 3, 5, 7, 9];

    assert_eq!(search::binary_search(&v, &5, 0, 4), Ok(Some(2)));
    assert_eq!(search::binary_search(&v, &1, 0, 4), Ok(Some(0)));
    assert_eq!(search::binary_search(&v, &9, 0, 4), Ok(Some(4)));

    // Every element must be findable over the full range.
    for (i, item) in v.iter().enumerate() {
        assert_eq!(search::binary_search(&v, item, 0, v.len() - 1), Ok(Some(i)));
    }
}

#[test]
fn binary_search_absent() {
    let v = [1, 3, 5, 7, 9];

    assert_eq!(search::binary_search(&v, &4, 0, 4), Ok(None));
    assert_eq!(search::binary_search(&v, &0, 0, 4), Ok(None));
    assert_eq!(search::binary_search(&v, &10, 0, 4), Ok(None));
}

#[test]
fn binary_search_sub_range() {
    let v = [1, 3, 5, 7, 9];

    // The range is inclusive on both ends.
    assert_eq!(search::binary_search(&v, &5, 2, 2), Ok(Some(2)));
    assert_eq!(search::binary_search(&v, &5, 3, 4), Ok(None));
    assert_eq!(search::binary_search(&v, &9, 1, 3), Ok(None));
    assert_eq!(search::binary_search(&v, &7, 1, 3), Ok(Some(3)));
}

#[test]
fn binary_search_invalid_range() {
    let v = [1, 3, 5, 7, 9];

    let err = search::binary_search(&v, &5, 3, 1).unwrap_err();
    assert_eq!(err, search::InvalidRange { from: 3, to: 1 });
    assert!(err.to_string().contains('3'));
}

#[test]
fn binary_search_duplicates() {
    let v = [1, 2, 2, 2, 3];

    let idx = search::binary_search(&v, &2, 0, 4).unwrap().unwrap();
    assert_eq!(v[idx], 2);
}

#[test]
fn binary_search_randomized() {
    let mut v = patterns::random_uniform(500, 0..=1000);
    v.sort();

    for probe in patterns::random_uniform(100, -10..=1010) {
        let result = search::binary_search(&v, &probe, 0, v.len() - 1).unwrap();

        match result {
            Some(idx) => assert_eq!(v[idx], probe),
            None => assert!(!v.contains(&probe)),
        }
    }
}

#[test]
fn insertion_point_examples() {
    let v = [1, 3, 5, 7, 9];

    assert_eq!(search::insertion_point(&v, &4), 2);
    assert_eq!(search::insertion_point(&v, &10), 5);
    assert_eq!(search::insertion_point(&v, &0), 0);
}

#[test]
fn insertion_point_ties_go_left() {
    let v = [1, 2, 2, 2, 3];

    // First element strictly greater than the probe.
    assert_eq!(search::insertion_point(&v, &2), 4);
    assert_eq!(search::insertion_point(&v, &1), 1);
    assert_eq!(search::insertion_point(&v, &3), 5);
}

#[test]
fn insertion_point_boundaries() {
    assert_eq!(search::insertion_point::<i32>(&[], &7), 0);
    assert_eq!(search::insertion_point(&[5], &4), 0);
    assert_eq!(search::insertion_point(&[5], &5), 1);
    assert_eq!(search::insertion_point(&[5], &6), 1);

    let all_same = [3, 3, 3, 3];
    assert_eq!(search::insertion_point(&all_same, &3), 4);
    assert_eq!(search::insertion_point(&all_same, &2), 0);
}

#[test]
fn insertion_point_preserves_order() {
    let mut v = patterns::random_uniform(300, 0..=50);
    v.sort();

    for probe in -1..=51 {
        let idx = search::insertion_point(&v, &probe);

        let mut extended = v.clone();
        extended.insert(idx, probe);
        assert!(verify::is_ascending(&extended));
    }
}

// --- SHUFFLE ---

#[test]
fn shuffle_deterministic() {
    let mut a: Vec<i32> = (0..100).collect();
    let mut b = a.clone();

    shuffle::shuffle(&mut a, "greedisgood");
    shuffle::shuffle(&mut b, "greedisgood");

    assert_eq!(a, b);
}

#[test]
fn shuffle_seed_divergence() {
    let mut a: Vec<i32> = (0..100).collect();
    let mut b = a.clone();
    let mut c = a.clone();

    shuffle::shuffle(&mut a, "greedisgood");
    shuffle::shuffle(&mut b, "whosyourdaddy");
    // Same bytes, different order, must seed differently.
    shuffle::shuffle(&mut c, "goodisgreed");

    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shuffle_retains_original_set() {
    let mut v: Vec<i32> = (0..1000).collect();
    shuffle::shuffle(&mut v, "fixture");

    let mut restored = v.clone();
    restored.sort_unstable();
    assert_eq!(restored, (0..1000).collect::<Vec<i32>>());
}

#[test]
fn shuffle_scrambles() {
    let mut v: Vec<i32> = (0..1000).collect();
    shuffle::shuffle(&mut v, "fixture");

    assert!(!verify::is_ascending(&v));
}

#[test]
fn shuffle_boundary_sizes() {
    let mut empty: Vec<i32> = Vec::new();
    shuffle::shuffle(&mut empty, "s");
    assert_eq!(empty, Vec::<i32>::new());

    let mut single = vec![42];
    shuffle::shuffle(&mut single, "s");
    assert_eq!(single, vec![42]);

    // An empty seed is valid and deterministic.
    let mut a = vec![1, 2, 3, 4, 5];
    let mut b = a.clone();
    shuffle::shuffle(&mut a, "");
    shuffle::shuffle(&mut b, "");
    assert_eq!(a, b);
}

// --- VERIFY ---

#[test]
fn is_ascending_basic() {
    assert!(verify::is_ascending::<i32>(&[]));
    assert!(verify::is_ascending(&[7]));
    assert!(verify::is_ascending(&[1, 2, 3]));
    assert!(verify::is_ascending(&[1, 1, 2]));
    assert!(!verify::is_ascending(&[2, 1, 3]));
    assert!(!verify::is_ascending(&[1, 3, 2]));
}

// --- CROSS-VARIANT ---

#[test]
fn insertion_variants_identical_output() {
    for size in [0, 1, 2, 10, 100, 1000] {
        let input = patterns::shuffled(size);

        let mut swap_sorted = input.clone();
        let mut shift_sorted = input.clone();
        let mut binary_sorted = input;

        insertion_sort_swap::SortImpl::sort(&mut swap_sorted);
        insertion_sort_shift::SortImpl::sort(&mut shift_sorted);
        insertion_sort_binary::SortImpl::sort(&mut binary_sorted);

        assert_eq!(swap_sorted, shift_sorted);
        assert_eq!(swap_sorted, binary_sorted);
    }
}

#[test]
fn shuffle_then_sort_then_search() {
    // End to end: consecutive values, scrambled, sorted, then searched.
    let mut v: Vec<i32> = (0..64).collect();
    shuffle::shuffle(&mut v, "greedisgood");
    assert!(!verify::is_ascending(&v));

    quicksort_hoare::SortImpl::sort(&mut v);
    assert!(verify::is_ascending(&v));

    assert_eq!(search::binary_search(&v, &0, 0, 63), Ok(Some(0)));
    assert_eq!(search::binary_search(&v, &64, 0, 63), Ok(None));
    assert_eq!(search::insertion_point(&v, &-1), 0);
}
