//! Classic in-place sorting and searching algorithms on slices, plus a seeded
//! Fisher-Yates shuffle for building scrambled test input. Each sorting
//! strategy lives in its own module under [`stable`] or [`unstable`] and is
//! selected explicitly by the caller.

/// A sorting strategy. Sorts ascending, in place, over the full slice.
///
/// The `Clone` bound pays for merge sort's scratch copy, the shift-based
/// insertion sort's held value and the Hoare scheme's pivot snapshot, keeping
/// every implementation free of `unsafe`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(v);
            }
        }
    };
}

pub mod patterns;
pub mod search;
pub mod shuffle;
pub mod stable;
pub mod unstable;
pub mod verify;
