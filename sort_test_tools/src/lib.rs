/// Interface every sort implementation under test satisfies.
///
/// `sort` orders ascending; `sort_by` applies a caller-supplied comparator.
/// The generic tests in [`tests`] and the benchmarks are written against
/// this trait and instantiated per implementation.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
