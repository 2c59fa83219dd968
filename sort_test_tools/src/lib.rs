pub trait Sort {
    fn name() -> String;

    fn sorted<T>(input: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sorted_by<T, F>(input: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
