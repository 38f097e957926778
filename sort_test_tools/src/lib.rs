/// A sort that leaves its input untouched and returns a sorted copy.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(input: &[T]) -> Vec<T>
    where
        T: PartialOrd + Clone;
}

pub mod patterns;
