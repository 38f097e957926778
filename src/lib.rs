//! Top-down stable merge sort, producing a sorted copy of its input.

/// Returns a sorted copy of `numbers`, preserving the order of equal elements.
///
/// This sort is stable (i.e., does not reorder equal elements), allocating (i.e., the input slice
/// is left untouched and the result is a new vector) and *O*(*n* \* log(*n*)) worst-case.
///
/// Elements are ordered by their own [`PartialOrd`] implementation. If two elements are unordered
/// with respect to each other, as is the case for `NaN`, the result is still a permutation of the
/// input, but the position of those elements, and the order of the elements around them, is
/// unspecified.
///
/// # Current implementation
///
/// The slice is split at its midpoint, both halves are sorted recursively and the two sorted
/// halves are merged. Merging compares the heads of both halves and takes from the right half
/// only if its head is strictly less, which makes the sort stable. No more than
/// *n* \* ⌈log2(*n*)⌉ comparisons are performed.
///
/// # Examples
///
/// ```
/// let v = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
///
/// let sorted = merge_sort::merge_sort(&v);
/// assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(v, [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn merge_sort<T>(numbers: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    merge_sort_vec(numbers.to_vec())
}

/// Sorts an owned vector and returns it, preserving the order of equal elements.
///
/// Same contract as [`merge_sort`], but consumes `numbers` so no element has to be cloned.
///
/// # Examples
///
/// ```
/// let v = vec![1.5, -0.5, 3.0, 1.5];
/// assert_eq!(merge_sort::merge_sort_vec(v), [-0.5, 1.5, 1.5, 3.0]);
/// ```
pub fn merge_sort_vec<T>(mut numbers: Vec<T>) -> Vec<T>
where
    T: PartialOrd,
{
    if numbers.len() < 2 {
        return numbers;
    }

    let mid = numbers.len() / 2;
    let right = numbers.split_off(mid);

    merge(merge_sort_vec(numbers), merge_sort_vec(right))
}

// --- IMPL ---

/// Merges two sorted runs into one. Ties, and pairs that are unordered, are resolved in favor of
/// `left`.
fn merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: PartialOrd,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };

        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // At most one of them still holds elements.
    merged.extend(left);
    merged.extend(right);

    merged
}
