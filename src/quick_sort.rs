use log::trace;

/// Quick sort using the last element of each range as the pivot. Average running time is
/// O(n log n), but already sorted and reverse sorted input degrade it to O(n²). Sorts in place
/// with O(log n) expected recursion depth. Not stable: partitioning swaps elements past others
/// that compare equal.
///
/// # Parameters
/// - `data` slice to sort in place
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    q_divide(data, 0, data.len() - 1);
}

/// Recursively sort the inclusive range `[start, end]` of `data` by partitioning it around a
/// pivot and sorting both sides of the pivot. Ranges of zero or one element are left untouched.
///
/// # Parameters
/// - `data` slice containing the range
/// - `start` first index of the range
/// - `end` last index of the range, must be less than `data.len()` if `start < end`
pub fn q_divide<T: Ord>(data: &mut [T], start: usize, end: usize) {
    if start < end {
        let pivot_index = partition(data, start, end);

        if pivot_index > start {
            q_divide(data, start, pivot_index - 1);
        }
        q_divide(data, pivot_index + 1, end);
    }
}

/// Partition the inclusive range `[start, end]` of `data` around the pivot `data[end]`. Every
/// element less than or equal to the pivot is moved left of the wall, then the pivot is swapped
/// onto the wall.
///
/// # Returns
/// The final index of the pivot. All elements of the range left of it are less than or equal to
/// the pivot, all elements right of it are greater.
pub fn partition<T: Ord>(data: &mut [T], start: usize, end: usize) -> usize {
    // first index right of the wall
    let mut store = start;

    for i in start..end {
        if data[i] <= data[end] {
            data.swap(i, store);
            store += 1;
        }
    }

    data.swap(store, end);
    trace!("partitioned [{}, {}] around pivot index {}", start, end, store);
    store
}
