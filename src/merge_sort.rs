use log::trace;
use num::integer::Average;

/// Stable merge sort. Runs in O(n log n) time regardless of the input, and allocates O(n)
/// temporary buffer space over the course of the merges.
///
/// # Parameters
/// - `data` slice to sort in place
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    divide(data, 0, data.len() - 1);
}

/// Recursively sort the inclusive range `[start, end]` of `data` by splitting it in half, sorting
/// both halves and merging them. Ranges of zero or one element are left untouched.
///
/// # Parameters
/// - `data` slice containing the range
/// - `start` first index of the range
/// - `end` last index of the range, must be less than `data.len()` if `start < end`
pub fn divide<T: Ord + Clone>(data: &mut [T], start: usize, end: usize) {
    if start < end {
        let mid = start.average_floor(&end);

        divide(data, start, mid);
        divide(data, mid + 1, end);
        merge(data, start, mid, end);
    }
}

/// Merge the two adjacent sorted ranges `[start, mid]` and `[mid + 1, end]` of `data` into one
/// sorted range `[start, end]`. Both ranges are copied into temporary buffers first, which are
/// released when the merge returns. On equal elements the left range wins, which keeps the sort
/// stable.
///
/// # Parameters
/// - `data` slice containing both ranges
/// - `start` first index of the left range
/// - `mid` last index of the left range
/// - `end` last index of the right range
pub fn merge<T: Ord + Clone>(data: &mut [T], start: usize, mid: usize, end: usize) {
    trace!("merging [{}, {}] with [{}, {}]", start, mid, mid + 1, end);

    let left = data[start..=mid].to_vec();
    let right = data[mid + 1..=end].to_vec();

    let mut left_index = 0;
    let mut right_index = 0;
    let mut merged_index = start;

    while left_index < left.len() && right_index < right.len() {
        if left[left_index] <= right[right_index] {
            data[merged_index] = left[left_index].clone();
            left_index += 1;
        } else {
            data[merged_index] = right[right_index].clone();
            right_index += 1;
        }
        merged_index += 1;
    }

    // at most one of the buffers has elements left
    for n in left[left_index..].iter().chain(&right[right_index..]) {
        data[merged_index] = n.clone();
        merged_index += 1;
    }
}
