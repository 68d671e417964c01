/// Sort a slice in ascending order by repeatedly selecting the minimum of the unsorted suffix and
/// swapping it to the front of that suffix. Runs in O(n²) time and O(1) space. Not stable: the swap
/// may move an element past others that compare equal to it.
///
/// # Parameters
/// - `data` slice to sort in place
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut min_index = i;
        for j in (i + 1)..data.len() {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }

        // unconditional, a self-swap is harmless
        data.swap(i, min_index);
    }
}
