/// Sort a slice in ascending order by shifting each element to the left until its left neighbour
/// is no longer greater than it. Stable. Runs in O(n²) time in the worst case and O(n) on sorted
/// input, with O(1) space.
///
/// # Parameters
/// - `data` slice to sort in place
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut current = i;

        // bound check first, `current - 1` must not underflow
        while current > 0 && data[current - 1] > data[current] {
            data.swap(current - 1, current);
            current -= 1;
        }
    }
}
