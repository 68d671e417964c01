//! Four classical in-memory sorting algorithms: selection sort, insertion sort, merge sort and
//! quick sort. Every algorithm sorts a mutable slice in ascending order.

use std::fmt;

use log::debug;

pub use insertion_sort::insertion_sort;
pub use merge_sort::merge_sort;
pub use quick_sort::quick_sort;
pub use selection_sort::selection_sort;

pub mod demo;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod render;
pub mod selection_sort;

#[cfg(test)]
mod util;

/// The sorting algorithms of this crate, in the order they are demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
        }
    }

    /// Whether the algorithm keeps elements that compare equal in their original order.
    pub fn is_stable(&self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge)
    }

    /// Sort a slice in place with this algorithm.
    pub fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        debug!("{} on {} elements", self.label(), data.len());

        match self {
            Algorithm::Selection => selection_sort(data),
            Algorithm::Insertion => insertion_sort(data),
            Algorithm::Merge => merge_sort(data),
            Algorithm::Quick => quick_sort(data),
        }
    }

    /// Sort a private copy of `data` and return it. The input is never modified, so several
    /// algorithms can be run on the same sequence.
    ///
    /// # Parameters
    /// - `data` sequence to copy and sort
    ///
    /// # Returns
    /// A new vector holding the elements of `data` in ascending order
    pub fn sorted_copy<T: Ord + Clone>(&self, data: &[T]) -> Vec<T> {
        let mut copy = data.to_vec();
        self.sort(&mut copy);
        copy
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
