use std::cmp::Ordering;

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

/// Generates a vector of random integers. The value range is kept narrow so duplicates are common.
pub(crate) fn generate_random_data(amount: usize) -> Vec<i32> {
    let mut rng = thread_rng();
    let uniform = Uniform::from(-50..50);

    let mut data = Vec::with_capacity(amount);
    for _ in 0..amount {
        data.push(rng.sample(&uniform));
    }

    data
}

pub(crate) fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `b` contains exactly the elements of `a`, with the same multiplicities.
pub(crate) fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// An integer key carrying a tag that takes no part in comparisons. Used to observe whether a sort
/// keeps equal keys in their original order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tagged {
    pub key: i32,
    pub tag: char,
}

impl Tagged {
    pub(crate) fn new(key: i32, tag: char) -> Self {
        Tagged { key, tag }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
