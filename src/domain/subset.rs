//! Enumeration of the combinations covered by a full-cover bet.

use itertools::Itertools;
use num_integer::binomial;

/// Every subset of `items` with at least `min_len` members.
///
/// Subsets come out smallest first, each in input order. The
/// iterator borrows `items` and holds no other state, so calling again
/// restarts the enumeration.
pub fn subsets<T>(items: &[T], min_len: usize) -> impl Iterator<Item = Vec<&T>> + '_ {
    (min_len..=items.len()).flat_map(move |size| items.iter().combinations(size))
}

/// Number of subsets [`subsets`] yields for `n` items, without enumerating.
///
/// Intended for selection counts of a betting slip; large `n` overflows.
#[must_use]
pub fn subset_count(n: usize, min_len: usize) -> u128 {
    let n = n as u128;
    (min_len as u128..=n).map(|size| binomial(n, size)).sum()
}
