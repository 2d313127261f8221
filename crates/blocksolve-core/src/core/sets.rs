//! Set operations on unordered hash sets.
//!
//! Every operation iterates the smaller operand and probes the larger one, so the cost is
//! bounded by `O(min(|a|, |b|))` rather than the `O(|a| + |b|)` of a sorted merge.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

#[inline]
fn smaller_first<'s, T, S>(
    a: &'s HashSet<T, S>,
    b: &'s HashSet<T, S>,
) -> (&'s HashSet<T, S>, &'s HashSet<T, S>) {
    if a.len() <= b.len() { (a, b) } else { (b, a) }
}

/// Returns `{x : x ∈ a ∧ x ∈ b}`.
pub fn intersect<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Copy,
    S: BuildHasher + Default,
{
    let (small, large) = smaller_first(a, b);
    let mut result = HashSet::with_capacity_and_hasher(small.len(), S::default());
    result.extend(small.iter().filter(|x| large.contains(*x)).copied());
    result
}

/// `true` when every element of `a` is in `b`. Rejects on size before scanning.
pub fn is_subset<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    a.len() <= b.len() && a.iter().all(|x| b.contains(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u32]) -> HashSet<u32> {
        ids.iter().copied().collect()
    }

    #[test]
    fn intersect_keeps_exactly_shared_elements() {
        let a = set(&[1, 2, 3, 4, 5]);
        let b = set(&[4, 5, 6]);
        assert_eq!(intersect(&a, &b), set(&[4, 5]));
    }

    #[test]
    fn intersect_is_commutative() {
        let a = set(&[10, 20, 30, 40]);
        let b = set(&[20, 40, 60]);
        assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn intersect_with_self_is_identity() {
        let a = set(&[7, 8, 9]);
        assert_eq!(intersect(&a, &a), a);
    }

    #[test]
    fn intersect_with_empty_is_empty() {
        let a = set(&[1, 2, 3]);
        let empty = HashSet::new();
        assert!(intersect(&a, &empty).is_empty());
        assert!(intersect(&empty, &a).is_empty());
    }

    #[test]
    fn intersect_matches_filter_definition_on_mixed_sizes() {
        let a: HashSet<u32> = (0..200).filter(|x| x % 3 == 0).collect();
        let b: HashSet<u32> = (0..50).filter(|x| x % 2 == 0).collect();
        let expected: HashSet<u32> = a.iter().copied().filter(|x| b.contains(x)).collect();
        assert_eq!(intersect(&a, &b), expected);
    }

    #[test]
    fn disjoint_sets_have_no_overlap() {
        assert!(intersect(&set(&[1, 2]), &set(&[3, 4])).is_empty());
    }

    #[test]
    fn subset_checks() {
        assert!(is_subset(&set(&[1, 2]), &set(&[1, 2, 3])));
        assert!(is_subset(&set(&[1, 2]), &set(&[2, 1])));
        assert!(is_subset(&HashSet::new(), &set(&[1])));
        assert!(!is_subset(&set(&[1, 4]), &set(&[1, 2, 3])));
        assert!(!is_subset(&set(&[1, 2, 3]), &set(&[1, 2])));
    }
}
