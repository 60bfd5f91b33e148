//! Result-set ordering contract.

use std::cmp::Ordering;

/// Ordering function over entities, applied to a result set after
/// filtering. Carries no persistent state and has no relation to entity
/// identity.
///
/// Callers needing deterministic tie-breaking must encode it in the
/// comparator itself; the repository only guarantees a stable sort.
pub trait OrderComparator<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> OrderComparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
