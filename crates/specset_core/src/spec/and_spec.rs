//! Logical-AND composite specification.
//!
//! # Responsibility
//! - Combine polymorphic sub-specifications into one predicate.
//! - Give composites value semantics so they can be cached and deduplicated.
//!
//! # Invariants
//! - Evaluation walks members in the order the construction collection
//!   iterated them and stops at the first unsatisfied member.
//! - Equality is multiset equality over members: permutations of the same
//!   members compare equal, differing cardinality never does.
//! - Hashing is order-independent and consistent with equality.

use crate::spec::specification::{BoxedSpecification, DynSpecification, Specification};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

/// Composite specification satisfied only when every member is.
///
/// The empty composite is vacuously satisfied by every entity.
pub struct AndSpecification<T> {
    members: Vec<BoxedSpecification<T>>,
}

impl<T> AndSpecification<T> {
    /// Builds a composite from any collection of boxed sub-specifications.
    ///
    /// # Contract
    /// - The iteration order of `members` becomes the evaluation order.
    /// - Duplicate members are kept; they count toward multiset equality.
    pub fn new(members: impl IntoIterator<Item = BoxedSpecification<T>>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Number of sub-specifications.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    /// Short-circuits: members after the first unsatisfied one are not
    /// invoked for this entity. This is an observable contract.
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.members
            .iter()
            .all(|member| member.is_satisfied_by(entity))
    }
}

impl<T> PartialEq for AndSpecification<T> {
    fn eq(&self, other: &Self) -> bool {
        is_equal_multiset(&self.members, &other.members)
    }
}

impl<T> Eq for AndSpecification<T> {}

impl<T> Hash for AndSpecification<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative accumulation keeps the hash order-independent, so
        // equal multisets hash equal regardless of construction order.
        let combined = self
            .members
            .iter()
            .fold(0u64, |accumulated, member| {
                accumulated.wrapping_add(member.dyn_hash())
            });
        state.write_usize(self.members.len());
        state.write_u64(combined);
    }
}

impl<T> Debug for AndSpecification<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndSpecification")
            .field("members", &self.members.len())
            .finish()
    }
}

/// Multiset equality: each member of `left` consumes exactly one equal
/// member of `right`. Quadratic, acceptable for the handful of members a
/// composite realistically holds.
fn is_equal_multiset<T>(left: &[BoxedSpecification<T>], right: &[BoxedSpecification<T>]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut consumed = vec![false; right.len()];
    'members: for member in left {
        for (index, candidate) in right.iter().enumerate() {
            if !consumed[index] && member.dyn_eq(candidate.as_ref()) {
                consumed[index] = true;
                continue 'members;
            }
        }
        return false;
    }
    true
}
