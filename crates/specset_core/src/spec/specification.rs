//! Specification contract and leaf implementations.
//!
//! # Responsibility
//! - Define `Specification<T>`, the predicate every selection runs against.
//! - Bridge concrete specifications into value-comparable trait objects so
//!   composites can be stored, compared, and deduplicated.
//!
//! # Invariants
//! - `is_satisfied_by` must not mutate the entity or any shared state and
//!   must be safe to call from multiple readers.
//! - Evaluation has no failure mode: well-formed input never errors.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Predicate over a single entity.
///
/// Implementations are immutable and side-effect-free during evaluation.
/// They are constructed fresh per query and carry configuration only.
pub trait Specification<T> {
    /// Returns whether `entity` belongs in the result set.
    fn is_satisfied_by(&self, entity: &T) -> bool;
}

/// Object-safe layer adding value equality and hashing to specifications.
///
/// Composites hold polymorphic members as `BoxedSpecification<T>`; this
/// trait lets them compare and hash those members by value through the
/// trait object. A blanket impl covers every specification whose concrete
/// type already supports `PartialEq`/`Eq`/`Hash`, so implementors only ever
/// write `Specification<T>` plus the standard derives.
pub trait DynSpecification<T>: Specification<T> {
    /// Upcast used by `dyn_eq` to recover the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Value equality across trait objects; `false` when the concrete
    /// types differ.
    fn dyn_eq(&self, other: &dyn DynSpecification<T>) -> bool;

    /// Value hash of the concrete specification, stable for equal values.
    fn dyn_hash(&self) -> u64;
}

impl<T, S> DynSpecification<T> for S
where
    S: Specification<T> + PartialEq + Eq + Hash + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynSpecification<T>) -> bool {
        other
            .as_any()
            .downcast_ref::<S>()
            .is_some_and(|candidate| self == candidate)
    }

    fn dyn_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Boxed, value-comparable specification used as composite member type.
pub type BoxedSpecification<T> = Box<dyn DynSpecification<T>>;

/// Boxes a concrete specification for use in a composite.
pub fn boxed<T, S>(specification: S) -> BoxedSpecification<T>
where
    S: DynSpecification<T> + 'static,
{
    Box::new(specification)
}

/// Neutral specification: satisfied by every entity.
///
/// Usable as a default wherever no filtering is desired. All instances are
/// interchangeable: they compare equal and hash identically.
pub struct MatchAllSpecification<T> {
    _entity: PhantomData<fn(&T) -> bool>,
}

impl<T> MatchAllSpecification<T> {
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<T> Default for MatchAllSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MatchAllSpecification<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for MatchAllSpecification<T> {}

impl<T> Debug for MatchAllSpecification<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("MatchAllSpecification")
    }
}

impl<T> Specification<T> for MatchAllSpecification<T> {
    fn is_satisfied_by(&self, _entity: &T) -> bool {
        true
    }
}

impl<T> PartialEq for MatchAllSpecification<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for MatchAllSpecification<T> {}

impl<T> Hash for MatchAllSpecification<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Fixed discriminant: every instance hashes the same.
        state.write_u8(1);
    }
}
