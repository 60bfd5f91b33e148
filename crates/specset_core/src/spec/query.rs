//! Store-specific query externalization capability.
//!
//! # Responsibility
//! - Let a specification or comparator push the constraint it represents
//!   into a storage-specific query builder, so persistent-store adapters
//!   can translate the same objects into native queries.
//!
//! # Invariants
//! - Kept segregated from `Specification`: the in-memory repository never
//!   requires this trait, only storage adapters bound on it.

/// Externalizable constraint: populates query state of builder type `Q`.
///
/// An adapter typically bounds on `S: Specification<T> + QueryFragment<Q>`,
/// translating the specification for the store while `is_satisfied_by`
/// stays available for local checks, such as whether a freshly built,
/// not-yet-persisted entity would match before committing it.
pub trait QueryFragment<Q> {
    /// Pushes this object's constraint (or ordering) into `query`.
    fn populate_query(&self, query: &mut Q);
}
