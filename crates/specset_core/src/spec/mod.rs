//! Specification abstractions: predicates, composition, ordering.
//!
//! # Responsibility
//! - Define the predicate contract entities are selected against.
//! - Provide AND composition with value-based equality for caching.
//! - Keep store-specific query translation behind a narrow capability trait.
//!
//! # Invariants
//! - Specification evaluation is pure: no entity or shared-state mutation.
//! - Composite equality is structural over the member multiset, not the
//!   member sequence.

pub mod and_spec;
pub mod order;
pub mod query;
pub mod specification;
