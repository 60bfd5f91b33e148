//! Repository layer: entity ownership and specification-driven selection.
//!
//! # Responsibility
//! - Define the storage-agnostic repository contract.
//! - Provide the in-memory, set-backed implementation.
//!
//! # Invariants
//! - Read-returning operations hand out defensive copies, never views into
//!   repository state.
//! - Failures surface the semantic error taxonomy (`RepoError`) and are
//!   never suppressed or logged internally.

pub mod memory_repo;
