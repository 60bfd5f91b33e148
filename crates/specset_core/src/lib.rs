//! Storage-agnostic repository core built around composable specifications.
//! This crate is the single source of truth for the selection contracts.

pub mod logging;
pub mod repo;
pub mod spec;

pub use logging::{default_log_level, init_logging, logging_status};
pub use repo::memory_repo::{InMemoryRepository, RepoError, RepoResult, Repository};
pub use spec::and_spec::AndSpecification;
pub use spec::order::OrderComparator;
pub use spec::query::QueryFragment;
pub use spec::specification::{
    boxed, BoxedSpecification, DynSpecification, MatchAllSpecification, Specification,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
