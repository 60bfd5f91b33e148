//! Repository contract and in-memory, set-backed implementation.
//!
//! # Responsibility
//! - Own a finite entity collection with set semantics.
//! - Select, order, and count entities by arbitrary specifications.
//!
//! # Invariants
//! - Entity storage is exclusive: callers only ever receive copies.
//! - `count_satisfying` and `select_satisfying` run the same filtering
//!   path and can never diverge.
//! - Selection never mutates the repository or the entities.

use crate::spec::order::OrderComparator;
use crate::spec::specification::Specification;
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic errors raised by repository operations.
///
/// All failures are synchronous and surfaced to the immediate caller;
/// nothing is retried or swallowed. Storage adapters signalling an
/// equivalent non-unique condition must translate it into
/// `NonUniqueSelection` so callers see one failure type regardless of
/// backing implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// An absent entity reference was given to `add`/`add_all`.
    NullEntity,
    /// An absent collection reference was given to a batch insert.
    InvalidArgument(String),
    /// `select_unique` matched more than one entity.
    NonUniqueSelection { matched: usize },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullEntity => write!(f, "absent entity cannot be added"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::NonUniqueSelection { matched } => write!(
                f,
                "specification matched {matched} entities where at most one was expected"
            ),
        }
    }
}

impl Error for RepoError {}

/// Storage-agnostic repository contract.
///
/// The in-memory implementation below filters an owned collection; a
/// persistent-store adapter implements the same contract by translating
/// specifications through its query builder instead.
///
/// Entities are held with set semantics, so `T` needs `Eq + Hash`;
/// defensive-copy reads need `Clone`.
pub trait Repository<T: Eq + Hash + Clone> {
    /// Inserts one entity.
    ///
    /// # Contract
    /// - An absent entity fails with `RepoError::NullEntity` and leaves the
    ///   repository untouched.
    /// - Duplicates by `Eq` collapse to one stored instance.
    fn add(&mut self, entity: Option<T>) -> RepoResult<()>;

    /// Inserts entities one at a time under the single-entity contract.
    ///
    /// # Contract
    /// - An absent collection fails with `RepoError::InvalidArgument`.
    /// - An absent element fails with `RepoError::NullEntity`; elements
    ///   inserted before it are NOT rolled back, so the repository keeps
    ///   exactly the entities that preceded the failure. Callers wanting
    ///   all-or-nothing semantics use [`Repository::add_all_atomic`].
    fn add_all(&mut self, entities: Option<Vec<Option<T>>>) -> RepoResult<()>;

    /// All-or-nothing batch insert: validates every element before any
    /// insertion, so a failure leaves the repository untouched.
    fn add_all_atomic(&mut self, entities: Option<Vec<Option<T>>>) -> RepoResult<()>;

    /// Returns a fresh, independent copy of every owned entity.
    fn select_all(&self) -> HashSet<T>;

    /// Returns every owned entity, stably sorted by `comparator`.
    ///
    /// Insertion order of the returned vector is sorted order. Ties keep
    /// an arbitrary relative order; comparators wanting determinism must
    /// break ties themselves.
    fn select_all_ordered<C>(&self, comparator: &C) -> Vec<T>
    where
        C: OrderComparator<T> + ?Sized;

    /// Returns exactly the owned entities satisfying `specification`.
    fn select_satisfying<S>(&self, specification: &S) -> HashSet<T>
    where
        S: Specification<T> + ?Sized;

    /// Filters by `specification`, then stably sorts by `comparator`.
    fn select_satisfying_ordered<S, C>(&self, specification: &S, comparator: &C) -> Vec<T>
    where
        S: Specification<T> + ?Sized,
        C: OrderComparator<T> + ?Sized;

    /// Number of owned entities satisfying `specification`; always equals
    /// `select_satisfying(specification).len()`.
    fn count_satisfying<S>(&self, specification: &S) -> usize
    where
        S: Specification<T> + ?Sized;

    /// Returns the sole entity satisfying `specification`.
    ///
    /// # Contract
    /// - Zero matches is a normal result: `Ok(None)`.
    /// - Two or more matches fail with `RepoError::NonUniqueSelection`.
    fn select_unique<S>(&self, specification: &S) -> RepoResult<Option<T>>
    where
        S: Specification<T> + ?Sized;
}

/// In-memory repository over an owned `HashSet`.
///
/// Single-threaded in effect: no internal locking. Embedding systems that
/// serve concurrent callers guard access themselves.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entities: HashSet<T>,
}

impl<T: Eq + Hash + Clone> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entities: HashSet::new(),
        }
    }

    /// Creates a repository seeded with `entities`.
    ///
    /// Items arrive by value, so they are present by construction; no
    /// absence check applies on this path.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    /// Number of owned entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // Single filtering path shared by select/count/unique so their results
    // stay consistent by construction.
    fn satisfying<'a, S>(&'a self, specification: &'a S) -> impl Iterator<Item = &'a T>
    where
        S: Specification<T> + ?Sized,
    {
        self.entities
            .iter()
            .filter(move |entity| specification.is_satisfied_by(entity))
    }
}

impl<T: Eq + Hash + Clone> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: Option<T>) -> RepoResult<()> {
        let entity = entity.ok_or(RepoError::NullEntity)?;
        self.entities.insert(entity);
        debug!(
            "event=entity_added module=repo status=ok total={}",
            self.entities.len()
        );
        Ok(())
    }

    fn add_all(&mut self, entities: Option<Vec<Option<T>>>) -> RepoResult<()> {
        let entities = entities.ok_or_else(|| {
            RepoError::InvalidArgument("entity collection must be present".to_string())
        })?;

        // Fail-fast without rollback: entities inserted before an absent
        // element stay in the repository.
        for entity in entities {
            self.add(entity)?;
        }
        Ok(())
    }

    fn add_all_atomic(&mut self, entities: Option<Vec<Option<T>>>) -> RepoResult<()> {
        let entities = entities.ok_or_else(|| {
            RepoError::InvalidArgument("entity collection must be present".to_string())
        })?;

        let mut present = Vec::with_capacity(entities.len());
        for entity in entities {
            present.push(entity.ok_or(RepoError::NullEntity)?);
        }

        let batch = present.len();
        self.entities.extend(present);
        debug!(
            "event=batch_added module=repo status=ok batch={batch} total={}",
            self.entities.len()
        );
        Ok(())
    }

    fn select_all(&self) -> HashSet<T> {
        self.entities.clone()
    }

    fn select_all_ordered<C>(&self, comparator: &C) -> Vec<T>
    where
        C: OrderComparator<T> + ?Sized,
    {
        let mut result: Vec<T> = self.entities.iter().cloned().collect();
        result.sort_by(|left, right| comparator.compare(left, right));
        result
    }

    fn select_satisfying<S>(&self, specification: &S) -> HashSet<T>
    where
        S: Specification<T> + ?Sized,
    {
        self.satisfying(specification).cloned().collect()
    }

    fn select_satisfying_ordered<S, C>(&self, specification: &S, comparator: &C) -> Vec<T>
    where
        S: Specification<T> + ?Sized,
        C: OrderComparator<T> + ?Sized,
    {
        let mut result: Vec<T> = self.satisfying(specification).cloned().collect();
        result.sort_by(|left, right| comparator.compare(left, right));
        result
    }

    fn count_satisfying<S>(&self, specification: &S) -> usize
    where
        S: Specification<T> + ?Sized,
    {
        self.satisfying(specification).count()
    }

    fn select_unique<S>(&self, specification: &S) -> RepoResult<Option<T>>
    where
        S: Specification<T> + ?Sized,
    {
        let mut matches = self.satisfying(specification);
        let first = match matches.next() {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let extra = matches.count();
        if extra > 0 {
            return Err(RepoError::NonUniqueSelection { matched: extra + 1 });
        }
        Ok(Some(first.clone()))
    }
}
