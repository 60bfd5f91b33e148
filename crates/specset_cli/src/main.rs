//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `specset_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use specset_core::{InMemoryRepository, Repository, Specification};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Item {
    id: Uuid,
    weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Heavy(u32);

impl Specification<Item> for Heavy {
    fn is_satisfied_by(&self, entity: &Item) -> bool {
        entity.weight >= self.0
    }
}

fn main() {
    let repo = InMemoryRepository::with_entities([
        Item {
            id: Uuid::from_u128(1),
            weight: 10,
        },
        Item {
            id: Uuid::from_u128(2),
            weight: 70,
        },
        Item {
            id: Uuid::from_u128(3),
            weight: 90,
        },
    ]);

    println!("specset_core version={}", specset_core::core_version());
    println!("specset_core entities={}", repo.len());
    println!(
        "specset_core heavy_count={}",
        repo.count_satisfying(&Heavy(50))
    );
}
