use specset_core::{boxed, AndSpecification, MatchAllSpecification, Specification};
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Sub-specification that records how often it was evaluated. Equality and
/// hashing deliberately ignore the call counter.
#[derive(Debug, Clone)]
struct Probe {
    id: u32,
    verdict: bool,
    calls: Rc<Cell<u32>>,
}

impl Probe {
    fn new(id: u32, verdict: bool) -> Self {
        Self {
            id,
            verdict,
            calls: Rc::new(Cell::new(0)),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Specification<i32> for Probe {
    fn is_satisfied_by(&self, _entity: &i32) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.verdict
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.verdict == other.verdict
    }
}

impl Eq for Probe {}

impl Hash for Probe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.verdict.hash(state);
    }
}

fn hash_of<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn and_is_satisfied_when_every_member_is() {
    let spec = AndSpecification::new([
        boxed(Probe::new(1, true)),
        boxed(Probe::new(2, true)),
    ]);

    assert!(spec.is_satisfied_by(&0));
}

#[test]
fn and_short_circuits_at_first_unsatisfied_member() {
    let first = Probe::new(1, true);
    let second = Probe::new(2, false);
    let third = Probe::new(3, true);

    let spec = AndSpecification::new([
        boxed(first.clone()),
        boxed(second.clone()),
        boxed(third.clone()),
    ]);

    assert!(!spec.is_satisfied_by(&0));
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
    assert_eq!(third.calls(), 0);
}

#[test]
fn and_evaluates_members_in_construction_order() {
    let first = Probe::new(1, false);
    let second = Probe::new(2, false);

    let spec = AndSpecification::new([boxed(first.clone()), boxed(second.clone())]);

    assert!(!spec.is_satisfied_by(&0));
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 0);
}

#[test]
fn empty_and_matches_everything() {
    let spec: AndSpecification<i32> = AndSpecification::new([]);
    assert!(spec.is_empty());
    assert!(spec.is_satisfied_by(&42));
}

#[test]
fn equality_ignores_member_order() {
    let a = Probe::new(1, true);
    let b = Probe::new(2, true);
    let c = Probe::new(3, false);

    let forward = AndSpecification::new([boxed(a.clone()), boxed(b.clone()), boxed(c.clone())]);
    let reversed = AndSpecification::new([boxed(c), boxed(b), boxed(a)]);

    assert_eq!(forward, reversed);
    assert_eq!(hash_of(&forward), hash_of(&reversed));
}

#[test]
fn equality_counts_duplicate_members() {
    let a = Probe::new(1, true);
    let b = Probe::new(2, true);

    let doubled_a = AndSpecification::new([boxed(a.clone()), boxed(a.clone()), boxed(b.clone())]);
    let permuted = AndSpecification::new([boxed(b.clone()), boxed(a.clone()), boxed(a.clone())]);
    let single_a = AndSpecification::new([boxed(a.clone()), boxed(b)]);

    assert_eq!(doubled_a, permuted);
    assert_eq!(hash_of(&doubled_a), hash_of(&permuted));
    assert_ne!(doubled_a, single_a);
}

#[test]
fn composites_of_different_cardinality_are_never_equal() {
    let a = Probe::new(1, true);
    let b = Probe::new(2, true);

    let two = AndSpecification::new([boxed(a.clone()), boxed(b.clone())]);
    let three = AndSpecification::new([boxed(a.clone()), boxed(b), boxed(a)]);

    assert_ne!(two, three);
}

#[test]
fn members_of_different_concrete_types_compare_unequal() {
    let probe = AndSpecification::new([boxed(Probe::new(1, true))]);
    let match_all =
        AndSpecification::new([boxed(MatchAllSpecification::<i32>::new())]);

    assert_ne!(probe, match_all);
}

#[test]
fn nested_composites_compare_by_value() {
    let inner_one = AndSpecification::new([boxed(Probe::new(1, true)), boxed(Probe::new(2, true))]);
    let inner_two = AndSpecification::new([boxed(Probe::new(2, true)), boxed(Probe::new(1, true))]);

    let outer_one = AndSpecification::new([boxed(inner_one)]);
    let outer_two = AndSpecification::new([boxed(inner_two)]);

    assert_eq!(outer_one, outer_two);
    assert_eq!(hash_of(&outer_one), hash_of(&outer_two));
}

#[test]
fn match_all_is_always_satisfied() {
    let spec: MatchAllSpecification<i32> = MatchAllSpecification::new();
    assert!(spec.is_satisfied_by(&i32::MIN));
    assert!(spec.is_satisfied_by(&0));
    assert!(spec.is_satisfied_by(&i32::MAX));
}

#[test]
fn match_all_instances_are_interchangeable() {
    let one: MatchAllSpecification<i32> = MatchAllSpecification::new();
    let other: MatchAllSpecification<i32> = MatchAllSpecification::default();

    assert_eq!(one, other);
    assert_eq!(hash_of(&one), hash_of(&other));
}
