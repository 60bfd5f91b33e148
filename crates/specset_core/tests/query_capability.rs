use specset_core::{OrderComparator, QueryFragment, Specification};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Ticket {
    priority: u8,
}

/// Stand-in for a store-specific query builder.
#[derive(Debug, Default, PartialEq, Eq)]
struct QueryPlan {
    clauses: Vec<String>,
    order: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MinPriority(u8);

impl Specification<Ticket> for MinPriority {
    fn is_satisfied_by(&self, entity: &Ticket) -> bool {
        entity.priority >= self.0
    }
}

impl QueryFragment<QueryPlan> for MinPriority {
    fn populate_query(&self, query: &mut QueryPlan) {
        query.clauses.push(format!("priority >= {}", self.0));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ByPriorityDesc;

impl OrderComparator<Ticket> for ByPriorityDesc {
    fn compare(&self, left: &Ticket, right: &Ticket) -> Ordering {
        right.priority.cmp(&left.priority)
    }
}

impl QueryFragment<QueryPlan> for ByPriorityDesc {
    fn populate_query(&self, query: &mut QueryPlan) {
        query.order = Some("priority DESC".to_string());
    }
}

/// What a storage adapter does: translate the same objects it would use for
/// in-memory evaluation into native query state.
fn plan_query<S, C>(specification: &S, comparator: &C) -> QueryPlan
where
    S: QueryFragment<QueryPlan>,
    C: QueryFragment<QueryPlan>,
{
    let mut plan = QueryPlan::default();
    specification.populate_query(&mut plan);
    comparator.populate_query(&mut plan);
    plan
}

#[test]
fn specification_externalizes_its_constraint() {
    let spec = MinPriority(7);
    let plan = plan_query(&spec, &ByPriorityDesc);

    assert_eq!(plan.clauses, vec!["priority >= 7".to_string()]);
    assert_eq!(plan.order.as_deref(), Some("priority DESC"));
}

#[test]
fn local_evaluation_stays_usable_alongside_externalization() {
    let spec = MinPriority(5);

    // Pre-commit check on a not-yet-persisted entity.
    let draft = Ticket { priority: 6 };
    assert!(spec.is_satisfied_by(&draft));
    assert!(!spec.is_satisfied_by(&Ticket { priority: 4 }));

    // The very same object still drives the adapter-side translation.
    let mut plan = QueryPlan::default();
    spec.populate_query(&mut plan);
    assert_eq!(plan.clauses, vec!["priority >= 5".to_string()]);
}

#[test]
fn populating_twice_accumulates_clauses() {
    let mut plan = QueryPlan::default();
    MinPriority(1).populate_query(&mut plan);
    MinPriority(3).populate_query(&mut plan);

    assert_eq!(
        plan.clauses,
        vec!["priority >= 1".to_string(), "priority >= 3".to_string()]
    );
}
