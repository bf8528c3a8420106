//! Fractional Ordering
//!
//! Computes the `order` key for a task dropped at a position in a column
//! without touching its siblings. Head and tail inserts step by a fixed gap,
//! middle inserts bisect the two neighbours.
//!
//! Repeated bisection at the same spot halves the gap each time and would
//! eventually run out of `f64` precision. When neighbours get closer than
//! `min_gap` (or bisecting no longer lands strictly between them), the whole
//! column is renumbered to `0, gap, 2*gap, ...` first and the key is computed
//! on the renumbered layout. The caller must persist the sibling changes.

use crate::config::BoardConfig;
use crate::model::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderPolicy {
    pub gap: f64,
    pub min_gap: f64,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self::from(&BoardConfig::default())
    }
}

impl From<&BoardConfig> for OrderPolicy {
    fn from(config: &BoardConfig) -> Self {
        Self { gap: config.order_gap, min_gap: config.min_gap }
    }
}

/// New order value for a sibling after a renumbering pass
#[derive(Debug, Clone, PartialEq)]
pub struct OrderChange {
    pub task_id: TaskId,
    pub order: f64,
}

/// Result of allocating an order key
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Key fits between the existing neighbours
    Key(f64),
    /// The column had to be renumbered; `changes` lists the siblings whose
    /// order differs from before
    Renumbered { order: f64, changes: Vec<OrderChange> },
}

impl Placement {
    pub fn order(&self) -> f64 {
        match self {
            Placement::Key(order) => *order,
            Placement::Renumbered { order, .. } => *order,
        }
    }
}

/// Allocate an order key for inserting at `index` into `column`
///
/// `column` must be sorted ascending and must not contain the moved task.
/// An `index` past the end means "append".
pub fn allocate(column: &[Task], index: usize, policy: &OrderPolicy) -> Placement {
    let orders: Vec<f64> = column.iter().map(|t| t.order).collect();
    let key = key_at(&orders, index, policy.gap);
    if fits(&orders, index, key, policy.min_gap) {
        return Placement::Key(key);
    }

    log::debug!(
        "[ORDER] renumbering column of {} tasks before inserting at {}",
        column.len(),
        index
    );
    let renumbered: Vec<f64> = (0..column.len()).map(|i| i as f64 * policy.gap).collect();
    let changes = column
        .iter()
        .zip(&renumbered)
        .filter(|(task, order)| task.order != **order)
        .map(|(task, order)| OrderChange { task_id: task.id.clone(), order: *order })
        .collect();

    Placement::Renumbered { order: key_at(&renumbered, index, policy.gap), changes }
}

fn key_at(orders: &[f64], index: usize, gap: f64) -> f64 {
    match orders {
        [] => 0.0,
        [first, ..] if index == 0 => first - gap,
        [.., last] if index >= orders.len() => last + gap,
        _ => (orders[index - 1] + orders[index]) / 2.0,
    }
}

fn neighbours(orders: &[f64], index: usize) -> (Option<f64>, Option<f64>) {
    let index = index.min(orders.len());
    let prev = index.checked_sub(1).map(|i| orders[i]);
    let next = orders.get(index).copied();
    (prev, next)
}

fn fits(orders: &[f64], index: usize, key: f64, min_gap: f64) -> bool {
    let (prev, next) = neighbours(orders, index);
    if !key.is_finite() {
        return false;
    }
    if prev.is_some_and(|p| key <= p) || next.is_some_and(|n| key >= n) {
        return false;
    }
    match (prev, next) {
        (Some(p), Some(n)) => n - p >= min_gap,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use proptest::prelude::*;

    fn column(orders: &[f64]) -> Vec<Task> {
        orders
            .iter()
            .enumerate()
            .map(|(i, order)| Task::new(format!("t{}", i), "", TaskStatus::InProgress, *order))
            .collect()
    }

    #[test]
    fn test_middle_insert_bisects() {
        let placement = allocate(&column(&[10.0, 20.0, 30.0]), 1, &OrderPolicy::default());
        assert_eq!(placement, Placement::Key(15.0));
    }

    #[test]
    fn test_empty_column_is_zero() {
        for index in [0, 1, 7] {
            assert_eq!(allocate(&[], index, &OrderPolicy::default()), Placement::Key(0.0));
        }
    }

    #[test]
    fn test_head_insert() {
        let placement = allocate(&column(&[0.0, 1000.0]), 0, &OrderPolicy::default());
        assert_eq!(placement, Placement::Key(-1000.0));
    }

    #[test]
    fn test_index_past_end_appends() {
        let placement = allocate(&column(&[0.0, 1000.0]), 5, &OrderPolicy::default());
        assert_eq!(placement, Placement::Key(2000.0));
        let placement = allocate(&column(&[0.0, 1000.0]), 2, &OrderPolicy::default());
        assert_eq!(placement, Placement::Key(2000.0));
    }

    #[test]
    fn test_custom_gap() {
        let policy = OrderPolicy { gap: 1.0, min_gap: 1e-9 };
        assert_eq!(allocate(&column(&[4.0]), 0, &policy), Placement::Key(3.0));
        assert_eq!(allocate(&column(&[4.0]), 1, &policy), Placement::Key(5.0));
    }

    #[test]
    fn test_exhausted_gap_renumbers() {
        let tasks = column(&[1.0, 1.0 + 1e-12, 7.0]);
        let placement = allocate(&tasks, 1, &OrderPolicy::default());
        match placement {
            Placement::Renumbered { order, changes } => {
                assert_eq!(order, 500.0);
                assert_eq!(
                    changes,
                    vec![
                        OrderChange { task_id: TaskId::from("t0"), order: 0.0 },
                        OrderChange { task_id: TaskId::from("t1"), order: 1000.0 },
                        OrderChange { task_id: TaskId::from("t2"), order: 2000.0 },
                    ]
                );
            }
            other => panic!("expected renumbering, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_neighbours_renumber() {
        let tasks = column(&[0.0, 5.0, 5.0]);
        let placement = allocate(&tasks, 2, &OrderPolicy::default());
        let Placement::Renumbered { order, changes } = placement else {
            panic!("expected renumbering");
        };
        assert_eq!(order, 1500.0);
        // t0 already sits at 0
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].task_id.as_str(), "t1");
    }

    #[test]
    fn test_repeated_bisection_stays_ordered() {
        let policy = OrderPolicy::default();
        let mut tasks = column(&[0.0, 1000.0]);
        for round in 0..200 {
            let placement = allocate(&tasks, 1, &policy);
            if let Placement::Renumbered { changes, .. } = &placement {
                for change in changes {
                    if let Some(t) = tasks.iter_mut().find(|t| t.id == change.task_id) {
                        t.order = change.order;
                    }
                }
            }
            let new = Task::new(format!("n{}", round), "", TaskStatus::InProgress, placement.order());
            tasks.insert(1, new);
            assert!(tasks.windows(2).all(|w| w[0].order < w[1].order), "round {}", round);
        }
    }

    proptest! {
        #[test]
        fn prop_key_lands_in_slot(
            mut orders in prop::collection::vec(-1e6f64..1e6, 1..20),
            index in 0usize..25,
        ) {
            orders.sort_by(f64::total_cmp);
            let tasks = column(&orders);
            let placement = allocate(&tasks, index, &OrderPolicy::default());

            let mut after = orders.clone();
            if let Placement::Renumbered { changes, .. } = &placement {
                for change in changes {
                    let i = tasks.iter().position(|t| t.id == change.task_id).unwrap();
                    after[i] = change.order;
                }
            }
            let key = placement.order();
            let slot = index.min(after.len());
            if slot == 0 {
                prop_assert!(key < after[0]);
            } else if slot == after.len() {
                prop_assert!(key > after[after.len() - 1]);
            } else {
                prop_assert!(after[slot - 1] < key && key < after[slot]);
            }
        }
    }
}
