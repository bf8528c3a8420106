//! Column Partitioning
//!
//! Projects the flat task list onto the board columns.
//! Columns are never stored; they are rebuilt from the task list on every change.

use serde::Serialize;

use crate::model::{ColumnDef, Task, TaskId, TaskStatus};

/// A board column with its tasks in ascending `order`
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: TaskStatus,
    pub label: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn id(&self) -> &str {
        self.status.as_str()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Group tasks into columns, in definition order
///
/// Tasks whose status matches no definition are left out of every column.
pub fn partition(tasks: &[Task], defs: &[ColumnDef]) -> Vec<Column> {
    defs.iter()
        .map(|def| Column {
            status: def.status.clone(),
            label: def.label.clone(),
            tasks: sorted(tasks.iter().filter(|t| t.status == def.status)),
        })
        .collect()
}

/// Ordered tasks of one column, optionally leaving one task out
pub fn column_tasks(tasks: &[Task], status: &TaskStatus, exclude: Option<&TaskId>) -> Vec<Task> {
    sorted(
        tasks
            .iter()
            .filter(|t| &t.status == status)
            .filter(|t| exclude.map_or(true, |id| &t.id != id)),
    )
}

// `sort_by` is stable, so equal keys keep their input order
fn sorted<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<Task> {
    let mut out: Vec<Task> = tasks.cloned().collect();
    out.sort_by(|a, b| a.order.total_cmp(&b.order));
    out
}

/// Per-status task counts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub done: usize,
    /// Fraction of tasks that are done, 0.0 to 1.0
    pub percent: f64,
}

impl BoardStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = BoardStats { total: tasks.len(), ..Default::default() };
        for task in tasks {
            match task.status {
                TaskStatus::NotStarted => stats.not_started += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.done += 1,
                TaskStatus::Other(_) => {}
            }
        }
        if stats.total > 0 {
            stats.percent = stats.done as f64 / stats.total as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use proptest::prelude::*;

    fn make_task(id: &str, status: TaskStatus, order: f64) -> Task {
        Task::new(id, format!("Task {}", id), status, order)
    }

    fn ids(column: &Column) -> Vec<&str> {
        column.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_partition_groups_and_sorts() {
        let tasks = vec![
            make_task("a", TaskStatus::Done, 20.0),
            make_task("b", TaskStatus::NotStarted, 5.0),
            make_task("c", TaskStatus::Done, -3.0),
            make_task("d", TaskStatus::InProgress, 0.0),
            make_task("e", TaskStatus::NotStarted, 1.0),
        ];
        let columns = partition(&tasks, &BoardConfig::default().columns);

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].id(), "not_started");
        assert_eq!(ids(&columns[0]), vec!["e", "b"]);
        assert_eq!(ids(&columns[1]), vec!["d"]);
        assert_eq!(ids(&columns[2]), vec!["c", "a"]);
    }

    #[test]
    fn test_unknown_status_is_dropped() {
        let tasks = vec![
            make_task("a", TaskStatus::Other("".to_string()), 0.0),
            make_task("b", TaskStatus::Other("archived".to_string()), 0.0),
            make_task("c", TaskStatus::Done, 0.0),
        ];
        let columns = partition(&tasks, &BoardConfig::default().columns);
        let shown: usize = columns.iter().map(Column::len).sum();
        assert_eq!(shown, 1);
        assert_eq!(ids(&columns[2]), vec!["c"]);
    }

    #[test]
    fn test_column_missing_from_defs_is_dropped() {
        let defs = vec![ColumnDef::new(TaskStatus::Done, "Done")];
        let tasks = vec![
            make_task("a", TaskStatus::NotStarted, 0.0),
            make_task("b", TaskStatus::Done, 0.0),
        ];
        let columns = partition(&tasks, &defs);
        assert_eq!(columns.len(), 1);
        assert_eq!(ids(&columns[0]), vec!["b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tasks = vec![
            make_task("x", TaskStatus::Done, 1.0),
            make_task("y", TaskStatus::Done, 1.0),
            make_task("z", TaskStatus::Done, 0.5),
        ];
        let columns = partition(&tasks, &BoardConfig::default().columns);
        assert_eq!(ids(&columns[2]), vec!["z", "x", "y"]);
    }

    #[test]
    fn test_column_tasks_excludes_moved() {
        let tasks = vec![
            make_task("a", TaskStatus::Done, 2.0),
            make_task("b", TaskStatus::Done, 1.0),
            make_task("c", TaskStatus::NotStarted, 0.0),
        ];
        let moved = TaskId::from("a");
        let column = column_tasks(&tasks, &TaskStatus::Done, Some(&moved));
        assert_eq!(column.len(), 1);
        assert_eq!(column[0].id.as_str(), "b");
        assert_eq!(column_tasks(&tasks, &TaskStatus::Done, None).len(), 2);
    }

    #[test]
    fn test_stats() {
        let tasks = vec![
            make_task("a", TaskStatus::Done, 0.0),
            make_task("b", TaskStatus::NotStarted, 0.0),
            make_task("c", TaskStatus::Done, 0.0),
            make_task("d", TaskStatus::InProgress, 0.0),
        ];
        let stats = BoardStats::from_tasks(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!((stats.not_started, stats.in_progress, stats.done), (1, 1, 2));
        assert_eq!(stats.percent, 0.5);
        assert_eq!(BoardStats::from_tasks(&[]).percent, 0.0);
    }

    fn arb_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::NotStarted),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Done),
            "[a-z]{0,4}".prop_map(|s| TaskStatus::Other(format!("x{}", s))),
        ]
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec((arb_status(), -5i32..5), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (status, order))| make_task(&i.to_string(), status, order as f64))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_every_task_in_at_most_one_matching_column(tasks in arb_tasks()) {
            let columns = partition(&tasks, &BoardConfig::default().columns);
            for task in &tasks {
                let hits: Vec<&Column> = columns
                    .iter()
                    .filter(|c| c.tasks.iter().any(|t| t.id == task.id))
                    .collect();
                if task.status.is_known() {
                    prop_assert_eq!(hits.len(), 1);
                    prop_assert_eq!(&hits[0].status, &task.status);
                } else {
                    prop_assert!(hits.is_empty());
                }
            }
        }

        #[test]
        fn prop_columns_sorted_and_stable(tasks in arb_tasks()) {
            let position = |id: &TaskId| tasks.iter().position(|t| &t.id == id).unwrap();
            for column in partition(&tasks, &BoardConfig::default().columns) {
                for pair in column.tasks.windows(2) {
                    prop_assert!(pair[0].order <= pair[1].order);
                    if pair[0].order == pair[1].order {
                        prop_assert!(position(&pair[0].id) < position(&pair[1].id));
                    }
                }
            }
        }
    }
}
