//! Drag Gesture Interpretation
//!
//! Turns a drag-end event into the state change it asks for.
//! No networking here; the result is handed to the coordinator.

use serde::{Deserialize, Serialize};

use crate::columns::column_tasks;
use crate::config::BoardConfig;
use crate::model::{Task, TaskId, TaskPatch, TaskStatus};
use crate::ordering::{allocate, OrderPolicy, Placement};

// ========================
// Drag Events
// ========================

/// A position on the board: column id plus index within that column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self { column_id: column_id.into(), index }
    }
}

/// Drag-end event as delivered by the drag source
///
/// `destination` is `None` when the card was released outside any column.
/// `destination.index` is the index in the destination column once the
/// dragged card has been taken out of its source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub draggable_id: String,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

// ========================
// Transition Requests
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The card the user dropped
    Gesture,
    /// A sibling whose key changed in a renumbering pass
    Reindex,
}

/// Intended change of one task's column and position
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub task_id: TaskId,
    pub new_status: TaskStatus,
    pub new_order: f64,
    pub origin: Origin,
}

impl TransitionRequest {
    pub fn patch(&self) -> TaskPatch {
        TaskPatch { status: Some(self.new_status.clone()), order: Some(self.new_order) }
    }

    /// Write the requested fields onto a task
    pub fn apply_to(&self, task: &mut Task) {
        task.status = self.new_status.clone();
        task.order = self.new_order;
    }
}

/// Everything one drop needs persisted
#[derive(Debug, Clone, PartialEq)]
pub struct MovePlan {
    pub primary: TransitionRequest,
    /// Sibling updates from a renumbering pass, usually empty
    pub reindex: Vec<TransitionRequest>,
}

impl MovePlan {
    /// Requests in application order, the moved task last
    pub fn into_requests(self) -> Vec<TransitionRequest> {
        let mut requests = self.reindex;
        requests.push(self.primary);
        requests
    }
}

/// Interpret a drag-end event against the current board view
///
/// Returns `None` when nothing should change: cancelled drops, drops back
/// onto the starting slot, unknown columns or unknown tasks.
pub fn interpret(event: &DragEnd, tasks: &[Task], config: &BoardConfig) -> Option<MovePlan> {
    let destination = event.destination.as_ref()?;
    if destination == &event.source {
        return None;
    }

    let Some(column) = config.column(&destination.column_id) else {
        log::warn!("[DND] drop on unknown column '{}' ignored", destination.column_id);
        return None;
    };
    let task_id = TaskId::new(event.draggable_id.as_str());
    if !tasks.iter().any(|t| t.id == task_id) {
        log::warn!("[DND] drop of unknown task '{}' ignored", task_id);
        return None;
    }

    let siblings = column_tasks(tasks, &column.status, Some(&task_id));
    let placement = allocate(&siblings, destination.index, &OrderPolicy::from(config));

    let reindex = match &placement {
        Placement::Key(_) => Vec::new(),
        Placement::Renumbered { changes, .. } => changes
            .iter()
            .map(|change| TransitionRequest {
                task_id: change.task_id.clone(),
                new_status: column.status.clone(),
                new_order: change.order,
                origin: Origin::Reindex,
            })
            .collect(),
    };

    Some(MovePlan {
        primary: TransitionRequest {
            task_id,
            new_status: column.status.clone(),
            new_order: placement.order(),
            origin: Origin::Gesture,
        },
        reindex,
    })
}
