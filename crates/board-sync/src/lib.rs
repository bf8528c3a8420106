//! Board Sync
//!
//! Client-side reconciler for a kanban board:
//! - columns: projects the task list onto status columns
//! - ordering: fractional order keys for dropped tasks
//! - gesture: drag-end events to state change requests
//! - coordinator: optimistic overlays with commit / rollback
//! - sync: drives the coordinator against the task API

mod columns;
mod config;
mod coordinator;
mod error;
mod gesture;
mod model;
mod ordering;
mod remote;
mod sync;

pub use columns::{column_tasks, partition, BoardStats, Column};
pub use config::{BoardConfig, DEFAULT_MIN_GAP, DEFAULT_ORDER_GAP};
pub use coordinator::{Coordinator, MoveState, MoveTicket};
pub use error::{SyncError, SyncResult};
pub use gesture::{interpret, DragEnd, DragLocation, MovePlan, Origin, TransitionRequest};
pub use model::{ColumnDef, Priority, Task, TaskId, TaskPatch, TaskStatus};
pub use ordering::{allocate, OrderChange, OrderPolicy, Placement};
pub use remote::{Notice, NoticeLevel, Notifier, TaskApi, Timer};
pub use sync::{BoardSync, Refetch};
