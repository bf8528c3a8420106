//! External Collaborators
//!
//! Abstract interfaces for the task API, the toast sink and timers.
//! The browser implementations live in the UI crate; tests use in-memory fakes.
//! Everything runs on one thread, so none of these need to be `Send`.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::model::{Task, TaskId, TaskPatch};

/// Remote task collection
#[async_trait(?Send)]
pub trait TaskApi {
    /// All tasks visible in the current context
    async fn list_tasks(&self) -> SyncResult<Vec<Task>>;

    /// Persist a partial update
    ///
    /// Returns the stored task, or `None` when the server sent no body.
    /// Must be safe to retry with the same payload.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> SyncResult<Option<Task>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Short user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Fire-and-forget toast sink
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Source of delays for request timeouts
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

// Shared handles, so a caller can keep a reference to what it hands over

#[async_trait(?Send)]
impl<T: TaskApi + ?Sized> TaskApi for Rc<T> {
    async fn list_tasks(&self) -> SyncResult<Vec<Task>> {
        (**self).list_tasks().await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> SyncResult<Option<Task>> {
        (**self).update_task(id, patch).await
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
