//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Written only through the helpers below; the board itself is owned by
//! `BoardSync`, which mirrors every change into `tasks`.

use board_sync::{Notice, Task};
use leptos::prelude::*;
use reactive_stores::Store;

/// A toast currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Global board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Board as currently shown, optimistic moves included
    pub tasks: Vec<Task>,
    /// Visible toasts, oldest first
    pub notices: Vec<Toast>,
    /// A full load is in progress
    pub loading: bool,
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_tasks(store: &BoardStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

pub fn store_set_loading(store: &BoardStore, loading: bool) {
    *store.loading().write() = loading;
}

/// Add a toast and return its id
pub fn store_push_notice(store: &BoardStore, notice: Notice) -> u32 {
    let id = {
        let field = store.next_notice_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.notices().write().push(Toast { id, notice });
    id
}

pub fn store_dismiss_notice(store: &BoardStore, id: u32) {
    store.notices().write().retain(|toast| toast.id != id);
}
