//! Board Context
//!
//! Shares the board synchroniser with components via the Leptos Context API.

use board_sync::{BoardConfig, BoardStats, BoardSync, DragEnd, DragLocation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{DragRelease, DropSlot};

use crate::api::RestTaskApi;
use crate::notify::ToastSink;
use crate::store::{store_set_loading, BoardStore};
use crate::timer::BrowserTimer;

pub type AppSync = BoardSync<RestTaskApi, ToastSink, BrowserTimer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The synchroniser is single-threaded, so it lives in local storage
    sync: StoredValue<AppSync, LocalStorage>,
    store: BoardStore,
}

impl BoardContext {
    pub fn new(sync: AppSync, store: BoardStore) -> Self {
        Self { sync: StoredValue::new_local(sync), store }
    }

    pub fn config(&self) -> BoardConfig {
        self.sync.with_value(|sync| sync.config().clone())
    }

    /// Counts for the board as currently shown
    pub fn stats(&self) -> BoardStats {
        self.sync.with_value(|sync| sync.stats())
    }

    /// Reload the board from the API
    pub fn reload(&self) {
        let sync = self.sync.get_value();
        let store = self.store;
        store_set_loading(&store, true);
        spawn_local(async move {
            // failures reach the user as a toast from the sync layer
            if let Err(err) = sync.load().await {
                log::warn!("[APP] load failed: {}", err);
            }
            store_set_loading(&store, false);
        });
    }

    /// Handle a released drag: update the board now, persist in the background
    pub fn drop_task(&self, release: DragRelease) {
        let event = to_drag_end(release);
        let sync = self.sync.get_value();
        if let Some(write) = sync.on_drag_end(&event) {
            spawn_local(write);
        }
    }
}

fn to_location(slot: DropSlot) -> DragLocation {
    DragLocation::new(slot.zone, slot.index)
}

fn to_drag_end(release: DragRelease) -> DragEnd {
    DragEnd {
        draggable_id: release.draggable_id,
        source: to_location(release.source),
        destination: release.destination.map(to_location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_sync::{interpret, Task, TaskStatus};

    fn release(from: (&str, usize), to: Option<(&str, usize)>) -> DragRelease {
        DragRelease {
            draggable_id: "a".to_string(),
            source: DropSlot::new(from.0, from.1),
            destination: to.map(|(zone, index)| DropSlot::new(zone, index)),
        }
    }

    fn board() -> Vec<Task> {
        vec![
            Task::new("a", "A", TaskStatus::NotStarted, 0.0),
            Task::new("b", "B", TaskStatus::NotStarted, 1000.0),
        ]
    }

    #[test]
    fn test_drop_in_gap_below_own_card_is_noop() {
        let event = to_drag_end(release(("not_started", 0), Some(("not_started", 1))).normalized());
        assert_eq!(event.destination, Some(DragLocation::new("not_started", 0)));
        assert_eq!(event.destination.as_ref(), Some(&event.source));
        assert!(interpret(&event, &board(), &BoardConfig::default()).is_none());
    }

    #[test]
    fn test_drop_below_next_card_moves_down() {
        let event = to_drag_end(release(("not_started", 0), Some(("not_started", 2))).normalized());
        assert_eq!(event.draggable_id, "a");
        assert_eq!(event.destination, Some(DragLocation::new("not_started", 1)));
        let plan = interpret(&event, &board(), &BoardConfig::default()).unwrap();
        assert_eq!(plan.primary.new_order, 2000.0);
    }

    #[test]
    fn test_release_outside_slots_has_no_destination() {
        let event = to_drag_end(release(("not_started", 0), None).normalized());
        assert_eq!(event.destination, None);
        assert!(interpret(&event, &board(), &BoardConfig::default()).is_none());
    }
}
