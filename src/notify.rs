//! Toast Notifications
//!
//! Notifier that shows board notices as toasts and clears them after a while.

use std::time::Duration;

use board_sync::{Notice, Notifier};
use leptos::task::spawn_local;

use crate::store::{store_dismiss_notice, store_push_notice, BoardStore};

pub struct ToastSink {
    store: BoardStore,
    ttl: Duration,
}

impl ToastSink {
    pub fn new(store: BoardStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }
}

impl Notifier for ToastSink {
    fn notify(&self, notice: Notice) {
        log::debug!("[TOAST] {:?}: {}", notice.level, notice.message);
        let id = store_push_notice(&self.store, notice);

        let store = self.store;
        let ttl = self.ttl;
        spawn_local(async move {
            gloo_timers::future::sleep(ttl).await;
            store_dismiss_notice(&store, id);
        });
    }
}
