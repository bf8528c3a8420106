//! Task Board App
//!
//! Root component: wires the REST client, toasts and board store into
//! `BoardSync`, then renders the board.

use board_sync::{BoardConfig, BoardSync};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiConfig, RestTaskApi};
use crate::components::{KanbanBoard, NoticeStack};
use crate::context::BoardContext;
use crate::notify::ToastSink;
use crate::store::{store_set_tasks, BoardState, BoardStateStoreFields};
use crate::timer::BrowserTimer;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    let config = BoardConfig::default();
    let toasts = ToastSink::new(store, config.notice_ttl());
    let sync = BoardSync::new(RestTaskApi::new(ApiConfig::from_env()), toasts, BrowserTimer, config);

    // Mirror every board change into the store
    sync.subscribe(move |tasks| store_set_tasks(&store, tasks.to_vec()));

    let ctx = BoardContext::new(sync, store);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.reload());

    let stats = move || {
        store.tasks().track();
        let stats = ctx.stats();
        format!(
            "{} tasks · {} not started · {} in progress · {} done ({:.0}%)",
            stats.total,
            stats.not_started,
            stats.in_progress,
            stats.done,
            stats.percent * 100.0
        )
    };

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>"Task Board"</h1>
                <span class="board-stats">{stats}</span>
                <button
                    class="board-refresh"
                    disabled=move || store.loading().get()
                    on:click=move |_| ctx.reload()
                >
                    "Refresh"
                </button>
            </header>
            <Show when=move || store.loading().get()>
                <div class="board-loading">"Loading tasks..."</div>
            </Show>
            <KanbanBoard />
            <NoticeStack />
        </div>
    }
}
