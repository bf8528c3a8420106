//! Kanban Board Component
//!
//! Lays out the configured columns and routes finished drags to `BoardContext`.

use board_sync::partition;
use leptos::prelude::*;
use leptos_dragdrop::*;

use super::KanbanColumn;
use crate::context::BoardContext;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = use_board_store();
    let columns = ctx.config().columns;

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |release| {
        log::debug!("[DND] released {} over {:?}", release.draggable_id, release.destination);
        ctx.drop_task(release);
    });

    view! {
        <div class="kanban-container">
            {move || {
                store.tasks().with(|tasks| partition(tasks, &columns))
                    .into_iter()
                    .map(|column| view! { <KanbanColumn column=column dnd=dnd /> })
                    .collect_view()
            }}
        </div>
    }
}
