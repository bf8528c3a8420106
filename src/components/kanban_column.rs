//! Kanban Column Component
//!
//! One status column: header with count, cards, and drop slots between them.

use board_sync::Column;
use leptos::prelude::*;
use leptos_dragdrop::*;

use super::{DropZone, KanbanCard};

#[component]
pub fn KanbanColumn(column: Column, dnd: DndSignals) -> impl IntoView {
    let zone = column.id().to_string();
    let count = column.len();
    let empty = column.is_empty();

    let cards = column
        .tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| {
            let origin = DropSlot::new(zone.clone(), index);
            let after = DropSlot::new(zone.clone(), index + 1);
            view! {
                <KanbanCard task=task origin=origin dnd=dnd />
                <DropZone dnd=dnd slot=after />
            }
        })
        .collect_view();

    view! {
        <div class="kanban-column">
            <div class="kanban-column-header">
                <span class="kanban-column-title">{column.label}</span>
                <span class="kanban-column-count">{count}</span>
            </div>
            <div class="kanban-column-body">
                <DropZone dnd=dnd slot=DropSlot::new(zone.clone(), 0) tall=empty />
                {cards}
                {empty.then(|| view! { <div class="kanban-column-empty">"Drop tasks here"</div> })}
            </div>
        </div>
    }
}
