//! Kanban Card Component
//!
//! A single draggable task card.

use board_sync::Task;
use leptos::prelude::*;
use leptos_dragdrop::*;

/// Card background tints, picked by the last hex digit of the task id
const CARD_TINTS: &[&str] = &[
    "yellow", "pink", "orange", "green", "orange", "purple", "teal", "coral",
];

/// Stable tint for a task id
pub fn card_tint(id: &str) -> &'static str {
    let digit = id.chars().last().and_then(|c| c.to_digit(16)).unwrap_or(0) as usize;
    CARD_TINTS[digit % CARD_TINTS.len()]
}

#[component]
pub fn KanbanCard(
    task: Task,
    /// Where the card sits on the board
    origin: DropSlot,
    dnd: DndSignals,
) -> impl IntoView {
    let id = task.id.to_string();
    let tint = card_tint(&id);
    let on_mousedown = make_on_mousedown(dnd, id.clone(), origin);

    let is_dragging = move || dnd.dragging_id_read.with(|dragging| dragging.as_deref() == Some(id.as_str()));
    let card_class = move || {
        if is_dragging() {
            format!("kanban-card tint-{} dragging", tint)
        } else {
            format!("kanban-card tint-{}", tint)
        }
    };

    let priority = task.priority.map(|p| {
        let class = format!("priority-badge {}", p.label().to_lowercase());
        view! { <span class=class>{p.label()}</span> }
    });
    let comments = task.comment_count();
    let description = (!task.description.is_empty()).then(|| {
        view! { <p class="kanban-card-description">{task.description.clone()}</p> }
    });

    view! {
        <div class=card_class on:mousedown=on_mousedown>
            <div class="kanban-card-header">
                <span class="kanban-card-title">{task.title.clone()}</span>
                {priority}
            </div>
            {description}
            {(comments > 0).then(|| view! {
                <span class="kanban-card-comments">
                    {format!("{} comment{}", comments, if comments == 1 { "" } else { "s" })}
                </span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_tint_is_stable() {
        assert_eq!(card_tint("9f1c0"), "yellow");
        assert_eq!(card_tint("9f1c3"), "green");
        assert_eq!(card_tint("abcf"), "purple");
        assert_eq!(card_tint("task-x"), "yellow");
        assert_eq!(card_tint(""), card_tint("task-x"));
    }
}
