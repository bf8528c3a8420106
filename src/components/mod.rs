//! UI Components
//!
//! Leptos components for the task board.

mod drop_zone;
mod kanban_board;
mod kanban_card;
mod kanban_column;
mod notice_stack;

pub use drop_zone::DropZone;
pub use kanban_board::KanbanBoard;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use notice_stack::NoticeStack;
