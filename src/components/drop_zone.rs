//! Drop Zone Component
//!
//! A horizontal drop slot between cards for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Drop slot shown between cards while a drag is in progress
#[component]
pub fn DropZone(
    dnd: DndSignals,
    /// Column and gap index this zone stands for
    slot: DropSlot,
    /// Fill the column body (used when the column is empty)
    #[prop(optional)]
    tall: bool,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this zone the current drop target?
    let is_active = move || dnd.drop_target_read.with(|target| target.as_ref() == Some(&slot));

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.with(Option::is_some);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if tall { c.push_str(" tall"); }
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
