//! Notice Stack Component
//!
//! Toasts for finished moves and failures. Click to dismiss.

use board_sync::NoticeLevel;
use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_board_store, BoardStateStoreFields};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="notice-stack">
            <For
                each=move || store.notices().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "notice success",
                        NoticeLevel::Error => "notice error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| store_dismiss_notice(&store, id)>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
