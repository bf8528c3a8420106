//! Kanban Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod logger;
mod notify;
mod store;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
