mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MOUNT_ID;

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = document().get_element_by_id(MOUNT_ID) else {
        leptos::logging::error!("no #{MOUNT_ID} element to mount into");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
