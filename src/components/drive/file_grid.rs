//! Grid layout: one card per entry.

use leptos::prelude::*;

use super::{ActionMenu, EntryGlyph};
use crate::app::AppContext;
use crate::models::{Entry, EntryIcon};

stylance::import_crate_style!(css, "src/components/drive/entries.module.css");

#[component]
pub fn FileGrid(entries: Vec<Entry>) -> impl IntoView {
    view! {
        <div class=css::grid role="list" aria-label="Files">
            {entries
                .into_iter()
                .map(|entry| view! { <GridCard entry=entry /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn GridCard(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = EntryIcon::for_entry(&entry);
    let name = entry.name.clone();
    let size = entry.size.clone();
    let aria_label = if entry.is_folder() {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    let entry_for_click = entry.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.open(&entry_for_click);
    };

    view! {
        <div class=css::card on:click=handle_click role="listitem" aria-label=aria_label>
            <div class=css::cardBody>
                <EntryGlyph icon=icon />
                <span class=css::cardName>{name}</span>
                {size.map(|size| view! { <span class=css::badge>{size}</span> })}
            </div>
            <div class=css::cardMenu>
                <ActionMenu entry=entry />
            </div>
        </div>
    }
}
