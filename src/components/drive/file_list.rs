//! List layout: one row per entry with its modified label.

use leptos::prelude::*;

use super::{ActionMenu, EntryGlyph};
use crate::app::AppContext;
use crate::config::MODIFIED_PREFIX;
use crate::models::{Entry, EntryIcon};

stylance::import_crate_style!(css, "src/components/drive/entries.module.css");

#[component]
pub fn FileList(entries: Vec<Entry>) -> impl IntoView {
    view! {
        <div class=css::list role="list" aria-label="Files">
            {entries
                .into_iter()
                .map(|entry| view! { <FileListItem entry=entry /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FileListItem(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = EntryIcon::for_entry(&entry);
    let name = entry.name.clone();
    let size = entry.size.clone();
    let modified = format!("{} {}", MODIFIED_PREFIX, entry.modified);
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
        <div class=css::row on:click=handle_click role="listitem" aria-label=aria_label>
            <div class=css::rowMain>
                <EntryGlyph icon=icon />
                <div class=css::rowText>
                    <span class=css::rowName>{name}</span>
                    <span class=css::rowModified>{modified}</span>
                </div>
            </div>
            <div class=css::rowSide>
                {size.map(|size| view! { <span class=css::badge>{size}</span> })}
                <ActionMenu entry=entry />
            </div>
        </div>
    }
}
