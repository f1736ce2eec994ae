//! Drive header component.
//!
//! Contains the app title, search field, view toggle and the New/Upload
//! buttons. New and Upload are placeholders with no backing storage.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, SEARCH_PLACEHOLDER};
use crate::models::ViewMode;

stylance::import_crate_style!(css, "src/components/drive/header.module.css");

/// Drive header with search and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let search_query = ctx.drive.search_query;

    view! {
        <header class=css::header>
            <div class=css::lead>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::DRIVE /></span>
                    {APP_NAME}
                </h1>

                <label class=css::search>
                    <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                    <input
                        type="search"
                        class=css::searchInput
                        placeholder=SEARCH_PLACEHOLDER
                        aria-label=SEARCH_PLACEHOLDER
                        prop:value=move || search_query.get()
                        on:input=move |ev| ctx.drive.set_query(event_target_value(&ev))
                    />
                </label>
            </div>

            <ActionButtons />
        </header>
    }
}

/// View toggle, New and Upload.
#[component]
fn ActionButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let view_mode = ctx.drive.view_mode;

    let on_view_toggle = move |_: leptos::ev::MouseEvent| {
        ctx.drive.toggle_view_mode();
    };

    let on_new = move |_: leptos::ev::MouseEvent| {
        leptos::logging::log!("New: not available yet");
    };

    let on_upload = move |_: leptos::ev::MouseEvent| {
        let target = ctx
            .drive
            .current_folder()
            .unwrap_or_else(|| "root".to_string());
        leptos::logging::log!("Upload into {target}: not available yet");
    };

    view! {
        <div class=css::actions>
            // Shows the layout the button switches to
            <button
                class=css::iconButton
                on:click=on_view_toggle
                title=move || match view_mode.get() {
                    ViewMode::Grid => "List view",
                    ViewMode::List => "Grid view",
                }
            >
                {move || match view_mode.get() {
                    ViewMode::Grid => view! { <Icon icon=ic::LIST /> }.into_any(),
                    ViewMode::List => view! { <Icon icon=ic::GRID /> }.into_any(),
                }}
            </button>

            <button class=css::button on:click=on_new>
                <Icon icon=ic::PLUS />
                "New"
            </button>

            <button class=format!("{} {}", css::button, css::buttonPrimary) on:click=on_upload>
                <Icon icon=ic::UPLOAD />
                "Upload"
            </button>
        </div>
    }
}
