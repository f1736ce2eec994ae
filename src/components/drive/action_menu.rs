//! Per-entry action menu (Share, Download, Rename, Delete).
//!
//! Clicks inside the menu never reach the card or row it sits on.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::EntryAction;
use crate::models::Entry;

stylance::import_crate_style!(css, "src/components/drive/action_menu.module.css");

#[component]
pub fn ActionMenu(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (menu_open, set_menu_open) = signal(false);
    let entry = StoredValue::new(entry);

    // Close menu when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        if let Some(related) = event.related_target() {
            if let Some(current) = event.current_target() {
                use wasm_bindgen::JsCast;
                if let (Some(wrapper), Some(target)) = (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                )
                    && !wrapper.contains(Some(target))
                {
                    set_menu_open.set(false);
                }
            }
        } else {
            set_menu_open.set(false);
        }
    };

    view! {
        <div
            class=css::wrapper
            on:focusout=on_focusout
            on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
        >
            <button
                class=css::trigger
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                title="More actions"
                aria-haspopup="menu"
                aria-expanded=move || menu_open.get().to_string()
            >
                <Icon icon=ic::MORE />
            </button>
            <Show when=move || menu_open.get()>
                <div class=css::menu role="menu">
                    {EntryAction::ALL
                        .into_iter()
                        .map(|action| {
                            let class = if action.is_destructive() {
                                format!("{} {}", css::item, css::itemDestructive)
                            } else {
                                css::item.to_string()
                            };
                            let title = (!ctx.is_available(action)).then_some("Not available yet");

                            view! {
                                <button
                                    class=class
                                    role="menuitem"
                                    title=title
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        entry.with_value(|entry| ctx.run_action(action, entry));
                                    }
                                >
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
