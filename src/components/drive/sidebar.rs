//! Sidebar with fixed navigation links and the storage meter.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::storage;
use crate::models::SidebarLink;

stylance::import_crate_style!(css, "src/components/drive/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class=css::sidebar>
            <nav class=css::nav>
                {SidebarLink::ALL
                    .into_iter()
                    .map(|link| view! { <SidebarItem link=link /> })
                    .collect_view()}
            </nav>

            <StorageMeter />
        </aside>
    }
}

#[component]
fn SidebarItem(link: SidebarLink) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // "My Drive" returns to the root; the other views do not exist
    let on_click = move |_: leptos::ev::MouseEvent| {
        if link.is_active() {
            ctx.drive.go_home();
        } else {
            leptos::logging::log!("{}: not available yet", link.label());
        }
    };

    let class = if link.is_active() {
        format!("{} {}", css::link, css::linkActive)
    } else {
        css::link.to_string()
    };

    view! {
        <button class=class on:click=on_click>
            <span class=css::linkIcon aria-hidden="true"><Icon icon=ic::sidebar_icon(link) /></span>
            {link.label()}
        </button>
    }
}

/// Display-only usage bar.
#[component]
fn StorageMeter() -> impl IntoView {
    view! {
        <div class=css::storage>
            <div class=css::storageTitle>"Storage"</div>
            <div
                class=css::meter
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=storage::USAGE_PERCENT.to_string()
            >
                <div
                    class=css::meterFill
                    style=format!("width: {}%", storage::USAGE_PERCENT)
                ></div>
            </div>
            <div class=css::storageLabel>{storage::USAGE_LABEL}</div>
        </div>
    }
}
