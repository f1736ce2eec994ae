//! Main drive component.
//!
//! ## Layout
//!
//! - Header across the top
//! - Sidebar on the left, main panel (breadcrumb + entries) on the right

use leptos::prelude::*;

use super::{Breadcrumb, FileGrid, FileList, Header, Sidebar};
use crate::app::AppContext;
use crate::config::NO_RESULTS_LABEL;
use crate::core::Listing;

stylance::import_crate_style!(css, "src/components/drive/drive.module.css");

/// Drive browser view component.
#[component]
pub fn Drive() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let listing = Memo::new(move |_| ctx.drive.listing());
    let item_count = move || format!("{} items", listing.with(|l| l.entries().len()));

    view! {
        <div class=css::drive>
            <Header />

            <div class=css::body>
                <Sidebar />

                <main class=css::main aria-label=item_count>
                    <Breadcrumb />

                    {move || match listing.get() {
                        Listing::Empty => view! { <EmptyState /> }.into_any(),
                        Listing::Grid(entries) => view! { <FileGrid entries=entries /> }.into_any(),
                        Listing::List(entries) => view! { <FileList entries=entries /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Placeholder for a search with no matches.
#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class=css::empty>
            <p class=css::emptyLabel>{NO_RESULTS_LABEL}</p>
        </div>
    }
}
