//! Breadcrumb component.
//!
//! Displays the navigation trail with one clickable segment per level.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/drive/breadcrumb.module.css");

/// Breadcrumb trail above the entries.
///
/// Clicking segment `i` jumps back to that level; the last segment is the
/// current folder and clicking it changes nothing.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let labels = Memo::new(move |_| ctx.drive.navigator.with(|nav| nav.breadcrumb()));

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                let labels = labels.get();
                let last = labels.len().saturating_sub(1);

                labels
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let is_current = index == last;
                        let class = if is_current {
                            format!("{} {}", css::segment, css::segmentCurrent)
                        } else {
                            css::segment.to_string()
                        };

                        view! {
                            <>
                                <button
                                    class=class
                                    on:click=move |_| ctx.drive.jump_to(index)
                                    aria-current=is_current.then_some("page")
                                >
                                    {label}
                                </button>
                                {(!is_current).then(|| view! {
                                    <span class=css::separator aria-hidden="true">
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
