//! Tinted entry icon shared by grid cards and list rows.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::EntryIcon;

stylance::import_crate_style!(css, "src/components/drive/entries.module.css");

fn tone_class(icon: EntryIcon) -> &'static str {
    match icon {
        EntryIcon::Folder => css::toneBlue,
        EntryIcon::Document => css::toneRed,
        EntryIcon::Image => css::toneGreen,
        EntryIcon::Video => css::tonePurple,
        EntryIcon::Audio => css::toneOrange,
        EntryIcon::Generic => css::toneGray,
    }
}

#[component]
pub fn EntryGlyph(icon: EntryIcon) -> impl IntoView {
    view! {
        <span class=format!("{} {}", css::glyph, tone_class(icon)) aria-hidden="true">
            <Icon icon=ic::entry_icon(icon) />
        </span>
    }
}
