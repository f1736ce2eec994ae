//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

use crate::config::RESOURCE_TARGET;
use crate::core::ResourceOpener;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Open a resource locator in a new browsing context.
///
/// Returns `true` if the browser created the context. Popup blockers make
/// `window.open` return `null`, which is reported as `false`.
pub fn open_in_new_tab(locator: &str) -> bool {
    window()
        .and_then(|w| w.open_with_url_and_target(locator, RESOURCE_TARGET).ok())
        .flatten()
        .is_some()
}

/// Opens file resources in a new browser tab.
#[derive(Clone, Copy, Debug, Default)]
pub struct NewTabOpener;

impl ResourceOpener for NewTabOpener {
    fn open(&self, locator: &str) -> bool {
        open_in_new_tab(locator)
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
