use std::sync::Arc;

/// Host side effect for file resources.
///
/// Clicking a linked file issues exactly one call to [`ResourceOpener::open`]
/// and changes no navigation state.
pub trait ResourceOpener: Send + Sync {
    /// Ask the host to open `locator` in a new viewing context.
    ///
    /// Returns `false` if the host refused (e.g. a popup blocker).
    fn open(&self, locator: &str) -> bool;
}

/// Shared handle to the opener used by the running app.
pub type SharedOpener = Arc<dyn ResourceOpener>;
