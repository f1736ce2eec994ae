//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Entry`] and its kind/media type - Catalog records
//! - [`EntryIcon`] - Semantic icon selection
//! - [`ViewMode`], [`SidebarLink`] - View management

mod entry;
mod explorer;

pub use entry::{Entry, EntryIcon};
#[cfg(test)]
pub use entry::{EntryKind, MediaType};
pub use explorer::{SidebarLink, ViewMode};
