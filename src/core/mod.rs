//! Core logic for the drive browser, free of DOM access.
//!
//! This module provides:
//! - [`CatalogSource`] and [`StaticCatalog`] for catalog access
//! - [`Navigator`] for the breadcrumb stack and [`Activation`] for entry clicks
//! - [`Listing`] for name search and grid/list layout
//! - [`ActionRegistry`] for the per-entry action menu
//! - [`ResourceOpener`] for the host effect of opening a file

mod actions;
mod catalog;
pub mod error;
mod filter;
mod listing;
mod navigation;
mod opener;

pub use actions::{ActionOutcome, ActionRegistry, EntryAction};
pub use catalog::{CatalogSource, SharedCatalog, StaticCatalog};
pub use listing::Listing;
pub use navigation::{Activation, Navigator};
pub use opener::{ResourceOpener, SharedOpener};
