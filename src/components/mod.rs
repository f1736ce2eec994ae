//! UI components built with Leptos.
//!
//! - [`Drive`] - Main browser layout (header, sidebar, breadcrumb, entries)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod drive;
pub mod icons;

pub use drive::Drive;
