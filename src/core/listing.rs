//! Mapping from displayed entries to what the main panel renders.

use super::filter::filter_by_name;
use crate::models::{Entry, ViewMode};

/// Main panel content after search and layout are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// Nothing matched; render the "no results" placeholder
    Empty,
    /// One card per entry
    Grid(Vec<Entry>),
    /// One row per entry
    List(Vec<Entry>),
}

impl Listing {
    pub fn build(entries: &[Entry], query: &str, mode: ViewMode) -> Self {
        let visible = filter_by_name(entries, query);
        if visible.is_empty() {
            return Self::Empty;
        }
        match mode {
            ViewMode::Grid => Self::Grid(visible),
            ViewMode::List => Self::List(visible),
        }
    }

    /// Entries shown, regardless of layout.
    pub fn entries(&self) -> &[Entry] {
        match self {
            Self::Empty => &[],
            Self::Grid(entries) | Self::List(entries) => entries,
        }
    }
}
