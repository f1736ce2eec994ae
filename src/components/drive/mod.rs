//! Drive browser UI components.
//!
//! Components:
//! - [`Drive`] - Main layout
//! - [`Header`] - Title, search field, view toggle, New and Upload
//! - [`Sidebar`] - Fixed navigation links and storage meter
//! - [`Breadcrumb`] - Clickable navigation trail
//! - [`FileGrid`], [`FileList`] - Entry layouts
//! - [`ActionMenu`] - Per-entry Share/Download/Rename/Delete menu

mod action_menu;
mod breadcrumb;
#[allow(clippy::module_inception)]
mod drive;
mod file_grid;
mod file_list;
mod glyph;
mod header;
mod sidebar;

pub use action_menu::ActionMenu;
pub use breadcrumb::Breadcrumb;
pub use drive::Drive;
pub use file_grid::FileGrid;
pub use file_list::FileList;
pub use glyph::EntryGlyph;
pub use header::Header;
pub use sidebar::Sidebar;
