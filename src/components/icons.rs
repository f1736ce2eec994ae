//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{EntryIcon, SidebarLink};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuEllipsisVertical as More, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuHardDrive as Drive, LuHouse as Home,
        LuImage as FileImage, LuLayoutGrid as Grid, LuList as List, LuMusic as FileAudio,
        LuPlus as Plus, LuSearch as Search, LuSettings as Settings, LuStar as Star,
        LuTrash2 as Trash, LuUpload as Upload, LuUsers as Shared, LuVideo as FileVideo,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsGear as Settings, BsGrid as Grid, BsHdd as Drive, BsHouseFill as Home,
        BsListUl as List, BsPeople as Shared, BsPlusLg as Plus, BsSearch as Search,
        BsStar as Star, BsThreeDotsVertical as More, BsTrash as Trash, BsUpload as Upload,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DRIVE, Drive);
themed_icon!(HOME, Home);
themed_icon!(SHARED, Shared);
themed_icon!(STAR, Star);
themed_icon!(TRASH, Trash);
themed_icon!(SETTINGS, Settings);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(SEARCH, Search);
themed_icon!(LIST, List);
themed_icon!(GRID, Grid);
themed_icon!(PLUS, Plus);
themed_icon!(UPLOAD, Upload);
themed_icon!(MORE, More);

// =============================================================================
// Semantic Lookups
// =============================================================================

/// Glyph for an entry icon.
pub fn entry_icon(icon: EntryIcon) -> Icon {
    match icon {
        EntryIcon::Folder => FOLDER,
        EntryIcon::Document => FILE_TEXT,
        EntryIcon::Image => FILE_IMAGE,
        EntryIcon::Video => FILE_VIDEO,
        EntryIcon::Audio => FILE_AUDIO,
        EntryIcon::Generic => FILE,
    }
}

/// Glyph for a sidebar link.
pub fn sidebar_icon(link: SidebarLink) -> Icon {
    match link {
        SidebarLink::MyDrive => HOME,
        SidebarLink::SharedWithMe => SHARED,
        SidebarLink::Starred => STAR,
        SidebarLink::Trash => TRASH,
        SidebarLink::Settings => SETTINGS,
    }
}
