//! Explorer-related data types for the drive UI.

/// Layout of the entry listing (grid or list).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Card grid (default)
    #[default]
    Grid,
    /// One row per entry
    List,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Fixed sidebar navigation links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarLink {
    MyDrive,
    SharedWithMe,
    Starred,
    Trash,
    Settings,
}

impl SidebarLink {
    /// All links in display order.
    pub const ALL: [SidebarLink; 5] = [
        Self::MyDrive,
        Self::SharedWithMe,
        Self::Starred,
        Self::Trash,
        Self::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MyDrive => "My Drive",
            Self::SharedWithMe => "Shared with me",
            Self::Starred => "Starred",
            Self::Trash => "Trash",
            Self::Settings => "Settings",
        }
    }

    /// Only "My Drive" has a backing view; the rest are placeholders.
    pub fn is_active(self) -> bool {
        matches!(self, Self::MyDrive)
    }
}
