use serde::Deserialize;

// =============================================================================
// Media Type
// =============================================================================

/// Media category of a file, used only to pick its icon.
///
/// Unrecognized labels map to [`MediaType::Unknown`] instead of failing,
/// so a catalog can carry categories this build does not draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MediaType {
    Document,
    Image,
    Video,
    Audio,
    Unknown,
}

impl MediaType {
    /// Parse a catalog label (case-insensitive).
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "document" => Self::Document,
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for MediaType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

// =============================================================================
// Entry
// =============================================================================

/// A folder or file record in the catalog.
///
/// `size` and `modified` are display strings only; nothing sorts or
/// computes on them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Unique across the whole catalog
    pub id: String,
    /// Display name, also the search key
    pub name: String,
    /// Human-formatted size ("2.4 MB")
    #[serde(default)]
    pub size: Option<String>,
    /// Opaque modification label ("2 days ago")
    pub modified: String,
    #[serde(flatten)]
    pub kind: EntryKind,
}

/// Folder/file split. Folder-only and file-only fields live on their variant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryKind {
    Folder {
        /// Ordered children, owned by this folder
        #[serde(default)]
        children: Vec<Entry>,
    },
    File {
        #[serde(default, rename = "fileType")]
        media_type: Option<MediaType>,
        /// External locator opened in a new tab
        #[serde(default, rename = "url")]
        resource: Option<String>,
    },
}

impl Entry {
    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, EntryKind::Folder { .. })
    }

    /// Children of a folder (`None` for files).
    pub fn children(&self) -> Option<&[Entry]> {
        match &self.kind {
            EntryKind::Folder { children } => Some(children),
            EntryKind::File { .. } => None,
        }
    }

    /// Resource locator of a file (`None` for folders and unlinked files).
    pub fn resource(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::File { resource, .. } => resource.as_deref(),
            EntryKind::Folder { .. } => None,
        }
    }

    /// Media type of a file (`None` for folders or when absent).
    pub fn media_type(&self) -> Option<MediaType> {
        match &self.kind {
            EntryKind::File { media_type, .. } => *media_type,
            EntryKind::Folder { .. } => None,
        }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
impl Entry {
    pub fn folder(id: &str, name: &str, children: Vec<Entry>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            size: None,
            modified: "today".to_string(),
            kind: EntryKind::Folder { children },
        }
    }

    pub fn file(id: &str, name: &str, media_type: Option<MediaType>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            size: None,
            modified: "today".to_string(),
            kind: EntryKind::File {
                media_type,
                resource: None,
            },
        }
    }

    pub fn with_resource(mut self, locator: &str) -> Self {
        if let EntryKind::File { resource, .. } = &mut self.kind {
            *resource = Some(locator.to_string());
        }
        self
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Semantic icon for an entry, resolved to a concrete glyph by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryIcon {
    Folder,
    Document,
    Image,
    Video,
    Audio,
    /// Files with a missing or unrecognized media type
    Generic,
}

impl EntryIcon {
    pub fn for_entry(entry: &Entry) -> Self {
        if entry.is_folder() {
            return Self::Folder;
        }
        match entry.media_type() {
            Some(MediaType::Document) => Self::Document,
            Some(MediaType::Image) => Self::Image,
            Some(MediaType::Video) => Self::Video,
            Some(MediaType::Audio) => Self::Audio,
            Some(MediaType::Unknown) | None => Self::Generic,
        }
    }
}
