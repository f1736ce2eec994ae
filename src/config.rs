//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Entry catalog shown by the browser.
pub const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Drive";

/// Id of the element the app mounts into (see `index.html`).
pub const MOUNT_ID: &str = "app";

/// Breadcrumb label of the catalog root.
pub const ROOT_LABEL: &str = "My Drive";

// =============================================================================
// Text
// =============================================================================

/// Placeholder of the header search field.
pub const SEARCH_PLACEHOLDER: &str = "Search in Drive";

/// Shown when the search leaves no entries.
pub const NO_RESULTS_LABEL: &str = "No files found";

/// Prefix of the modified label in list rows.
pub const MODIFIED_PREFIX: &str = "Modified";

// =============================================================================
// Resource Opening
// =============================================================================

/// Browsing context used when opening a file's resource.
pub const RESOURCE_TARGET: &str = "_blank";

// =============================================================================
// Storage Meter (display only)
// =============================================================================

/// Storage usage meter.
pub mod storage {
    /// Caption under the meter.
    pub const USAGE_LABEL: &str = "7.5 GB of 15 GB used";
    /// Fill of the meter bar, in percent.
    pub const USAGE_PERCENT: u8 = 75;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_percent_in_range() {
        assert!(storage::USAGE_PERCENT <= 100);
    }

    #[test]
    fn test_catalog_asset_is_embedded() {
        assert!(CATALOG_JSON.trim_start().starts_with('['));
    }

    #[test]
    fn test_mount_point_exists_in_index() {
        let index = include_str!("../index.html");
        assert!(index.contains(&format!("id=\"{MOUNT_ID}\"")));
    }
}
