//! Folder navigation as an explicit stack of levels.
//!
//! Each level keeps the entries it displayed, so jumping back to any
//! breadcrumb restores exactly what was shown there.

use super::catalog::CatalogSource;
use super::error::NavigationError;
use crate::models::Entry;

/// One step of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Breadcrumb label
    pub label: String,
    /// Folder id (`None` for the root)
    pub folder_id: Option<String>,
    /// Entries displayed at this level
    pub entries: Vec<Entry>,
}

/// Navigation state: breadcrumb path plus displayed entries.
///
/// Invariant: the stack is never empty and level 0 is the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    levels: Vec<Level>,
}

impl Navigator {
    /// Start at the catalog root.
    pub fn new(root_label: &str, catalog: &dyn CatalogSource) -> Self {
        Self {
            levels: vec![Level {
                label: root_label.to_string(),
                folder_id: None,
                entries: catalog.root(),
            }],
        }
    }

    /// Entries of the current level.
    pub fn displayed(&self) -> &[Entry] {
        &self.current().entries
    }

    /// Breadcrumb labels from the root to the current folder.
    pub fn breadcrumb(&self) -> Vec<String> {
        self.levels.iter().map(|l| l.label.clone()).collect()
    }

    /// Number of levels (1 at the root).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Id of the current folder (`None` at the root).
    pub fn current_folder(&self) -> Option<&str> {
        self.current().folder_id.as_deref()
    }

    fn current(&self) -> &Level {
        // `levels` always holds the root
        &self.levels[self.levels.len() - 1]
    }

    /// Descend into `folder`, showing its children.
    ///
    /// State is left untouched on error.
    pub fn enter(
        &mut self,
        catalog: &dyn CatalogSource,
        folder: &Entry,
    ) -> Result<(), NavigationError> {
        if !folder.is_folder() {
            return Err(NavigationError::NotAFolder(folder.name.clone()));
        }
        let entries = catalog
            .children(&folder.id)
            .ok_or_else(|| NavigationError::UnknownFolder(folder.id.clone()))?;

        self.levels.push(Level {
            label: folder.name.clone(),
            folder_id: Some(folder.id.clone()),
            entries,
        });
        Ok(())
    }

    /// Truncate the trail to breadcrumb `index`, restoring that level.
    ///
    /// Returns `true` if the trail changed. Jumping to the current level or
    /// past the end does nothing and returns `false`.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.levels.len() - 1 {
            return false;
        }
        self.levels.truncate(index + 1);
        true
    }

    /// Return to the root level.
    pub fn reset(&mut self) {
        self.levels.truncate(1);
    }
}

/// What a click on an entry should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Descend into the folder
    EnterFolder,
    /// Open the locator in a new viewing context
    OpenResource(String),
    /// File without a locator; nothing happens
    Inert,
}

impl Activation {
    /// Classify a click. Never touches navigation state.
    pub fn of(entry: &Entry) -> Self {
        if entry.is_folder() {
            Self::EnterFolder
        } else if let Some(locator) = entry.resource() {
            Self::OpenResource(locator.to_string())
        } else {
            Self::Inert
        }
    }
}
