use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::error::CatalogError;
use crate::config::CATALOG_JSON;
use crate::models::Entry;

/// Read-only source of catalog entries.
///
/// The UI only ever asks for the root sequence or the children of a folder
/// it already holds, so any backend able to answer those two queries can
/// replace the embedded catalog.
pub trait CatalogSource: Send + Sync {
    /// Root-level entries, in catalog order.
    fn root(&self) -> Vec<Entry>;

    /// Children of the folder with `folder_id`, in catalog order.
    ///
    /// Returns `None` if no folder has that id.
    fn children(&self, folder_id: &str) -> Option<Vec<Entry>>;
}

/// Shared handle to the catalog used by the running app.
pub type SharedCatalog = Arc<dyn CatalogSource>;

/// Immutable catalog backed by an in-memory entry tree.
///
/// Folders are indexed by id to their position in the tree, stored as the
/// child index taken at each level from the root.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    root: Vec<Entry>,
    folders: HashMap<String, Vec<usize>>,
}

impl StaticCatalog {
    /// Build a catalog from root entries, validating ids and names.
    pub fn new(root: Vec<Entry>) -> Result<Self, CatalogError> {
        let folders = Self::index(&root)?;
        Ok(Self { root, folders })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let root: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(root)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Walk the tree once, checking invariants and recording folder positions.
    fn index(root: &[Entry]) -> Result<HashMap<String, Vec<usize>>, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut folders = HashMap::new();
        let mut pending: Vec<(Vec<usize>, &Entry)> = root
            .iter()
            .enumerate()
            .map(|(i, entry)| (vec![i], entry))
            .collect();

        while let Some((position, entry)) = pending.pop() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }

            if let Some(children) = entry.children() {
                for (i, child) in children.iter().enumerate() {
                    let mut child_position = position.clone();
                    child_position.push(i);
                    pending.push((child_position, child));
                }
                folders.insert(entry.id.clone(), position);
            }
        }

        Ok(folders)
    }

    fn entry_at(&self, position: &[usize]) -> Option<&Entry> {
        let (first, rest) = position.split_first()?;
        let mut entry = self.root.get(*first)?;
        for i in rest {
            entry = entry.children()?.get(*i)?;
        }
        Some(entry)
    }
}

impl CatalogSource for StaticCatalog {
    fn root(&self) -> Vec<Entry> {
        self.root.clone()
    }

    fn children(&self, folder_id: &str) -> Option<Vec<Entry>> {
        let position = self.folders.get(folder_id)?;
        self.entry_at(position)
            .and_then(Entry::children)
            .map(<[Entry]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, MediaType};

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = StaticCatalog::embedded().unwrap();
        let root = catalog.root();

        assert_eq!(
            names(&root),
            [
                "Documents",
                "Photos",
                "Videos",
                "Budget Spreadsheet.xlsx",
                "Logo Design.ai",
                "Background Music.mp3",
            ]
        );
        assert_eq!(
            names(&catalog.children("1").unwrap()),
            ["Project Proposal.pdf", "Meeting Notes.docx"]
        );
        assert_eq!(
            names(&catalog.children("2").unwrap()),
            ["vacation-beach.jpg", "family-dinner.png"]
        );
        assert_eq!(
            names(&catalog.children("3").unwrap()),
            ["presentation-demo.mp4"]
        );
    }

    #[test]
    fn test_embedded_catalog_files() {
        let catalog = StaticCatalog::embedded().unwrap();
        let root = catalog.root();
        let music = root.iter().find(|e| e.id == "6").unwrap();

        assert_eq!(music.media_type(), Some(MediaType::Audio));
        assert_eq!(music.resource(), Some("/audio/music.mp3"));
        assert_eq!(music.size.as_deref(), Some("5.8 MB"));
        assert_eq!(music.modified, "2 weeks ago");

        // Folders carry no size
        assert!(root.iter().filter(|e| e.is_folder()).all(|e| e.size.is_none()));
    }

    #[test]
    fn test_children_of_file_or_unknown_id() {
        let catalog = StaticCatalog::embedded().unwrap();
        assert_eq!(catalog.children("4"), None);
        assert_eq!(catalog.children("1-1"), None);
        assert_eq!(catalog.children("missing"), None);
    }

    #[test]
    fn test_nested_folders() {
        let root = vec![Entry::folder(
            "a",
            "A",
            vec![Entry::folder(
                "b",
                "B",
                vec![Entry::folder("c", "C", vec![Entry::file("d", "D", None)])],
            )],
        )];
        let catalog = StaticCatalog::new(root).unwrap();

        assert_eq!(names(&catalog.children("b").unwrap()), ["C"]);
        assert_eq!(names(&catalog.children("c").unwrap()), ["D"]);
        assert!(matches!(
            catalog.children("a").unwrap()[0].kind,
            EntryKind::Folder { .. }
        ));
    }

    #[test]
    fn test_empty_folder_has_empty_children() {
        let catalog = StaticCatalog::new(vec![Entry::folder("e", "Empty", vec![])]).unwrap();
        assert_eq!(catalog.children("e"), Some(vec![]));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let root = vec![
            Entry::folder("1", "Documents", vec![Entry::file("2", "a.txt", None)]),
            Entry::file("2", "b.txt", None),
        ];
        let err = StaticCatalog::new(root).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "2"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = StaticCatalog::new(vec![Entry::file("x", "  ", None)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(id) if id == "x"));
    }

    #[test]
    fn test_parse_error() {
        let err = StaticCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("catalog parse error"));
    }
}
