//! Name search over displayed entries.

use crate::models::Entry;

/// Entries whose name contains `query`, ignoring case.
///
/// Only names are matched; folder contents are not searched.
/// An empty query keeps every entry. Order is preserved.
pub fn filter_by_name(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name_contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROOT_LABEL;
    use crate::core::{CatalogSource, Navigator, StaticCatalog};

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let root = StaticCatalog::embedded().unwrap().root();
        assert_eq!(filter_by_name(&root, ""), root);
    }

    #[test]
    fn test_case_insensitive_match() {
        let root = StaticCatalog::embedded().unwrap().root();

        for query in ["logo", "LOGO", "LoGo"] {
            assert_eq!(names(&filter_by_name(&root, query)), ["Logo Design.ai"]);
        }
    }

    #[test]
    fn test_matches_folder_name_not_contents() {
        let root = StaticCatalog::embedded().unwrap().root();
        let found = filter_by_name(&root, "doc");

        assert_eq!(names(&found), ["Documents"]);
        assert!(found[0].is_folder());
    }

    #[test]
    fn test_search_inside_folder() {
        let catalog = StaticCatalog::embedded().unwrap();
        let mut nav = Navigator::new(ROOT_LABEL, &catalog);
        let documents = catalog.root().into_iter().find(|e| e.name == "Documents").unwrap();
        nav.enter(&catalog, &documents).unwrap();

        let found = filter_by_name(nav.displayed(), "notes");
        assert_eq!(names(&found), ["Meeting Notes.docx"]);
    }

    #[test]
    fn test_results_are_ordered_subsequence() {
        let root = StaticCatalog::embedded().unwrap().root();

        for query in ["o", "e", ".", "s", "zzz", " "] {
            let found = filter_by_name(&root, query);
            let needle = query.to_lowercase();

            assert!(found.iter().all(|e| e.name.to_lowercase().contains(&needle)));
            let expected: Vec<_> = root
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_no_match() {
        let root = StaticCatalog::embedded().unwrap().root();
        assert!(filter_by_name(&root, "quarterly").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let root = StaticCatalog::embedded().unwrap().root();
        let once = filter_by_name(&root, "a");
        assert_eq!(filter_by_name(&once, "a"), once);
    }
}
