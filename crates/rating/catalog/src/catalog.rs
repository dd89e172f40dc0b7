//! In-memory content catalog

use crate::error::{CatalogError, Result};
use crate::resolver::{normalize_title, TitleResolver};
use crate::seed::seed_items;
use rating_types::{Classification, ContentId, ContentItem};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Content keyed by id and by normalized title.
///
/// Mutation goes through `&mut self` and only happens while the catalog is
/// being populated; once shared, every query takes `&self`.
#[derive(Clone, Debug, Default)]
pub struct ContentCatalog {
    items: HashMap<ContentId, ContentItem>,
    by_title: HashMap<String, ContentId>,
}

impl ContentCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in titles
    pub fn with_seed_titles() -> Result<Self> {
        let mut catalog = Self::new();
        for item in seed_items()? {
            catalog.insert(item)?;
        }
        info!(items = catalog.len(), "Initialized content catalog");
        Ok(catalog)
    }

    /// Add an item. Ids and normalized titles must be unique.
    pub fn insert(&mut self, item: ContentItem) -> Result<()> {
        let key = normalize_title(item.title())?;
        if self.items.contains_key(&item.id()) {
            return Err(CatalogError::Duplicate(format!("id {}", item.id())));
        }
        if self.by_title.contains_key(&key) {
            return Err(CatalogError::Duplicate(format!("title '{}'", item.title())));
        }

        self.by_title.insert(key, item.id());
        self.items.insert(item.id(), item);
        Ok(())
    }

    fn lookup_title(&self, title: &str) -> Result<Option<&ContentItem>> {
        let key = normalize_title(title)?;
        Ok(self.by_title.get(&key).and_then(|id| self.items.get(id)))
    }

    /// Strict title lookup: a miss is an error.
    pub fn find_by_title(&self, title: &str) -> Result<&ContentItem> {
        match self.lookup_title(title)? {
            Some(item) => {
                debug!(title = %item.title(), "Found content");
                Ok(item)
            }
            None => {
                warn!(title = %title, "Content not found");
                Err(CatalogError::NotFound(title.to_string()))
            }
        }
    }

    /// Strict id lookup: a miss is an error.
    pub fn find_by_id(&self, id: ContentId) -> Result<&ContentItem> {
        self.items.get(&id).ok_or_else(|| {
            warn!(id = %id, "Content not found");
            CatalogError::IdNotFound(id)
        })
    }

    /// Case-insensitive substring search. A blank term matches nothing.
    pub fn search_by_title(&self, partial: &str) -> Vec<&ContentItem> {
        let term = partial.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let results = self.sorted(|item| item.title().to_lowercase().contains(&term));
        debug!(term = %term, results = results.len(), "Title search");
        results
    }

    /// Items rated exactly `classification`, sorted by title.
    pub fn by_classification(&self, classification: Classification) -> Vec<&ContentItem> {
        self.sorted(|item| item.classification() == classification)
    }

    /// Items viewable under `ceiling`, sorted by title.
    pub fn accessible_under(&self, ceiling: Classification) -> Vec<&ContentItem> {
        self.sorted(|item| item.classification().is_accessible_under(ceiling))
    }

    /// Every item, sorted by title.
    pub fn all(&self) -> Vec<&ContentItem> {
        self.sorted(|_| true)
    }

    /// Item count per classification. Levels with no items are absent.
    pub fn count_by_classification(&self) -> BTreeMap<Classification, usize> {
        let mut counts = BTreeMap::new();
        for item in self.items.values() {
            *counts.entry(item.classification()).or_insert(0) += 1;
        }
        counts
    }

    pub fn contains_title(&self, title: &str) -> bool {
        matches!(self.lookup_title(title), Ok(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn sorted<F>(&self, keep: F) -> Vec<&ContentItem>
    where
        F: Fn(&ContentItem) -> bool,
    {
        let mut items: Vec<&ContentItem> = self.items.values().filter(|item| keep(*item)).collect();
        items.sort_by(|a, b| a.title().cmp(b.title()));
        items
    }
}

impl TitleResolver for ContentCatalog {
    fn resolve_by_title(&self, title: &str) -> Result<Option<ContentItem>> {
        let found = self.lookup_title(title)?.cloned();
        debug!(title = %title, found = found.is_some(), "Resolved title");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ContentCatalog {
        ContentCatalog::with_seed_titles().unwrap()
    }

    #[test]
    fn test_seed_titles() {
        let catalog = seeded();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
        assert!(ContentCatalog::new().is_empty());
    }

    #[test]
    fn test_find_by_title() {
        let catalog = seeded();
        let item = catalog.find_by_title("Baby's Day Out").unwrap();
        assert_eq!(item.title(), "Baby's Day Out");
        assert_eq!(item.classification(), Classification::U);
        assert_eq!(item.release_year(), 1994);
    }

    #[test]
    fn test_find_by_title_case_insensitive() {
        let catalog = seeded();
        let a = catalog.find_by_title("baby's day out").unwrap();
        let b = catalog.find_by_title("BABY'S DAY OUT").unwrap();
        let c = catalog.find_by_title("  Baby's Day Out ").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_find_by_title_errors() {
        let catalog = seeded();
        assert_eq!(
            catalog.find_by_title("Non-existent Movie"),
            Err(CatalogError::NotFound("Non-existent Movie".to_string()))
        );
        assert!(matches!(
            catalog.find_by_title("   "),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = seeded();
        assert_eq!(catalog.find_by_id(ContentId(1)).unwrap().title(), "Baby's Day Out");
        assert_eq!(
            catalog.find_by_id(ContentId(999)),
            Err(CatalogError::IdNotFound(ContentId(999)))
        );
    }

    #[test]
    fn test_resolve_by_title() {
        let catalog = seeded();
        let nemo = catalog.resolve_by_title("finding nemo").unwrap().unwrap();
        assert_eq!(nemo.classification(), Classification::U);
        assert_eq!(nemo.genre(), "Animation");

        assert!(catalog.resolve_by_title("Nemo").unwrap().is_none());
        assert!(catalog.resolve_by_title("").is_err());
    }

    #[test]
    fn test_search_by_title() {
        let catalog = seeded();
        let results = catalog.search_by_title("  the  ");
        assert!(!results.is_empty());
        assert!(results.iter().all(|i| i.title().to_lowercase().contains("the")));

        assert_eq!(
            catalog.search_by_title("LION").len(),
            catalog.search_by_title("lion").len()
        );
        assert!(catalog.search_by_title("").is_empty());
        assert!(catalog.search_by_title("zzz").is_empty());
    }

    #[test]
    fn test_by_classification() {
        let catalog = seeded();
        let u = catalog.by_classification(Classification::U);
        let titles: Vec<&str> = u.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Baby's Day Out", "Finding Nemo"]);

        assert!(catalog
            .by_classification(Classification::R)
            .iter()
            .all(|i| i.classification() == Classification::R));
        assert!(catalog.by_classification(Classification::Twelve).is_empty());
    }

    #[test]
    fn test_accessible_under() {
        let catalog = seeded();
        let pg = catalog.accessible_under(Classification::Pg);
        assert_eq!(pg.len(), 3);
        assert!(pg.iter().all(|i| i.classification() != Classification::R));
        assert_eq!(catalog.accessible_under(Classification::R).len(), 8);
    }

    #[test]
    fn test_all_sorted() {
        let catalog = seeded();
        let all = catalog.all();
        assert_eq!(all.len(), 8);
        assert!(all.windows(2).all(|w| w[0].title() <= w[1].title()));
    }

    #[test]
    fn test_count_by_classification() {
        let counts = seeded().count_by_classification();
        assert_eq!(counts.get(&Classification::U), Some(&2));
        assert_eq!(counts.get(&Classification::Pg), Some(&1));
        assert_eq!(counts.get(&Classification::Pg13), Some(&3));
        assert_eq!(counts.get(&Classification::R), Some(&2));
        assert_eq!(counts.get(&Classification::Eighteen), None);
        assert_eq!(counts.values().sum::<usize>(), 8);
    }

    #[test]
    fn test_contains_title() {
        let catalog = seeded();
        assert!(catalog.contains_title("Baby's Day Out"));
        assert!(catalog.contains_title("baby's day out"));
        assert!(!catalog.contains_title("Non-existent Movie"));
        assert!(!catalog.contains_title(""));
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut catalog = seeded();
        let same_id =
            ContentItem::new(ContentId(1), "Brand New", Classification::U, None, 2020).unwrap();
        assert!(matches!(
            catalog.insert(same_id),
            Err(CatalogError::Duplicate(_))
        ));

        let same_title =
            ContentItem::new(ContentId(42), "the matrix", Classification::U, None, 2020).unwrap();
        assert!(matches!(
            catalog.insert(same_title),
            Err(CatalogError::Duplicate(_))
        ));

        let fresh =
            ContentItem::new(ContentId(42), "Brand New", Classification::U, None, 2020).unwrap();
        catalog.insert(fresh).unwrap();
        assert_eq!(catalog.len(), 9);
    }
}
