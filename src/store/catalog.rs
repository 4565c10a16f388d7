use std::collections::HashMap;

use crate::models::{CatalogEntry, CatalogRecord, MovieId};

/// Ordered, immutable list of recommendable movies
///
/// Entry positions are stable for the lifetime of the store and double as
/// row/column indices into the similarity matrix.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    /// Title → index of its first occurrence
    by_title: HashMap<String, usize>,
}

impl CatalogStore {
    /// Builds the store from artifact rows, keeping their order
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .enumerate()
            .map(|(internal_index, record)| CatalogEntry {
                title: record.title,
                internal_index,
                external_id: MovieId(record.movie_id),
            })
            .collect();

        let mut by_title = HashMap::with_capacity(entries.len());
        for entry in &entries {
            by_title
                .entry(entry.title.clone())
                .or_insert(entry.internal_index);
        }

        Self { entries, by_title }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, internal_index: usize) -> Option<&CatalogEntry> {
        self.entries.get(internal_index)
    }

    /// Exact title match; duplicates resolve to the first one in catalog order
    pub fn find_by_title(&self, title: &str) -> Option<&CatalogEntry> {
        self.by_title
            .get(title)
            .and_then(|&index| self.entries.get(index))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Titles in catalog order, optionally narrowed to a case-insensitive substring
    pub fn titles(&self, query: Option<&str>) -> Vec<&str> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.entries
            .iter()
            .map(|entry| entry.title.as_str())
            .filter(|title| match &needle {
                Some(needle) => title.to_lowercase().contains(needle),
                None => true,
            })
            .collect()
    }
}
