use crate::error::Result;
use crate::loader::CatalogFileLoader;
use crate::model::BookEntry;
use std::path::Path;

/// The in-memory book collection a session operates on.
///
/// Insertion order is preserved and meaningful: listing, grouping, and
/// searching all enumerate entries in the order they were loaded, and
/// removal by title takes the first match in that order.
#[derive(Debug, Default)]
pub struct Library {
    entries: Vec<BookEntry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append entries, keeping everything already loaded.
    pub fn add_entries(&mut self, entries: Vec<BookEntry>) {
        self.entries.extend(entries);
    }

    /// Load a record source and merge its entries into the collection.
    ///
    /// Returns the number of entries added. On any error the collection is
    /// left exactly as it was; a source is merged fully or not at all.
    pub fn load_data(&mut self, path: &Path) -> Result<usize> {
        let mut loader = CatalogFileLoader::new();
        loader.load_file_content(path)?;
        let parsed = loader.parse_file_content()?;
        let count = parsed.len();
        self.add_entries(parsed);
        Ok(count)
    }

    /// Remove the first entry matching the predicate, in collection order.
    pub fn remove_first_by<F>(&mut self, pred: F) -> Option<BookEntry>
    where
        F: Fn(&BookEntry) -> bool,
    {
        let position = self.entries.iter().position(pred)?;
        Some(self.entries.remove(position))
    }

    /// Remove every entry matching the predicate, returning the removed
    /// entries in collection order.
    ///
    /// Matches are materialized while draining; the collection is never
    /// iterated and mutated at the same time.
    pub fn remove_all_by<F>(&mut self, pred: F) -> Vec<BookEntry>
    where
        F: Fn(&BookEntry) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if pred(&entry) {
                removed.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        removed
    }
}
