//! Immutable movie catalogue.
//!
//! The catalogue is loaded once per process from a JSON array of records
//! (`movie_id`, `title`, `tags`) and never mutated afterwards. Every other
//! component holds read-only references into it, addressed either by the
//! stable `movie_id` or by row index (the entry's position in load order).
//! Row indices are only meaningful within a single load.
//!
//! # Examples
//!
//! ```
//! use marquee::catalogue::Catalogue;
//!
//! let json = r#"[
//!     {"movie_id": 1, "title": "Inception", "tags": "dream heist thriller"},
//!     {"movie_id": 2, "title": "Interstellar", "tags": "space time drama"}
//! ]"#;
//!
//! let catalogue = Catalogue::from_reader(json.as_bytes()).unwrap();
//! assert_eq!(catalogue.len(), 2);
//! assert!(catalogue.lookup_by_title_exact("inception").is_some());
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MarqueeError, Result};

/// The canonical genre names recognized in tag text.
pub const ALL_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Horror",
    "Thriller",
    "Animation",
    "Fantasy",
    "Romance",
    "Sci-Fi",
];

/// A single movie record.
///
/// `tags` is the normalized free-text blob (concatenated genre, keyword,
/// and overview tokens) used only as vectorizer input; it is never shown
/// to users raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Opaque stable identifier, unique across the catalogue.
    pub movie_id: u64,
    /// Display title. Not guaranteed unique.
    pub title: String,
    /// Tag text blob for vectorization.
    pub tags: String,
}

/// The immutable set of movie records.
///
/// Duplicate titles across different ids are allowed; id-based lookup is
/// unambiguous, title-based lookup returns the first row in load order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// Build a catalogue from already-deserialized entries.
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        Catalogue { entries }
    }

    /// Load the catalogue from a JSON file.
    ///
    /// Fails with a load error if the file is missing, is not valid JSON,
    /// or any record lacks one of the required fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MarqueeError::load(format!("cannot open catalogue {}: {e}", path.display()))
        })?;
        let catalogue = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            entries = catalogue.len(),
            "catalogue loaded"
        );
        Ok(catalogue)
    }

    /// Load the catalogue from any reader yielding the JSON record array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<CatalogueEntry> = serde_json::from_reader(reader)
            .map_err(|e| MarqueeError::load(format!("malformed catalogue: {e}")))?;
        Ok(Catalogue { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalogue has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at the given row index.
    pub fn get(&self, row: usize) -> Option<&CatalogueEntry> {
        self.entries.get(row)
    }

    /// Iterate over all entries in row order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter()
    }

    /// Iterate over the tag text of every entry, in row order.
    pub fn tag_texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tags.as_str())
    }

    /// Look up an entry by its stable movie id.
    pub fn lookup_by_id(&self, movie_id: u64) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|e| e.movie_id == movie_id)
    }

    /// Look up an entry by exact title, case-insensitively.
    ///
    /// When several rows share the title, the first row in load order wins.
    /// Returns the row index alongside the entry.
    pub fn lookup_by_title_exact(&self, title: &str) -> Option<(usize, &CatalogueEntry)> {
        let needle = title.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.title.to_lowercase() == needle)
    }

    /// Count entries whose tag text mentions the given genre.
    ///
    /// Matching is a case-insensitive substring test over the tag blob,
    /// the same test the genre browsing surface uses.
    pub fn genre_count(&self, genre: &str) -> usize {
        let needle = genre.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.tags.to_lowercase().contains(&needle))
            .count()
    }

    /// Row indices of entries whose tag text mentions the given genre.
    pub fn rows_with_genre(&self, genre: &str) -> Vec<usize> {
        let needle = genre.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tags.to_lowercase().contains(&needle))
            .map(|(row, _)| row)
            .collect()
    }
}
