//! The fitted vector space.

use ahash::AHashMap;

use crate::vector::sparse::SparseVector;

/// The immutable result of fitting the vectorizer over a catalogue.
///
/// Holds one L2-normalized sparse row per catalogue entry plus the fitted
/// vocabulary (term to column) and the per-term IDF statistic. Row count
/// always equals the catalogue length it was fitted from; the space is
/// never updated incrementally.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: AHashMap<String, u32>,
    idf: Vec<f32>,
    rows: Vec<SparseVector>,
}

impl VectorSpace {
    pub(crate) fn new(
        vocabulary: AHashMap<String, u32>,
        idf: Vec<f32>,
        rows: Vec<SparseVector>,
    ) -> Self {
        VectorSpace {
            vocabulary,
            idf,
            rows,
        }
    }

    /// Number of document rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the row vector at the given index.
    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    /// All rows, in catalogue order.
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    /// Column index of a fitted term, if present.
    pub fn column_of(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    /// IDF value for the given column.
    pub fn idf_of(&self, column: u32) -> Option<f32> {
        self.idf.get(column as usize).copied()
    }
}
