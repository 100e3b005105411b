//! TF-IDF vectorizer fitted once per catalogue load.
//!
//! Weights follow the smoothed formulation `idf = ln((1 + n) / (1 + df)) + 1`
//! with raw term counts for TF, then L2 normalization per row. The
//! vocabulary is capped at a maximum term count; when the corpus has more
//! distinct terms than the cap, the highest corpus-frequency terms are
//! kept, frequency ties broken lexicographically. Columns are assigned in
//! lexicographic term order, so a given corpus and configuration always
//! produces bit-identical rows.
//!
//! # Examples
//!
//! ```
//! use marquee::vector::TfIdfVectorizer;
//!
//! let vectorizer = TfIdfVectorizer::new();
//! let space = vectorizer
//!     .fit(["action hero fight", "action hero battle", "romance love story"])
//!     .unwrap();
//!
//! assert_eq!(space.num_rows(), 3);
//! ```

use ahash::AHashMap;
use tracing::info;

use crate::analysis::TagAnalyzer;
use crate::error::{MarqueeError, Result};
use crate::vector::space::VectorSpace;
use crate::vector::sparse::SparseVector;

/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// TF-IDF vectorizer over tag text.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    analyzer: TagAnalyzer,
    max_features: usize,
}

impl TfIdfVectorizer {
    /// Create a vectorizer with the default analyzer and vocabulary cap.
    pub fn new() -> Self {
        TfIdfVectorizer {
            analyzer: TagAnalyzer::default(),
            max_features: DEFAULT_MAX_FEATURES,
        }
    }

    /// Replace the analysis pipeline.
    pub fn with_analyzer(mut self, analyzer: TagAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Set the vocabulary cap.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Fit the vectorizer over the given tag texts.
    ///
    /// Fails with an empty-corpus error when no document yields a single
    /// term after analysis.
    pub fn fit<I, S>(&self, documents: I) -> Result<VectorSpace>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let analyzed: Vec<Vec<String>> = documents
            .into_iter()
            .map(|doc| self.analyzer.terms(doc.as_ref()))
            .collect::<Result<_>>()?;

        let n_docs = analyzed.len();

        // Corpus-wide term counts and document frequencies.
        let mut corpus_counts: AHashMap<&str, u64> = AHashMap::new();
        let mut document_frequency: AHashMap<&str, u32> = AHashMap::new();
        for terms in &analyzed {
            for term in terms {
                *corpus_counts.entry(term.as_str()).or_insert(0) += 1;
            }
            let mut seen: Vec<&str> = terms.iter().map(|t| t.as_str()).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if corpus_counts.is_empty() {
            return Err(MarqueeError::empty_corpus(
                "no usable terms in any tag text",
            ));
        }

        // Cap the vocabulary at the highest corpus-frequency terms,
        // frequency ties broken lexicographically.
        let mut ranked: Vec<(&str, u64)> = corpus_counts.iter().map(|(&t, &c)| (t, c)).collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        // Columns are assigned in lexicographic term order.
        let mut selected: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
        selected.sort_unstable();

        let mut vocabulary: AHashMap<String, u32> = AHashMap::with_capacity(selected.len());
        let mut idf: Vec<f32> = Vec::with_capacity(selected.len());
        for (column, term) in selected.iter().enumerate() {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            let value = (((1 + n_docs) as f64) / ((1 + df) as f64)).ln() + 1.0;
            vocabulary.insert((*term).to_string(), column as u32);
            idf.push(value as f32);
        }

        let rows: Vec<SparseVector> = analyzed
            .iter()
            .map(|terms| {
                let mut counts: AHashMap<u32, f32> = AHashMap::new();
                for term in terms {
                    if let Some(&column) = vocabulary.get(term.as_str()) {
                        *counts.entry(column).or_insert(0.0) += 1.0;
                    }
                }
                let mut cols: Vec<u32> = counts.keys().copied().collect();
                cols.sort_unstable();
                let weights: Vec<f32> = cols
                    .iter()
                    .map(|&col| {
                        let count = counts.get(&col).copied().unwrap_or(0.0);
                        count * idf[col as usize]
                    })
                    .collect();
                let mut row = SparseVector::new(cols, weights);
                row.normalize();
                row
            })
            .collect();

        info!(
            documents = n_docs,
            vocabulary = vocabulary.len(),
            "tf-idf vector space fitted"
        );

        Ok(VectorSpace::new(vocabulary, idf, rows))
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_basic() {
        let vectorizer = TfIdfVectorizer::new();
        let space = vectorizer
            .fit(["action hero fight", "action hero battle", "romance love story"])
            .unwrap();

        assert_eq!(space.num_rows(), 3);
        // "action", "battle", "fight", "hero", "love", "romance", "story"
        assert_eq!(space.vocabulary_size(), 7);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let vectorizer = TfIdfVectorizer::new();
        let space = vectorizer
            .fit(["dream heist thriller", "space time drama"])
            .unwrap();

        for row in space.rows() {
            assert!((row.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_corpus_fails() {
        let vectorizer = TfIdfVectorizer::new();
        let err = vectorizer.fit(["", "the of and", "  "]).unwrap_err();
        assert!(matches!(err, MarqueeError::EmptyCorpus(_)));
    }

    #[test]
    fn test_no_documents_fails() {
        let vectorizer = TfIdfVectorizer::new();
        let docs: Vec<&str> = Vec::new();
        let err = vectorizer.fit(docs).unwrap_err();
        assert!(matches!(err, MarqueeError::EmptyCorpus(_)));
    }

    #[test]
    fn test_vocabulary_cap_keeps_most_frequent_terms() {
        let vectorizer = TfIdfVectorizer::new().with_max_features(2);
        let space = vectorizer
            .fit(["wizard wizard dragon", "wizard dragon castle", "castle moat"])
            .unwrap();

        assert_eq!(space.vocabulary_size(), 2);
        // wizard (3) and dragon/castle tie at 2; "castle" wins the tie
        // lexicographically.
        assert!(space.column_of("wizard").is_some());
        assert!(space.column_of("castle").is_some());
        assert!(space.column_of("dragon").is_none());
    }

    #[test]
    fn test_columns_follow_lexicographic_order() {
        let vectorizer = TfIdfVectorizer::new();
        let space = vectorizer.fit(["zebra apple mango"]).unwrap();

        assert_eq!(space.column_of("apple"), Some(0));
        assert_eq!(space.column_of("mango"), Some(1));
        assert_eq!(space.column_of("zebra"), Some(2));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = ["action hero fight", "action hero battle", "romance love story"];
        let vectorizer = TfIdfVectorizer::new();
        let a = vectorizer.fit(docs).unwrap();
        let b = vectorizer.fit(docs).unwrap();

        assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn test_document_outside_vocabulary_gets_empty_row() {
        let vectorizer = TfIdfVectorizer::new().with_max_features(1);
        let space = vectorizer.fit(["common common common", "rare"]).unwrap();

        assert!(space.row(1).unwrap().is_empty());
    }
}
