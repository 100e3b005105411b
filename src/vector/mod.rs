//! Sparse TF-IDF vector space over catalogue tag text.
//!
//! The vectorizer is fitted exactly once per catalogue load and the
//! resulting [`VectorSpace`] is immutable: one L2-normalized sparse row per
//! catalogue entry, plus the fitted vocabulary and per-term IDF weights.
//! Rows being pre-normalized is what lets the similarity engine reduce
//! cosine similarity to a sparse dot product.

pub mod space;
pub mod sparse;
pub mod tfidf;

pub use space::VectorSpace;
pub use sparse::SparseVector;
pub use tfidf::{DEFAULT_MAX_FEATURES, TfIdfVectorizer};
