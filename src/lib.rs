//! # Marquee
//!
//! A content-based movie recommendation engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - TF-IDF vectorization of catalogue tag text, fitted once per load
//! - On-demand cosine similarity (no precomputed pairwise matrix)
//! - Fuzzy title resolution (exact, substring, similarity-ratio)
//! - Bounded caching of per-movie rankings
//! - Typed contracts for the metadata and chat collaborators

pub mod analysis;
pub mod catalogue;
pub mod chat;
pub mod cli;
pub mod error;
pub mod external;
pub mod recommend;
pub mod resolve;
pub mod similarity;
pub mod vector;

pub use catalogue::{Catalogue, CatalogueEntry};
pub use recommend::{RecommendOutcome, Recommendation, Recommender};
pub use resolve::resolve_title;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
