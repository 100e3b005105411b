//! Recommendation façade.
//!
//! Orchestrates resolution, similarity ranking, and enrichment behind one
//! call: [`Recommender::recommend`]. A title that resolves to nothing is a
//! structured [`RecommendOutcome::NotFound`], never an error the caller
//! has to untangle from real failures; the user-facing layer decides how
//! to message it.
//!
//! # Examples
//!
//! ```
//! use marquee::catalogue::{Catalogue, CatalogueEntry};
//! use marquee::recommend::Recommender;
//!
//! let catalogue = Catalogue::new(vec![
//!     CatalogueEntry { movie_id: 1, title: "A".into(), tags: "action hero fight".into() },
//!     CatalogueEntry { movie_id: 2, title: "B".into(), tags: "action hero battle".into() },
//!     CatalogueEntry { movie_id: 3, title: "C".into(), tags: "romance love story".into() },
//! ]);
//!
//! let recommender = Recommender::fit(catalogue).unwrap();
//! let outcome = recommender.recommend("A", 2).unwrap();
//! assert_eq!(outcome.results()[0].movie_id, 2);
//! ```

pub mod cache;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::error::{MarqueeError, Result};
use crate::recommend::cache::{DEFAULT_CACHE_CAPACITY, RankingCache};
use crate::resolve::resolve_title;
use crate::similarity::{CosineEngine, ScoredHit, SimilarityEngine};
use crate::vector::{TfIdfVectorizer, VectorSpace};

/// Default number of recommendations per request.
pub const DEFAULT_TOP_N: usize = 12;

/// One recommended movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display title from the catalogue.
    pub title: String,
    /// Stable movie id from the catalogue.
    pub movie_id: u64,
    /// Cosine similarity to the queried movie, in [0, 1].
    pub score: f32,
}

/// The result of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecommendOutcome {
    /// The query resolved and produced a ranked list.
    Found {
        /// Ranked recommendations, best first.
        results: Vec<Recommendation>,
    },
    /// The query matched no catalogue title.
    NotFound {
        /// The original user text, for the caller's error message.
        query: String,
    },
}

impl RecommendOutcome {
    /// Check whether the query resolved.
    pub fn is_found(&self) -> bool {
        matches!(self, RecommendOutcome::Found { .. })
    }

    /// The ranked results; empty for a not-found outcome.
    pub fn results(&self) -> &[Recommendation] {
        match self {
            RecommendOutcome::Found { results } => results,
            RecommendOutcome::NotFound { .. } => &[],
        }
    }
}

/// The externally visible recommendation service.
///
/// Holds shared read-only references to the catalogue and fitted vector
/// space, so clones and concurrent callers are cheap and lock-free apart
/// from the bounded ranking cache.
pub struct Recommender {
    catalogue: Arc<Catalogue>,
    space: Arc<VectorSpace>,
    engine: Arc<dyn SimilarityEngine>,
    cache: RankingCache,
}

impl Recommender {
    /// Build a recommender from an already-fitted vector space.
    ///
    /// Fails when the space's row count does not match the catalogue.
    pub fn new(catalogue: Arc<Catalogue>, space: Arc<VectorSpace>) -> Result<Self> {
        if catalogue.len() != space.num_rows() {
            return Err(MarqueeError::invalid_operation(format!(
                "vector space has {} rows for a catalogue of {} entries",
                space.num_rows(),
                catalogue.len()
            )));
        }
        Ok(Recommender {
            catalogue,
            space,
            engine: Arc::new(CosineEngine::new()),
            cache: RankingCache::new(DEFAULT_CACHE_CAPACITY),
        })
    }

    /// Fit a vector space over the catalogue's tag text and build a
    /// recommender on top of it.
    pub fn fit(catalogue: Catalogue) -> Result<Self> {
        let space = TfIdfVectorizer::new().fit(catalogue.tag_texts())?;
        Self::new(Arc::new(catalogue), Arc::new(space))
    }

    /// Replace the similarity engine.
    pub fn with_engine(mut self, engine: Arc<dyn SimilarityEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Resize the ranking cache. Zero disables caching.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = RankingCache::new(capacity);
        self
    }

    /// The catalogue this recommender serves.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The fitted vector space.
    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    /// Recommend up to `top_n` movies similar to the given title text.
    ///
    /// The queried movie never appears in its own results. Output is
    /// sorted by descending score, ties broken by ascending row index,
    /// and its length never exceeds `top_n`.
    pub fn recommend(&self, title_text: &str, top_n: usize) -> Result<RecommendOutcome> {
        let row = match resolve_title(title_text, &self.catalogue) {
            Ok(row) => row,
            Err(MarqueeError::TitleNotFound(_)) => {
                return Ok(RecommendOutcome::NotFound {
                    query: title_text.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let ranked = self.ranked(row)?;
        let results = ranked
            .iter()
            .take(top_n)
            .map(|hit| self.enrich(hit))
            .collect::<Result<Vec<_>>>()?;

        Ok(RecommendOutcome::Found { results })
    }

    /// Recommend with the default result count.
    pub fn recommend_default(&self, title_text: &str) -> Result<RecommendOutcome> {
        self.recommend(title_text, DEFAULT_TOP_N)
    }

    fn ranked(&self, row: usize) -> Result<Arc<Vec<ScoredHit>>> {
        if let Some(cached) = self.cache.get(row) {
            debug!(row, "ranking cache hit");
            return Ok(cached);
        }
        let hits = Arc::new(self.engine.similarity_of(row, &self.space)?);
        self.cache.insert(row, Arc::clone(&hits));
        Ok(hits)
    }

    fn enrich(&self, hit: &ScoredHit) -> Result<Recommendation> {
        let entry = self.catalogue.get(hit.row).ok_or_else(|| {
            MarqueeError::invalid_operation(format!("ranked row {} has no catalogue entry", hit.row))
        })?;
        Ok(Recommendation {
            title: entry.title.clone(),
            movie_id: entry.movie_id,
            score: hit.score,
        })
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("entries", &self.catalogue.len())
            .field("vocabulary", &self.space.vocabulary_size())
            .field("cache", &self.cache)
            .finish()
    }
}
