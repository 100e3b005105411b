//! Contracts for the external metadata/poster collaborator.
//!
//! The recommendation core never performs network I/O. Enrichment beyond
//! title, id, and score (ratings, posters, cast, trailers) comes from an
//! external movie-database service that implementations of
//! [`MetadataProvider`] wrap. The contract is degrade-to-default: a
//! provider must absorb transport failures and hand back
//! [`MovieDetails::default`] or [`PLACEHOLDER_POSTER_URL`] instead of
//! propagating an error into the core's callers. Retries and timeouts are
//! the provider's business.
//!
//! [`PlaceholderProvider`] is the degenerate implementation: it always
//! returns the defaults, which makes it the provider of choice for tests
//! and offline use.

use serde::{Deserialize, Serialize};

/// Poster URL used when the collaborator has nothing better.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// A video attached to a movie (trailer, teaser, clip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Video kind as reported by the metadata service, e.g. "Trailer".
    #[serde(rename = "type")]
    pub kind: String,
    /// Hosting-site key for the video.
    pub key: String,
}

/// Detailed movie metadata from the external service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    /// Average rating on a 0-10 scale.
    pub rating: f64,
    /// Number of votes behind the rating.
    pub vote_count: u64,
    /// Synopsis text.
    pub overview: String,
    /// Runtime in minutes.
    pub runtime: u32,
    /// Release date, or "Unknown".
    pub release_date: String,
    /// Genre names.
    pub genres: Vec<String>,
    /// Top-billed cast names.
    pub cast: Vec<String>,
    /// Attached videos.
    pub videos: Vec<VideoRef>,
}

impl Default for MovieDetails {
    /// The documented degraded payload served when a fetch fails.
    fn default() -> Self {
        MovieDetails {
            rating: 0.0,
            vote_count: 0,
            overview: "No description available.".to_string(),
            runtime: 0,
            release_date: "Unknown".to_string(),
            genres: Vec::new(),
            cast: Vec::new(),
            videos: Vec::new(),
        }
    }
}

impl MovieDetails {
    /// Release year for display, or "N/A" when the date is unknown.
    pub fn release_year(&self) -> &str {
        if self.release_date == "Unknown" {
            return "N/A";
        }
        self.release_date.get(..4).unwrap_or("N/A")
    }
}

/// The metadata/poster collaborator contract.
///
/// Implementations must never fail: any upstream error degrades to the
/// default payloads.
pub trait MetadataProvider: Send + Sync {
    /// Fetch detailed metadata for a movie id.
    fn fetch_details(&self, movie_id: u64) -> MovieDetails;

    /// Fetch a poster URL for a movie id.
    fn fetch_poster(&self, movie_id: u64) -> String;
}

/// A provider that always returns the degraded defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

impl PlaceholderProvider {
    /// Create a new placeholder provider.
    pub fn new() -> Self {
        PlaceholderProvider
    }
}

impl MetadataProvider for PlaceholderProvider {
    fn fetch_details(&self, _movie_id: u64) -> MovieDetails {
        MovieDetails::default()
    }

    fn fetch_poster(&self, _movie_id: u64) -> String {
        PLACEHOLDER_POSTER_URL.to_string()
    }
}
