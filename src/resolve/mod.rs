//! Free-text title resolution.
//!
//! Maps possibly partial, mistyped, or case-mismatched user input to
//! exactly one catalogue row, in strict precedence order:
//!
//! 1. exact case-insensitive full-title match (first row in load order
//!    when several entries share the title);
//! 2. case-insensitive substring match, the candidate with the highest
//!    similarity ratio winning, ties broken by row order;
//! 3. otherwise a title-not-found error. Callers must not guess.
//!
//! Resolution is a pure function over the catalogue; it holds no state and
//! never returns an ambiguous result.
//!
//! # Examples
//!
//! ```
//! use marquee::catalogue::{Catalogue, CatalogueEntry};
//! use marquee::resolve::resolve_title;
//!
//! let catalogue = Catalogue::new(vec![CatalogueEntry {
//!     movie_id: 1,
//!     title: "Inception".to_string(),
//!     tags: "dream heist".to_string(),
//! }]);
//!
//! assert_eq!(resolve_title("INCEPTION", &catalogue).unwrap(), 0);
//! assert!(resolve_title("xyzzynotamovie", &catalogue).is_err());
//! ```

pub mod ratio;

use tracing::debug;

use crate::catalogue::Catalogue;
use crate::error::{MarqueeError, Result};
use crate::resolve::ratio::similarity_ratio;

/// Resolve free-form user text to a single catalogue row index.
pub fn resolve_title(user_text: &str, catalogue: &Catalogue) -> Result<usize> {
    let needle = user_text.to_lowercase();
    if needle.trim().is_empty() {
        return Err(MarqueeError::title_not_found(user_text));
    }

    // Exact full-title match; first row wins on duplicate titles.
    for (row, entry) in catalogue.iter().enumerate() {
        if entry.title.to_lowercase() == needle {
            return Ok(row);
        }
    }

    // Substring candidates, scored by similarity ratio against the full
    // title. Strictly-greater comparison keeps the earliest row on ties.
    let mut best: Option<(usize, f64)> = None;
    for (row, entry) in catalogue.iter().enumerate() {
        let title = entry.title.to_lowercase();
        if title.contains(&needle) {
            let score = similarity_ratio(&needle, &title);
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((row, score));
            }
        }
    }

    if let Some((row, score)) = best {
        debug!(query = user_text, row, score, "substring title match");
        return Ok(row);
    }

    Err(MarqueeError::title_not_found(user_text))
}
