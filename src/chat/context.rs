//! Catalogue context for the chat prompt.
//!
//! Before the external model is asked anything, the hosting layer gives it
//! a plain-text digest of what the catalogue can actually offer for the
//! user's query, so its "database" recommendations stay anchored to real
//! titles. Detail lines are fetched through the metadata collaborator, so
//! the builder works offline with a placeholder provider.

use ahash::AHashSet;

use crate::catalogue::{Catalogue, CatalogueEntry};
use crate::external::MetadataProvider;

/// Maximum catalogue entries quoted in the prompt context.
pub const DEFAULT_CONTEXT_LIMIT: usize = 15;

/// Genre keywords recognized in free-form chat queries.
pub const GENRE_KEYWORDS: &[&str] = &[
    "action",
    "comedy",
    "drama",
    "horror",
    "thriller",
    "romance",
    "sci-fi",
    "animation",
    "fantasy",
    "adventure",
];

/// Search the catalogue for chat context.
///
/// Title matches come first, then tag matches, both in row order and
/// case-insensitive; duplicates (a row matching both ways) are collapsed
/// onto their first occurrence by movie id, and the result is truncated
/// to `limit`.
pub fn search_catalogue<'a>(
    catalogue: &'a Catalogue,
    query: &str,
    limit: usize,
) -> Vec<(usize, &'a CatalogueEntry)> {
    let needle = query.to_lowercase();
    let mut seen: AHashSet<u64> = AHashSet::new();
    let mut results: Vec<(usize, &CatalogueEntry)> = Vec::new();

    for (row, entry) in catalogue.iter().enumerate() {
        if results.len() >= limit {
            break;
        }
        if entry.title.to_lowercase().contains(&needle) && seen.insert(entry.movie_id) {
            results.push((row, entry));
        }
    }
    for (row, entry) in catalogue.iter().enumerate() {
        if results.len() >= limit {
            break;
        }
        if entry.tags.to_lowercase().contains(&needle) && seen.insert(entry.movie_id) {
            results.push((row, entry));
        }
    }

    results
}

/// Build the prompt context string for a chat query.
///
/// Layout: a catalogue-size line; then either the direct matches for the
/// query (with id, year, genres, and rating per line) or, when nothing
/// matches directly, the matches for the first genre keyword found in the
/// query; then a closing instruction line.
pub fn build_context(
    catalogue: &Catalogue,
    query: &str,
    provider: &dyn MetadataProvider,
) -> String {
    let mut context = format!("Database Info: {} movies available.\n\n", catalogue.len());

    let matches = search_catalogue(catalogue, query, DEFAULT_CONTEXT_LIMIT);
    if !matches.is_empty() {
        context.push_str("Movies available in our database (USE EXACT TITLES):\n");
        for (_, entry) in &matches {
            let details = provider.fetch_details(entry.movie_id);
            let genres = if details.genres.is_empty() {
                "N/A".to_string()
            } else {
                details.genres.join(", ")
            };
            context.push_str(&format!(
                "- {} (ID: {}, {}) | Genres: {} | Rating: {:.1}/10\n",
                entry.title,
                entry.movie_id,
                details.release_year(),
                genres,
                details.rating
            ));
        }
    } else if let Some(genre) = GENRE_KEYWORDS
        .iter()
        .find(|kw| query.to_lowercase().contains(*kw))
    {
        let genre_matches = search_catalogue(catalogue, genre, DEFAULT_CONTEXT_LIMIT);
        if !genre_matches.is_empty() {
            context.push_str(&format!("\n{} movies in database:\n", capitalize(genre)));
            for (_, entry) in &genre_matches {
                let details = provider.fetch_details(entry.movie_id);
                context.push_str(&format!(
                    "- {} (ID: {}, {}) | Rating: {:.1}/10\n",
                    entry.title,
                    entry.movie_id,
                    details.release_year(),
                    details.rating
                ));
            }
        }
    }

    context.push_str("\nNote: Recommend 10-15 movies total. Prioritize database movies.");
    context
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::CatalogueEntry;
    use crate::external::PlaceholderProvider;

    fn entry(movie_id: u64, title: &str, tags: &str) -> CatalogueEntry {
        CatalogueEntry {
            movie_id,
            title: title.to_string(),
            tags: tags.to_string(),
        }
    }

    fn sample() -> Catalogue {
        Catalogue::new(vec![
            entry(1, "Alien", "horror space crew"),
            entry(2, "Aliens", "action horror space marines"),
            entry(3, "Heat", "crime heist los angeles"),
            entry(4, "Space Jam", "comedy basketball alien"),
        ])
    }

    #[test]
    fn test_search_title_matches_precede_tag_matches() {
        let catalogue = sample();
        let results = search_catalogue(&catalogue, "alien", 10);

        let ids: Vec<u64> = results.iter().map(|(_, e)| e.movie_id).collect();
        // Titles "Alien"/"Aliens" first, then the tag match "Space Jam".
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_search_deduplicates_by_movie_id() {
        let catalogue = Catalogue::new(vec![entry(1, "Alien", "alien horror")]);
        let results = search_catalogue(&catalogue, "alien", 10);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_respects_limit() {
        let catalogue = sample();
        let results = search_catalogue(&catalogue, "a", 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_context_with_direct_matches() {
        let catalogue = sample();
        let context = build_context(&catalogue, "heat", &PlaceholderProvider::new());

        assert!(context.starts_with("Database Info: 4 movies available."));
        assert!(context.contains("USE EXACT TITLES"));
        assert!(context.contains("- Heat (ID: 3, N/A)"));
        assert!(context.ends_with("Prioritize database movies."));
    }

    #[test]
    fn test_context_falls_back_to_genre_keyword() {
        let catalogue = sample();
        let context = build_context(
            &catalogue,
            "something scary, maybe horror tonight",
            &PlaceholderProvider::new(),
        );

        assert!(context.contains("Horror movies in database:"));
        assert!(context.contains("- Alien (ID: 1"));
    }

    #[test]
    fn test_context_without_any_match_is_just_frame() {
        let catalogue = sample();
        let context = build_context(&catalogue, "zzzz", &PlaceholderProvider::new());

        assert!(!context.contains("USE EXACT TITLES"));
        assert!(context.contains("Database Info: 4 movies available."));
        assert!(context.ends_with("Prioritize database movies."));
    }
}
