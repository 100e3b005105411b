//! Command implementations for the Marquee CLI.

use std::time::Instant;

use serde::Serialize;

use crate::catalogue::{ALL_GENRES, Catalogue};
use crate::chat::context::search_catalogue;
use crate::cli::args::{Command, MarqueeArgs, RecommendArgs, ResolveArgs, SearchArgs};
use crate::cli::output::output_result;
use crate::error::{MarqueeError, Result};
use crate::recommend::{RecommendOutcome, Recommender};
use crate::resolve::resolve_title;
use crate::vector::TfIdfVectorizer;

/// Execute a CLI command.
pub fn execute_command(args: MarqueeArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("Loading catalogue from: {}", args.catalogue.display());
    }
    let catalogue = Catalogue::load(&args.catalogue)?;

    match &args.command {
        Command::Recommend(recommend_args) => recommend(recommend_args, catalogue, &args),
        Command::Resolve(resolve_args) => resolve(resolve_args, catalogue, &args),
        Command::Search(search_args) => search(search_args, catalogue, &args),
        Command::Stats => stats(catalogue, &args),
    }
}

/// Recommend movies similar to the given title.
fn recommend(cmd: &RecommendArgs, catalogue: Catalogue, cli_args: &MarqueeArgs) -> Result<()> {
    let start = Instant::now();
    let recommender = Recommender::fit(catalogue)?;
    let outcome = recommender.recommend(&cmd.title, cmd.top_n)?;
    let elapsed = start.elapsed();

    let human = match &outcome {
        RecommendOutcome::NotFound { query } => {
            format!("No movie found matching '{query}'. Try another title.")
        }
        RecommendOutcome::Found { results } => {
            let mut lines = vec![format!("Top {} recommendations:", results.len())];
            for (rank, rec) in results.iter().enumerate() {
                lines.push(format!(
                    "{:2}. {} (id {}) score {:.4}",
                    rank + 1,
                    rec.title,
                    rec.movie_id,
                    rec.score
                ));
            }
            lines.join("\n")
        }
    };

    output_result(&human, &outcome, cli_args)?;

    if cli_args.verbosity() > 1 {
        println!("Completed in {elapsed:.2?}");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ResolvedRow {
    row: usize,
    movie_id: u64,
    title: String,
}

/// Resolve free text to a catalogue entry.
fn resolve(cmd: &ResolveArgs, catalogue: Catalogue, cli_args: &MarqueeArgs) -> Result<()> {
    match resolve_title(&cmd.title, &catalogue) {
        Ok(row) => {
            let entry = catalogue.get(row).ok_or_else(|| {
                MarqueeError::invalid_operation(format!("resolved row {row} has no entry"))
            })?;
            let resolved = ResolvedRow {
                row,
                movie_id: entry.movie_id,
                title: entry.title.clone(),
            };
            let human = format!("'{}' -> {} (id {})", cmd.title, resolved.title, resolved.movie_id);
            output_result(&human, &resolved, cli_args)
        }
        Err(MarqueeError::TitleNotFound(query)) => {
            let human = format!("No movie found matching '{query}'.");
            output_result(&human, &Option::<ResolvedRow>::None, cli_args)
        }
        Err(e) => Err(e),
    }
}

#[derive(Debug, Serialize)]
struct SearchHit {
    row: usize,
    movie_id: u64,
    title: String,
}

/// Search titles and tag text.
fn search(cmd: &SearchArgs, catalogue: Catalogue, cli_args: &MarqueeArgs) -> Result<()> {
    let hits: Vec<SearchHit> = search_catalogue(&catalogue, &cmd.query, cmd.limit)
        .into_iter()
        .map(|(row, entry)| SearchHit {
            row,
            movie_id: entry.movie_id,
            title: entry.title.clone(),
        })
        .collect();

    let human = if hits.is_empty() {
        format!("No matches for '{}'.", cmd.query)
    } else {
        let mut lines = vec![format!("Found {} result(s):", hits.len())];
        for hit in &hits {
            lines.push(format!("- {} (id {})", hit.title, hit.movie_id));
        }
        lines.join("\n")
    };

    output_result(&human, &hits, cli_args)
}

#[derive(Debug, Serialize)]
struct GenreCount {
    genre: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    entries: usize,
    vocabulary: usize,
    genres: Vec<GenreCount>,
}

/// Show catalogue statistics.
fn stats(catalogue: Catalogue, cli_args: &MarqueeArgs) -> Result<()> {
    let space = TfIdfVectorizer::new().fit(catalogue.tag_texts())?;

    let genres: Vec<GenreCount> = ALL_GENRES
        .iter()
        .map(|genre| GenreCount {
            genre: (*genre).to_string(),
            count: catalogue.genre_count(genre),
        })
        .collect();

    let report = StatsReport {
        entries: catalogue.len(),
        vocabulary: space.vocabulary_size(),
        genres,
    };

    let mut lines = vec![
        format!("Entries:    {}", report.entries),
        format!("Vocabulary: {}", report.vocabulary),
        "Genres:".to_string(),
    ];
    for genre_count in &report.genres {
        lines.push(format!("  {:10} {}", genre_count.genre, genre_count.count));
    }

    output_result(&lines.join("\n"), &report, cli_args)
}
