//! In-process support for the hybrid chat collaborator.
//!
//! The conversation itself runs against an external language model, out of
//! scope here. What the core owns is everything around that call that must
//! not be trusted to the model: building the catalogue context that goes
//! into the prompt (see [`context`]), extracting a structured reply from
//! whatever text comes back, and revalidating every movie the model claims
//! is in the catalogue against the catalogue's own exact-title lookup.
//! Fabricated titles are dropped, not guessed at.

pub mod context;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;

/// A movie the model claims comes from the catalogue. Untrusted until
/// revalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseMovie {
    /// Movie title as stated by the model.
    pub title: String,
    /// Movie id as stated by the model; rewritten during revalidation.
    #[serde(default)]
    pub movie_id: u64,
    /// The model's one-line justification.
    #[serde(default)]
    pub reason: String,
}

/// A movie recommended from the model's general knowledge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalMovie {
    /// Movie title.
    pub title: String,
    /// Release year, when the model supplied one.
    #[serde(default)]
    pub year: Option<i32>,
    /// The model's one-line justification.
    #[serde(default)]
    pub reason: String,
}

/// Structured reply payload from the chat collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatReply {
    /// Conversational message shown to the user.
    #[serde(default)]
    pub message: String,
    /// Recommendations the model attributes to the catalogue.
    #[serde(default)]
    pub database_movies: Vec<DatabaseMovie>,
    /// Recommendations from outside the catalogue.
    #[serde(default)]
    pub external_movies: Vec<ExternalMovie>,
}

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("hardcoded pattern"));

/// Extract a structured reply from raw model output.
///
/// Finds the outermost brace-delimited span and tries to deserialize it.
/// Anything that fails to parse degrades to a free-text reply carrying the
/// whole output as the message, with empty recommendation lists.
pub fn parse_reply(text: &str) -> ChatReply {
    if let Some(found) = JSON_OBJECT.find(text)
        && let Ok(reply) = serde_json::from_str::<ChatReply>(found.as_str())
    {
        return reply;
    }
    ChatReply {
        message: text.to_string(),
        ..ChatReply::default()
    }
}

impl ChatReply {
    /// Revalidate database recommendations against the catalogue.
    ///
    /// Each claimed entry is matched by exact case-insensitive title;
    /// matches are rewritten with the catalogue's canonical title and id,
    /// everything else is dropped. External recommendations pass through
    /// untouched.
    pub fn revalidated(mut self, catalogue: &Catalogue) -> ChatReply {
        self.database_movies = self
            .database_movies
            .into_iter()
            .filter_map(|movie| {
                catalogue
                    .lookup_by_title_exact(&movie.title)
                    .map(|(_, entry)| DatabaseMovie {
                        title: entry.title.clone(),
                        movie_id: entry.movie_id,
                        reason: movie.reason,
                    })
            })
            .collect();
        self
    }
}

/// Parse raw model output and revalidate it in one step.
pub fn parse_validated(text: &str, catalogue: &Catalogue) -> ChatReply {
    parse_reply(text).revalidated(catalogue)
}
