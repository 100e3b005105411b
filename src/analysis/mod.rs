//! Tag-text analysis pipeline.
//!
//! Movie tag blobs are free text (concatenated genre, keyword, and overview
//! tokens). Before vectorization they pass through a small analysis
//! pipeline: tokenization on Unicode word boundaries, lowercasing, and
//! stop-word removal. The pieces are trait-based so a catalogue with
//! different tag conventions can swap any stage.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::TagAnalyzer;
pub use token::{Token, TokenStream};
pub use token_filter::{LowercaseFilter, StopFilter, TokenFilter};
pub use tokenizer::{Tokenizer, UnicodeWordTokenizer};
