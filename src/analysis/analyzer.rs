//! Analyzer pipeline combining a tokenizer with a filter chain.
//!
//! [`TagAnalyzer`] is the single entry point the vectorizer uses: raw tag
//! text in, filtered terms out. The default pipeline is Unicode word
//! tokenization, lowercasing, then English stop-word removal, matching how
//! the catalogue's tag blobs are produced.
//!
//! # Examples
//!
//! ```
//! use marquee::analysis::analyzer::TagAnalyzer;
//!
//! let analyzer = TagAnalyzer::default();
//! let terms = analyzer.terms("The Quick Heist").unwrap();
//!
//! assert_eq!(terms, vec!["quick", "heist"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, TokenFilter};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct TagAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl TagAnalyzer {
    /// Create an analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        TagAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter to the chain. Filters run in insertion order.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Run the full pipeline on the given text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut stream = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream)
    }

    /// Analyze and collect just the term strings, in stream order.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Default for TagAnalyzer {
    /// The standard tag pipeline: Unicode words, lowercased, stop-filtered.
    fn default() -> Self {
        TagAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
    }
}

impl std::fmt::Debug for TagAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filter_names: Vec<&str> = self.filters.iter().map(|fl| fl.name()).collect();
        f.debug_struct("TagAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filter_names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline() {
        let analyzer = TagAnalyzer::default();
        let terms = analyzer.terms("The Action Hero and the Fight").unwrap();
        assert_eq!(terms, vec!["action", "hero", "fight"]);
    }

    #[test]
    fn test_filters_run_in_order() {
        // Stop filtering before lowercasing must not remove capitalized words.
        let analyzer = TagAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the"])))
            .add_filter(Arc::new(LowercaseFilter::new()));
        let terms = analyzer.terms("The thing").unwrap();
        assert_eq!(terms, vec!["the", "thing"]);
    }

    #[test]
    fn test_empty_text_yields_no_terms() {
        let analyzer = TagAnalyzer::default();
        assert!(analyzer.terms("").unwrap().is_empty());
        assert!(analyzer.terms("of the and").unwrap().is_empty());
    }
}
