//! Pre-compiled word-boundary matchers.
//!
//! Every keyword and lexicon entry is compiled into a `\bterm\b` regex once,
//! at engine construction, and reused for every request.

use regex::{Match, Regex};

/// A single term matched on word boundaries
#[derive(Debug, Clone)]
pub struct WordMatcher {
    term: &'static str,
    regex: Regex,
}

impl WordMatcher {
    pub fn new(term: &'static str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(term)))?;
        Ok(Self { term, regex })
    }

    pub fn term(&self) -> &'static str {
        self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// First occurrence of the term, if any
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.regex.find(text)
    }

    /// Number of non-overlapping occurrences
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// An ordered list of matchers built from a static word list
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<WordMatcher>,
}

impl MatcherSet {
    pub fn new(terms: &[&'static str]) -> Result<Self, regex::Error> {
        let matchers = terms
            .iter()
            .copied()
            .map(WordMatcher::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordMatcher> {
        self.matchers.iter()
    }

    /// Whether any term occurs in the text
    pub fn any_match(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(text))
    }

    /// Number of distinct terms present in the text
    pub fn present_count(&self, text: &str) -> usize {
        self.matchers.iter().filter(|m| m.is_match(text)).count()
    }

    /// Total occurrences of all terms in the text
    pub fn total_count(&self, text: &str) -> usize {
        self.matchers.iter().map(|m| m.count(text)).sum()
    }

    /// Terms present in the text, in list order
    pub fn matched_terms<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.matchers
            .iter()
            .filter(move |m| m.is_match(text))
            .map(WordMatcher::term)
    }
}
