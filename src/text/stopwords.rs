//! Stop word lists for observation filtering.
//!
//! Stop words are common words ("the", "of", "and") that dominate raw
//! counts without distinguishing anyone's vocabulary. The counting stage
//! accepts any [`StopwordPredicate`](crate::count::StopwordPredicate);
//! [`StopwordList`] is the set-backed implementation for callers who have
//! a word list rather than a rule.

use std::collections::HashSet;

use crate::count::StopwordPredicate;

/// Common English function words.
///
/// A compact list covering articles, conjunctions, prepositions, pronouns,
/// and auxiliary verbs; enough to keep "the" and "of" from crowding every
/// top-terms table. Callers with other languages or stricter needs supply
/// their own list.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "may", "me", "might", "more", "most", "must", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "upon", "us", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your", "yours",
];

/// Case-insensitive stop word list backed by a `HashSet`.
///
/// # Examples
///
/// ```
/// use discurso::text::stopwords::StopwordList;
///
/// let list = StopwordList::english();
/// assert!(list.is_stopword("The"));
/// assert!(!list.is_stopword("country"));
///
/// let custom = StopwordList::new(["applause", "laughter"]);
/// assert!(custom.is_stopword("applause"));
/// ```
#[derive(Debug, Clone)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// Create a list from custom stop words (stored lowercase, matched
    /// case-insensitively).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Create a list with the bundled English function words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Whether `term` is on the list (case-insensitive).
    #[must_use]
    pub fn is_stopword(&self, term: &str) -> bool {
        if self.words.contains(term) {
            return true;
        }
        self.words.contains(&term.to_lowercase())
    }

    /// Number of words on the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordPredicate for StopwordList {
    fn is_stopword(&self, term: &str) -> bool {
        StopwordList::is_stopword(self, term)
    }
}
