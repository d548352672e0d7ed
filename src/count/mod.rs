//! Observation counting into sparse group-by-term tables.
//!
//! [`TokenCounter`] folds a stream of [`Observation`]s into a
//! [`CountTable`]: how often each term occurred within each group, plus
//! the marginals downstream stages read (group totals for term frequency,
//! group frequencies for idf, term totals for vocabulary selection, and
//! per-term counts of distinct documents). Counting never fails; zero
//! observations produce an empty table rather than an error.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::corpus::Observation;
use crate::vocabulary::Vocabulary;

/// Decides whether a term is dropped before it reaches the counts.
///
/// Implemented by [`StopwordList`](crate::text::StopwordList) and by any
/// closure `Fn(&str) -> bool`.
pub trait StopwordPredicate {
    /// Returns true if `term` should be excluded from counting.
    fn is_stopword(&self, term: &str) -> bool;
}

impl<F> StopwordPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn is_stopword(&self, term: &str) -> bool {
        self(term)
    }
}

/// Counts observations into a [`CountTable`].
///
/// An observation whose term matches the stopword predicate is skipped
/// entirely; it contributes to no count and no total. A group whose every
/// observation is skipped does not appear in the table.
///
/// # Examples
///
/// ```
/// use discurso::corpus::Observation;
/// use discurso::count::TokenCounter;
///
/// let observations = vec![
///     Observation::new("d1", "Lincoln", "union"),
///     Observation::new("d1", "Lincoln", "union"),
///     Observation::new("d2", "Lincoln", "union"),
///     Observation::new("d3", "Grant", "army"),
/// ];
///
/// let table = TokenCounter::new().count(&observations);
/// assert_eq!(table.count("Lincoln", "union"), 3);
/// assert_eq!(table.group_total("Grant"), 1);
/// // "union" occurs in two documents, but only one group.
/// assert_eq!(table.document_frequency("union"), 2);
/// assert_eq!(table.group_frequency("union"), 1);
/// ```
///
/// With a stopword predicate:
///
/// ```
/// use discurso::corpus::Observation;
/// use discurso::count::TokenCounter;
/// use discurso::text::StopwordList;
///
/// let counter = TokenCounter::new().with_stopwords(StopwordList::english());
/// let table = counter.count(&[Observation::new("d1", "Lincoln", "the")]);
/// assert!(table.is_empty());
/// ```
#[derive(Default)]
pub struct TokenCounter {
    stopwords: Option<Box<dyn StopwordPredicate>>,
}

impl TokenCounter {
    /// Create a counter with no stopword filtering.
    #[must_use]
    pub fn new() -> Self {
        Self { stopwords: None }
    }

    /// Set the stopword predicate (builder pattern).
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: impl StopwordPredicate + 'static) -> Self {
        self.stopwords = Some(Box::new(stopwords));
        self
    }

    /// Count observations into a sparse table.
    ///
    /// An empty input slice yields an empty table.
    #[must_use]
    pub fn count(&self, observations: &[Observation]) -> CountTable {
        let mut table = CountTable::default();
        let mut seen_documents: HashSet<(&str, &str)> = HashSet::new();
        for observation in observations {
            if let Some(stopwords) = &self.stopwords {
                if stopwords.is_stopword(&observation.term) {
                    continue;
                }
            }
            let new_document = seen_documents.insert((
                observation.term.as_str(),
                observation.document_id.as_str(),
            ));
            table.record(&observation.group_key, &observation.term, new_document);
        }
        table
    }
}

impl fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCounter")
            .field("stopwords", &self.stopwords.is_some())
            .finish()
    }
}

/// Sparse group-by-term count table with cached marginals.
///
/// The per-term first-seen rank is retained as a deterministic tiebreak
/// for vocabulary selection. It depends on observation order, so equality
/// of two tables is not defined; compare counts and totals instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountTable {
    counts: HashMap<String, HashMap<String, u64>>,
    group_totals: HashMap<String, u64>,
    term_totals: HashMap<String, u64>,
    document_frequency: HashMap<String, usize>,
    group_frequency: HashMap<String, usize>,
    first_seen: HashMap<String, usize>,
    total: u64,
}

impl CountTable {
    fn record(&mut self, group: &str, term: &str, new_document: bool) {
        if !self.first_seen.contains_key(term) {
            let rank = self.first_seen.len();
            self.first_seen.insert(term.to_string(), rank);
        }
        if new_document {
            *self.document_frequency.entry(term.to_string()).or_insert(0) += 1;
        }
        let group_counts = self.counts.entry(group.to_string()).or_default();
        let cell = group_counts.entry(term.to_string()).or_insert(0);
        if *cell == 0 {
            *self.group_frequency.entry(term.to_string()).or_insert(0) += 1;
        }
        *cell += 1;
        *self.group_totals.entry(group.to_string()).or_insert(0) += 1;
        *self.term_totals.entry(term.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `term` within `group` (zero if either is absent).
    #[must_use]
    pub fn count(&self, group: &str, term: &str) -> u64 {
        self.counts
            .get(group)
            .and_then(|terms| terms.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Total observations counted for `group` (zero if absent).
    #[must_use]
    pub fn group_total(&self, group: &str) -> u64 {
        self.group_totals.get(group).copied().unwrap_or(0)
    }

    /// Total occurrences of `term` across all groups (zero if absent).
    #[must_use]
    pub fn term_total(&self, term: &str) -> u64 {
        self.term_totals.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct documents in which `term` occurs at least once.
    #[must_use]
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Number of groups in which `term` occurs at least once.
    #[must_use]
    pub fn group_frequency(&self, term: &str) -> usize {
        self.group_frequency.get(term).copied().unwrap_or(0)
    }

    /// Rank of `term` by order of first appearance, if counted.
    #[must_use]
    pub fn first_seen_rank(&self, term: &str) -> Option<usize> {
        self.first_seen.get(term).copied()
    }

    /// Group keys, lexically sorted.
    #[must_use]
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = self.group_totals.keys().map(String::as_str).collect();
        groups.sort_unstable();
        groups
    }

    /// Terms, lexically sorted.
    #[must_use]
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_totals.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Number of distinct groups.
    #[must_use]
    pub fn n_groups(&self) -> usize {
        self.group_totals.len()
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn n_terms(&self) -> usize {
        self.term_totals.len()
    }

    /// Grand total of all counted observations.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Returns true if the table holds no groups and no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group_totals.is_empty() && self.term_totals.is_empty()
    }

    /// Restrict the table to the terms of a vocabulary.
    ///
    /// Every group is kept, including groups whose entire count mass falls
    /// outside the vocabulary; their totals become zero. Term totals,
    /// document and group frequencies, and first-seen ranks carry over
    /// unchanged for the kept terms, since no group or document is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use discurso::corpus::Observation;
    /// use discurso::count::TokenCounter;
    /// use discurso::vocabulary::Vocabulary;
    ///
    /// let table = TokenCounter::new().count(&[
    ///     Observation::new("d1", "Lincoln", "union"),
    ///     Observation::new("d1", "Lincoln", "malice"),
    /// ]);
    /// let restricted = table.restrict_to(&Vocabulary::from_terms(vec!["union".into()]));
    ///
    /// assert_eq!(restricted.count("Lincoln", "union"), 1);
    /// assert_eq!(restricted.count("Lincoln", "malice"), 0);
    /// assert_eq!(restricted.group_total("Lincoln"), 1);
    /// ```
    #[must_use]
    pub fn restrict_to(&self, vocabulary: &Vocabulary) -> CountTable {
        let mut restricted = CountTable::default();
        for group in self.group_totals.keys() {
            let kept: HashMap<String, u64> = self
                .counts
                .get(group)
                .map(|terms| {
                    terms
                        .iter()
                        .filter(|(term, _)| vocabulary.contains(term))
                        .map(|(term, count)| (term.clone(), *count))
                        .collect()
                })
                .unwrap_or_default();
            let group_total: u64 = kept.values().sum();
            restricted.counts.insert(group.clone(), kept);
            restricted.group_totals.insert(group.clone(), group_total);
        }
        for (term, total) in &self.term_totals {
            if !vocabulary.contains(term) {
                continue;
            }
            restricted.term_totals.insert(term.clone(), *total);
            if let Some(df) = self.document_frequency.get(term) {
                restricted.document_frequency.insert(term.clone(), *df);
            }
            if let Some(gf) = self.group_frequency.get(term) {
                restricted.group_frequency.insert(term.clone(), *gf);
            }
            if let Some(rank) = self.first_seen.get(term) {
                restricted.first_seen.insert(term.clone(), *rank);
            }
        }
        restricted.total = restricted.group_totals.values().sum();
        restricted
    }
}

#[cfg(test)]
mod tests;
