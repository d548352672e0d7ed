//! Vocabulary selection: the top terms of a corpus by total count.
//!
//! Analyses over the full term set are dominated by noise from rare
//! words, so the pipeline restricts itself to a vocabulary of the most
//! frequent terms. [`VocabularySelector`] picks them from a
//! [`CountTable`]; [`Vocabulary`] holds the result in rank order with an
//! index for membership tests.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::count::CountTable;

const DEFAULT_MAX_TERMS: usize = 200;

/// Selects the top-K terms of a count table by total count.
///
/// Ties in total count are broken by first appearance in the observation
/// stream, so selection is deterministic for a given input order.
///
/// # Examples
///
/// ```
/// use discurso::corpus::Observation;
/// use discurso::count::TokenCounter;
/// use discurso::vocabulary::VocabularySelector;
///
/// let table = TokenCounter::new().count(&[
///     Observation::new("d1", "Lincoln", "union"),
///     Observation::new("d1", "Lincoln", "union"),
///     Observation::new("d1", "Lincoln", "malice"),
/// ]);
///
/// let vocabulary = VocabularySelector::new().with_max_terms(1).select(&table);
/// assert_eq!(vocabulary.terms(), ["union"]);
/// ```
#[derive(Debug, Clone)]
pub struct VocabularySelector {
    max_terms: usize,
}

impl Default for VocabularySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularySelector {
    /// Create a selector keeping up to 200 terms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
        }
    }

    /// Set the maximum vocabulary size (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms.max(1);
        self
    }

    /// Maximum number of terms this selector keeps.
    #[must_use]
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Select the vocabulary of `table`.
    ///
    /// An empty table yields an empty vocabulary.
    #[must_use]
    pub fn select(&self, table: &CountTable) -> Vocabulary {
        let mut ranked: Vec<(&str, u64, usize)> = table
            .terms()
            .into_iter()
            .map(|term| {
                let rank = table.first_seen_rank(term).unwrap_or(usize::MAX);
                (term, table.term_total(term), rank)
            })
            .collect();
        ranked.sort_by_key(|&(_, total, rank)| (Reverse(total), rank));
        ranked.truncate(self.max_terms);
        Vocabulary::from_terms(ranked.into_iter().map(|(term, _, _)| term.to_string()).collect())
    }
}

/// An ordered term set with O(1) membership and index lookup.
///
/// Order is selection order (highest total first), which downstream
/// stages use as the column order of contingency matrices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from terms in rank order.
    ///
    /// Duplicate terms keep their first position; later occurrences are
    /// dropped.
    #[must_use]
    pub fn from_terms(terms: Vec<String>) -> Self {
        let mut deduped = Vec::with_capacity(terms.len());
        let mut index = HashMap::with_capacity(terms.len());
        for term in terms {
            if !index.contains_key(&term) {
                index.insert(term.clone(), deduped.len());
                deduped.push(term);
            }
        }
        Self {
            terms: deduped,
            index,
        }
    }

    /// Whether `term` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Rank position of `term`, if present.
    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Terms in rank order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterate terms in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the vocabulary holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
