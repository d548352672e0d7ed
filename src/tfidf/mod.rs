//! Grouped tf-idf scoring over a count table.
//!
//! tf-idf highlights what a group talks about that other groups do not:
//! term frequency (how much of the group's speech a term occupies) scaled
//! by inverse document frequency (how few groups use the term at all).
//! [`TfIdfEngine`] produces ranked [`TfIdfRow`]s per group, capped at a
//! configurable number of terms.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::count::CountTable;

const DEFAULT_TOP_TERMS: usize = 15;

/// One scored (group, term) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfRow {
    /// Group key the score belongs to
    pub group_key: String,
    /// The scored term
    pub term: String,
    /// Term frequency: count / group total
    pub tf: f64,
    /// Inverse document frequency: ln(groups / groups containing term)
    pub idf: f64,
    /// The product tf × idf
    pub tf_idf: f64,
}

/// Computes per-group tf-idf rankings from a [`CountTable`].
///
/// Scores use natural-log idf over the groups with a nonzero total, so a
/// term present in every group scores exactly zero. Each group's rows are
/// sorted by descending tf-idf (ties broken by term, ascending) and
/// truncated to the configured cap; groups appear in sorted key order.
///
/// The cap exists because the rankings feed fixed-height renderings; it
/// defaults to 15 rows per group and is set explicitly via
/// [`with_top_terms`](Self::with_top_terms) rather than negotiated
/// silently.
///
/// # Examples
///
/// ```
/// use discurso::corpus::Observation;
/// use discurso::count::TokenCounter;
/// use discurso::tfidf::TfIdfEngine;
///
/// let table = TokenCounter::new().count(&[
///     Observation::new("d1", "Pres1", "war"),
///     Observation::new("d1", "Pres1", "war"),
///     Observation::new("d1", "Pres1", "peace"),
///     Observation::new("d2", "Pres2", "peace"),
/// ]);
/// let rows = TfIdfEngine::new().compute(&table);
///
/// // "war" is unique to Pres1, so it scores positive there.
/// let war = rows.iter().find(|r| r.term == "war").unwrap();
/// assert!(war.tf_idf > 0.0);
///
/// // "peace" occurs in both groups, so idf = 0 and the score is zero.
/// assert!(rows.iter().filter(|r| r.term == "peace").all(|r| r.tf_idf == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct TfIdfEngine {
    top_terms: usize,
}

impl Default for TfIdfEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfEngine {
    /// Create an engine reporting up to 15 terms per group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            top_terms: DEFAULT_TOP_TERMS,
        }
    }

    /// Set the per-group row cap (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms.max(1);
        self
    }

    /// Per-group row cap.
    #[must_use]
    pub fn top_terms(&self) -> usize {
        self.top_terms
    }

    /// Score every (group, term) pair with a nonzero count.
    ///
    /// Groups with a zero total (possible after vocabulary restriction)
    /// contribute no rows. An empty table yields no rows.
    #[must_use]
    pub fn compute(&self, table: &CountTable) -> Vec<TfIdfRow> {
        let groups = table.groups();
        let active_groups = groups
            .iter()
            .filter(|group| table.group_total(group) > 0)
            .count();
        if active_groups == 0 {
            return Vec::new();
        }

        let terms = table.terms();
        let mut rows = Vec::new();
        for group in groups {
            let group_total = table.group_total(group);
            if group_total == 0 {
                continue;
            }
            let mut scored: Vec<TfIdfRow> = terms
                .iter()
                .filter(|term| table.count(group, term) > 0)
                .map(|term| {
                    let tf = table.count(group, term) as f64 / group_total as f64;
                    let groups_containing = table.group_frequency(term);
                    let idf = (active_groups as f64 / groups_containing as f64).ln();
                    TfIdfRow {
                        group_key: group.to_string(),
                        term: (*term).to_string(),
                        tf,
                        idf,
                        tf_idf: tf * idf,
                    }
                })
                .collect();
            scored.sort_by(|a, b| {
                b.tf_idf
                    .partial_cmp(&a.tf_idf)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.term.cmp(&b.term))
            });
            scored.truncate(self.top_terms);
            rows.extend(scored);
        }
        rows
    }
}
