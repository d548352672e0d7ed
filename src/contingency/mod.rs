//! Dense group-by-term contingency tables.
//!
//! Correspondence analysis and the chi-square statistic both work on a
//! dense matrix rather than the sparse [`CountTable`], so
//! [`ContingencyMatrixBuilder`] materializes the counts with fixed,
//! deterministic row and column orderings: rows sorted by group key,
//! columns in vocabulary rank order.

use serde::{Deserialize, Serialize};

use crate::count::CountTable;
use crate::error::{DiscursoError, Result};
use crate::primitives::{Matrix, Vector};
use crate::vocabulary::Vocabulary;

/// Materializes a [`CountTable`] into a dense [`ContingencyTable`].
///
/// Every group of the table becomes a row, including groups whose entire
/// count mass falls outside the vocabulary; those appear as zero rows
/// rather than being dropped, and the analysis engine decides their fate.
///
/// # Examples
///
/// ```
/// use discurso::contingency::ContingencyMatrixBuilder;
/// use discurso::corpus::Observation;
/// use discurso::count::TokenCounter;
/// use discurso::vocabulary::VocabularySelector;
///
/// let table = TokenCounter::new().count(&[
///     Observation::new("d1", "Lincoln", "union"),
///     Observation::new("d2", "Grant", "army"),
/// ]);
/// let vocabulary = VocabularySelector::new().select(&table);
/// let dense = ContingencyMatrixBuilder::new().build(&table, &vocabulary)?;
///
/// assert_eq!(dense.n_rows(), 2);
/// assert_eq!(dense.row_labels(), ["Grant", "Lincoln"]);
/// # Ok::<(), discurso::error::DiscursoError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContingencyMatrixBuilder;

impl ContingencyMatrixBuilder {
    /// Create a builder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the dense table from counts restricted to `vocabulary`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the assembled matrix disagrees with its
    /// labels, which would be an implementation bug rather than bad input.
    pub fn build(
        &self,
        table: &CountTable,
        vocabulary: &Vocabulary,
    ) -> Result<ContingencyTable> {
        let groups = table.groups();
        let n_rows = groups.len();
        let n_cols = vocabulary.len();

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for group in &groups {
            for term in vocabulary.iter() {
                data.push(table.count(group, term) as f64);
            }
        }
        let counts = Matrix::from_vec(n_rows, n_cols, data)?;

        ContingencyTable::from_counts(
            counts,
            groups.into_iter().map(str::to_string).collect(),
            vocabulary.iter().map(str::to_string).collect(),
        )
    }
}

/// A dense count matrix with aligned row and column labels.
///
/// Entries are counts stored as `f64` (whole-valued, non-negative); label
/// orderings are fixed at construction and shared by every downstream
/// artifact derived from the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingencyTable {
    counts: Matrix<f64>,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
}

impl ContingencyTable {
    /// Assemble a table from a count matrix and its labels.
    ///
    /// # Errors
    ///
    /// Returns [`DiscursoError::DimensionMismatch`] if the label counts
    /// disagree with the matrix shape, and
    /// [`DiscursoError::DegenerateInput`] if any entry is negative.
    pub fn from_counts(
        counts: Matrix<f64>,
        row_labels: Vec<String>,
        column_labels: Vec<String>,
    ) -> Result<Self> {
        let (n_rows, n_cols) = counts.shape();
        if row_labels.len() != n_rows {
            return Err(DiscursoError::dimension_mismatch(
                "row labels",
                n_rows,
                row_labels.len(),
            ));
        }
        if column_labels.len() != n_cols {
            return Err(DiscursoError::dimension_mismatch(
                "column labels",
                n_cols,
                column_labels.len(),
            ));
        }
        if counts.as_slice().iter().any(|&value| value < 0.0) {
            return Err(DiscursoError::degenerate(
                "contingency entries must be non-negative",
            ));
        }
        Ok(Self {
            counts,
            row_labels,
            column_labels,
        })
    }

    /// The count matrix.
    #[must_use]
    pub fn counts(&self) -> &Matrix<f64> {
        &self.counts
    }

    /// Row labels (group keys), aligned with matrix rows.
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels (terms), aligned with matrix columns.
    #[must_use]
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.column_labels.len()
    }

    /// Sum of all entries.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.counts.total()
    }

    /// Per-row sums, aligned with `row_labels`.
    #[must_use]
    pub fn row_sums(&self) -> Vector<f64> {
        self.counts.row_sums()
    }

    /// Per-column sums, aligned with `column_labels`.
    #[must_use]
    pub fn column_sums(&self) -> Vector<f64> {
        self.counts.column_sums()
    }

    /// Labels of rows whose sum is zero.
    #[must_use]
    pub fn zero_rows(&self) -> Vec<&str> {
        let sums = self.counts.row_sums();
        self.row_labels
            .iter()
            .enumerate()
            .filter(|&(i, _)| sums[i] == 0.0)
            .map(|(_, label)| label.as_str())
            .collect()
    }

    /// Labels of columns whose sum is zero.
    #[must_use]
    pub fn zero_columns(&self) -> Vec<&str> {
        let sums = self.counts.column_sums();
        self.column_labels
            .iter()
            .enumerate()
            .filter(|&(j, _)| sums[j] == 0.0)
            .map(|(_, label)| label.as_str())
            .collect()
    }
}
