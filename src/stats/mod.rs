//! Chi-square statistic for group-by-term contingency tables.
//!
//! Correspondence analysis decomposes exactly the chi-square distance
//! structure of a table, so the statistic doubles as a cross-check: total
//! inertia times total mass must reproduce it. Only the statistic and its
//! degrees of freedom are computed here; turning them into a significance
//! level is out of scope.

use serde::{Deserialize, Serialize};

use crate::contingency::ContingencyTable;
use crate::error::{DiscursoError, Result};

/// Result of a chi-square test of independence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareIndependence {
    /// Chi-square statistic
    pub statistic: f64,

    /// Degrees of freedom: (rows − 1) × (columns − 1) over non-empty
    /// rows and columns
    pub df: usize,
}

/// Chi-square test of independence between rows and columns.
///
/// Zero-sum rows and columns are excluded before computing expected
/// frequencies, matching the exclusions the correspondence analysis
/// engine applies.
///
/// # Errors
///
/// Returns [`DiscursoError::DegenerateInput`] if the table's total mass
/// is zero or fewer than two non-empty rows or columns remain.
///
/// # Examples
///
/// ```
/// use discurso::contingency::ContingencyTable;
/// use discurso::primitives::Matrix;
/// use discurso::stats::chi_square_independence;
///
/// let counts = Matrix::from_vec(2, 2, vec![10.0, 20.0, 20.0, 10.0])?;
/// let table = ContingencyTable::from_counts(
///     counts,
///     vec!["r1".into(), "r2".into()],
///     vec!["c1".into(), "c2".into()],
/// )?;
///
/// let result = chi_square_independence(&table)?;
/// assert_eq!(result.df, 1);
/// assert!((result.statistic - 100.0 / 15.0).abs() < 1e-12);
/// # Ok::<(), discurso::error::DiscursoError>(())
/// ```
pub fn chi_square_independence(table: &ContingencyTable) -> Result<ChiSquareIndependence> {
    let total = table.total_mass();
    if total == 0.0 {
        return Err(DiscursoError::degenerate(
            "chi-square requires a table with positive total mass",
        ));
    }

    let row_sums = table.row_sums();
    let column_sums = table.column_sums();
    let rows: Vec<usize> = (0..table.n_rows()).filter(|&i| row_sums[i] > 0.0).collect();
    let columns: Vec<usize> = (0..table.n_columns())
        .filter(|&j| column_sums[j] > 0.0)
        .collect();

    if rows.len() < 2 || columns.len() < 2 {
        return Err(DiscursoError::degenerate(
            "chi-square requires at least 2 non-empty rows and 2 non-empty columns",
        ));
    }

    let mut statistic = 0.0;
    for &i in &rows {
        for &j in &columns {
            let observed = table.counts().get(i, j);
            let expected = row_sums[i] * column_sums[j] / total;
            let diff = observed - expected;
            statistic += diff * diff / expected;
        }
    }

    Ok(ChiSquareIndependence {
        statistic,
        df: (rows.len() - 1) * (columns.len() - 1),
    })
}
