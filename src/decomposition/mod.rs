//! Correspondence analysis of contingency tables.
//!
//! Correspondence analysis decomposes the chi-square distance structure
//! of a group-by-term table into a small number of orthogonal dimensions,
//! placing groups (rows) and terms (columns) in a shared low-dimensional
//! space. Rows that use terms in similar proportions land close together;
//! terms pulled toward a group's usage land near that group.
//!
//! The decomposition runs on standardized residuals: with correspondence
//! matrix `P = N / n`, row masses `r`, and column masses `c`, the residual
//! is `S_ij = (P_ij − r_i·c_j) / sqrt(r_i·c_j)`, and its singular value
//! decomposition yields principal coordinates and per-dimension inertia.
//! Total inertia equals the chi-square statistic of the table divided by
//! its total mass.

use serde::{Deserialize, Serialize};

use crate::contingency::ContingencyTable;
use crate::error::{DiscursoError, Result};
use crate::primitives::{Matrix, Vector};

const DEFAULT_DIMENSIONS: usize = 2;

/// Singular values below this fraction of the largest are treated as
/// numerically zero and not retained as dimensions.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Runs correspondence analysis over a [`ContingencyTable`].
///
/// Zero-mass rows and columns are excluded before any arithmetic and
/// reported in the result; they carry no usable distance information and
/// would otherwise inject NaNs. The number of retained dimensions is the
/// requested count capped at the table's non-degenerate rank, which never
/// exceeds min(rows, columns) − 1.
///
/// # Examples
///
/// ```
/// use discurso::contingency::ContingencyTable;
/// use discurso::decomposition::CorrespondenceAnalyzer;
/// use discurso::primitives::Matrix;
///
/// let counts = Matrix::from_vec(2, 2, vec![10.0, 20.0, 20.0, 10.0])?;
/// let table = ContingencyTable::from_counts(
///     counts,
///     vec!["r1".into(), "r2".into()],
///     vec!["c1".into(), "c2".into()],
/// )?;
/// let result = CorrespondenceAnalyzer::new().analyze(&table)?;
///
/// // A 2x2 table has exactly one dimension of association.
/// assert_eq!(result.dimensions(), 1);
/// assert!((result.total_inertia() - 1.0 / 9.0).abs() < 1e-9);
/// # Ok::<(), discurso::error::DiscursoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CorrespondenceAnalyzer {
    dimensions: usize,
}

impl Default for CorrespondenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrespondenceAnalyzer {
    /// Create an analyzer retaining up to 2 dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
        }
    }

    /// Set the number of dimensions to retain (builder pattern).
    ///
    /// Values below 1 are clamped to 1. The effective count is further
    /// capped by the table's non-degenerate rank at analysis time.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions.max(1);
        self
    }

    /// Requested dimension count.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Analyze a contingency table.
    ///
    /// # Errors
    ///
    /// - [`DiscursoError::EmptyInput`] if the table has zero rows or zero
    ///   columns.
    /// - [`DiscursoError::DegenerateInput`] if total mass is zero, or
    ///   fewer than two non-empty rows or columns remain after exclusion.
    /// - [`DiscursoError::DivisionGuard`] if a retained mass turns out
    ///   zero after exclusion; that indicates a bug, not bad input.
    pub fn analyze(&self, table: &ContingencyTable) -> Result<CaResult> {
        use nalgebra::DMatrix;

        if table.n_rows() == 0 || table.n_columns() == 0 {
            return Err(DiscursoError::empty_input(
                "contingency table has no rows or columns",
            ));
        }
        let total = table.total_mass();
        if total <= 0.0 {
            return Err(DiscursoError::degenerate(
                "contingency table total mass is zero",
            ));
        }

        // Exclude zero-mass rows/columns before any division happens.
        let full_row_sums = table.row_sums();
        let full_column_sums = table.column_sums();
        let retained_rows: Vec<usize> = (0..table.n_rows())
            .filter(|&i| full_row_sums[i] > 0.0)
            .collect();
        let retained_columns: Vec<usize> = (0..table.n_columns())
            .filter(|&j| full_column_sums[j] > 0.0)
            .collect();
        let excluded_rows: Vec<String> = (0..table.n_rows())
            .filter(|&i| full_row_sums[i] == 0.0)
            .map(|i| table.row_labels()[i].clone())
            .collect();
        let excluded_columns: Vec<String> = (0..table.n_columns())
            .filter(|&j| full_column_sums[j] == 0.0)
            .map(|j| table.column_labels()[j].clone())
            .collect();

        if retained_rows.len() < 2 || retained_columns.len() < 2 {
            return Err(DiscursoError::degenerate(
                "correspondence analysis requires at least 2 non-empty rows and 2 non-empty columns",
            ));
        }

        let n_rows = retained_rows.len();
        let n_columns = retained_columns.len();

        // Correspondence matrix P = N / n over the retained cells. The
        // masses equal the full-table sums divided by n, since excluded
        // columns hold only zeros.
        let mut retained = Matrix::zeros(n_rows, n_columns);
        for (i, &row) in retained_rows.iter().enumerate() {
            for (j, &column) in retained_columns.iter().enumerate() {
                retained.set(i, j, table.counts().get(row, column));
            }
        }
        let p = retained.mul_scalar(1.0 / total);
        let row_masses = p.row_sums();
        let column_masses = p.column_sums();

        // Standardized residuals S_ij = (P_ij - r_i*c_j) / sqrt(r_i*c_j).
        let mut residuals = vec![0.0; n_rows * n_columns];
        for i in 0..n_rows {
            for j in 0..n_columns {
                let expected = row_masses[i] * column_masses[j];
                if expected <= 0.0 {
                    return Err(DiscursoError::DivisionGuard {
                        context: "retained row or column mass is zero".to_string(),
                    });
                }
                residuals[i * n_columns + j] = (p.get(i, j) - expected) / expected.sqrt();
            }
        }

        // Squared Frobenius norm of the residuals: exactly the table's
        // chi-square statistic divided by n.
        let total_inertia: f64 = residuals.iter().map(|&s| s * s).sum();

        let svd = DMatrix::from_row_slice(n_rows, n_columns, &residuals).svd(true, true);
        let u = svd
            .u
            .ok_or_else(|| DiscursoError::from("SVD did not produce left singular vectors"))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| DiscursoError::from("SVD did not produce right singular vectors"))?;
        let singular = svd.singular_values;

        // Sort dimensions by singular value (descending).
        let mut order: Vec<usize> = (0..singular.len()).collect();
        order.sort_by(|&a, &b| {
            singular[b]
                .partial_cmp(&singular[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let max_dimensions = n_rows.min(n_columns) - 1;
        let tolerance = singular[order[0]] * SINGULAR_TOLERANCE;
        // Each retained singular value is recovered through the residuals
        // as u_k' * S * v_k; the iterated values drift on near-degenerate
        // blocks while the vectors stay sharp.
        let mut retained_dims: Vec<(usize, f64)> = order
            .into_iter()
            .filter(|&k| singular[k] > tolerance)
            .take(self.dimensions.min(max_dimensions))
            .map(|k| {
                let mut sigma = 0.0;
                for i in 0..n_rows {
                    for j in 0..n_columns {
                        sigma += u[(i, k)] * residuals[i * n_columns + j] * v_t[(k, j)];
                    }
                }
                (k, sigma)
            })
            .collect();
        retained_dims.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
        });
        let dims = retained_dims.len();

        // Principal coordinates: sigma_k * U_ik / sqrt(r_i) for rows,
        // sigma_k * V_jk / sqrt(c_j) for columns.
        let mut row_coordinates = vec![0.0; n_rows * dims];
        for i in 0..n_rows {
            let mass_sqrt = row_masses[i].sqrt();
            for (out, &(k, sigma)) in retained_dims.iter().enumerate() {
                row_coordinates[i * dims + out] = sigma * u[(i, k)] / mass_sqrt;
            }
        }
        let mut column_coordinates = vec![0.0; n_columns * dims];
        for j in 0..n_columns {
            let mass_sqrt = column_masses[j].sqrt();
            for (out, &(k, sigma)) in retained_dims.iter().enumerate() {
                column_coordinates[j * dims + out] = sigma * v_t[(k, j)] / mass_sqrt;
            }
        }

        let singular_values: Vec<f64> = retained_dims.iter().map(|&(_, sigma)| sigma).collect();
        let eigenvalues: Vec<f64> = singular_values.iter().map(|&sigma| sigma * sigma).collect();
        let explained_inertia: Vec<f64> = eigenvalues
            .iter()
            .map(|&lambda| lambda / total_inertia)
            .collect();

        Ok(CaResult {
            row_labels: retained_rows
                .iter()
                .map(|&i| table.row_labels()[i].clone())
                .collect(),
            column_labels: retained_columns
                .iter()
                .map(|&j| table.column_labels()[j].clone())
                .collect(),
            row_coordinates: Matrix::from_vec(n_rows, dims, row_coordinates)?,
            column_coordinates: Matrix::from_vec(n_columns, dims, column_coordinates)?,
            singular_values,
            eigenvalues,
            explained_inertia,
            total_inertia,
            excluded_rows,
            excluded_columns,
        })
    }
}

/// Output of one correspondence analysis call.
///
/// Labels are aligned with coordinate matrix rows; excluded labels list
/// the zero-mass rows/columns dropped before analysis, carried here so
/// callers can surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaResult {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    row_coordinates: Matrix<f64>,
    column_coordinates: Matrix<f64>,
    singular_values: Vec<f64>,
    eigenvalues: Vec<f64>,
    explained_inertia: Vec<f64>,
    total_inertia: f64,
    excluded_rows: Vec<String>,
    excluded_columns: Vec<String>,
}

impl CaResult {
    /// Retained row labels (group keys), aligned with row coordinates.
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Retained column labels (terms), aligned with column coordinates.
    #[must_use]
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Row principal coordinates, one row per retained group.
    #[must_use]
    pub fn row_coordinates(&self) -> &Matrix<f64> {
        &self.row_coordinates
    }

    /// Column principal coordinates, one row per retained term.
    #[must_use]
    pub fn column_coordinates(&self) -> &Matrix<f64> {
        &self.column_coordinates
    }

    /// Number of retained dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.row_coordinates.n_cols()
    }

    /// Singular values of the retained dimensions, descending.
    #[must_use]
    pub fn singular_values(&self) -> &[f64] {
        &self.singular_values
    }

    /// Eigenvalues (squared singular values) of the retained dimensions.
    #[must_use]
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Fraction of total inertia explained per retained dimension.
    #[must_use]
    pub fn explained_inertia(&self) -> &[f64] {
        &self.explained_inertia
    }

    /// Total inertia: the chi-square statistic divided by total mass.
    #[must_use]
    pub fn total_inertia(&self) -> f64 {
        self.total_inertia
    }

    /// Labels of zero-mass rows excluded before analysis.
    #[must_use]
    pub fn excluded_rows(&self) -> &[String] {
        &self.excluded_rows
    }

    /// Labels of zero-mass columns excluded before analysis.
    #[must_use]
    pub fn excluded_columns(&self) -> &[String] {
        &self.excluded_columns
    }

    /// Coordinates of the row labeled `label`, if retained.
    #[must_use]
    pub fn row_coordinates_for(&self, label: &str) -> Option<Vector<f64>> {
        self.row_labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.row_coordinates.row(i))
    }

    /// Coordinates of the column labeled `label`, if retained.
    #[must_use]
    pub fn column_coordinates_for(&self, label: &str) -> Option<Vector<f64>> {
        self.column_labels
            .iter()
            .position(|l| l == label)
            .map(|j| self.column_coordinates.row(j))
    }
}
