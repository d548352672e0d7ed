//! Error types for discurso operations.
//!
//! The aggregation and selection stages never fail on empty input (they
//! return empty structures instead); only the correspondence analysis
//! engine can fail outright, since an SVD over a zero-mass table is
//! mathematically undefined.

use std::fmt;

/// Main error type for discurso operations.
///
/// # Examples
///
/// ```
/// use discurso::error::DiscursoError;
///
/// let err = DiscursoError::DegenerateInput {
///     reason: "total mass is zero".to_string(),
/// };
/// assert!(err.to_string().contains("total mass is zero"));
/// ```
#[derive(Debug)]
pub enum DiscursoError {
    /// Input is structurally empty where rows/columns are required.
    ///
    /// Counting and selection recover from empty input by returning empty
    /// structures; this variant surfaces only at the analysis boundary.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// The contingency table cannot be analyzed: its total mass is zero,
    /// or every row/column has zero mass.
    DegenerateInput {
        /// Why the table is degenerate
        reason: String,
    },

    /// Internal guard against dividing by a zero mass after degenerate
    /// rows/columns were pre-filtered. Surfacing this variant indicates an
    /// implementation bug, never bad caller input.
    DivisionGuard {
        /// Where the guard fired
        context: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for DiscursoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscursoError::EmptyInput { context } => {
                write!(f, "Empty input: {context}")
            }
            DiscursoError::DegenerateInput { reason } => {
                write!(f, "Degenerate input: {reason}")
            }
            DiscursoError::DivisionGuard { context } => {
                write!(
                    f,
                    "Division guard tripped ({context}); this is a bug, please report it"
                )
            }
            DiscursoError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            DiscursoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DiscursoError {}

impl From<&str> for DiscursoError {
    fn from(msg: &str) -> Self {
        DiscursoError::Other(msg.to_string())
    }
}

impl From<String> for DiscursoError {
    fn from(msg: String) -> Self {
        DiscursoError::Other(msg)
    }
}

impl DiscursoError {
    /// Create an empty-input error with descriptive context.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create a degenerate-input error with the offending condition.
    #[must_use]
    pub fn degenerate(reason: &str) -> Self {
        Self::DegenerateInput {
            reason: reason.to_string(),
        }
    }

    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DiscursoError>;
