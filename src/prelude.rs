//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use discurso::prelude::*;
//! ```

pub use crate::primitives::{Matrix, Vector};
pub use crate::corpus::{GroupBy, Observation, Speech, SpeechSet};
pub use crate::text::{SpeechTokenizer, StopwordList, Tokenizer};
pub use crate::count::{CountTable, StopwordPredicate, TokenCounter};
pub use crate::vocabulary::{Vocabulary, VocabularySelector};
pub use crate::tfidf::{TfIdfEngine, TfIdfRow};
pub use crate::contingency::{ContingencyMatrixBuilder, ContingencyTable};
pub use crate::stats::{chi_square_independence, ChiSquareIndependence};
pub use crate::decomposition::{CaResult, CorrespondenceAnalyzer};
pub use crate::error::{DiscursoError, Result};
