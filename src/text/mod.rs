//! Text preprocessing collaborators: tokenization and stop words.
//!
//! These helpers sit outside the analysis core. They turn raw speech text
//! into plain word terms and answer stop-word membership queries; the core
//! only ever sees their output.

pub mod stopwords;
pub mod tokenize;

pub use stopwords::StopwordList;
pub use tokenize::SpeechTokenizer;

use crate::error::Result;

/// Trait for tokenizers that split text into terms.
pub trait Tokenizer {
    /// Tokenize text into a list of terms.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
