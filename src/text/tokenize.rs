//! Word tokenization for speech text.

use crate::error::Result;
use crate::text::Tokenizer;

/// Tokenizer that lowercases and splits text into plain words.
///
/// Splits on anything that is neither alphanumeric nor an apostrophe
/// (keeping contractions like "don't" together), then strips leading and
/// trailing apostrophes. Produces no empty tokens.
///
/// # Examples
///
/// ```
/// use discurso::text::{Tokenizer, tokenize::SpeechTokenizer};
///
/// let tokenizer = SpeechTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Ask not, what your country...").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["ask", "not", "what", "your", "country"]);
///
/// // Contractions survive, quotes don't
/// let tokens = tokenizer.tokenize("We don't 'surrender'").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["we", "don't", "surrender"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpeechTokenizer;

impl SpeechTokenizer {
    /// Create a new speech tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '\''
    }
}

impl Tokenizer for SpeechTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .to_lowercase()
            .split(|c| !Self::is_word_char(c))
            .map(|word| word.trim_matches('\''))
            .filter(|word| !word.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}
