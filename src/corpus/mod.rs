//! Speech records and observation extraction.
//!
//! This is the ingestion side of the crate: structured speech records go
//! in, `(document, group, term)` observations come out. Everything
//! downstream (counting, tf-idf, correspondence analysis) consumes
//! observations or structures derived from them and never sees raw text.
//!
//! Grouping is selected once, here, through the typed [`GroupBy`] enum;
//! downstream components receive group keys and stay agnostic to whether
//! they are looking at speakers or parties.
//!
//! # Examples
//!
//! ```
//! use discurso::corpus::{GroupBy, Speech, SpeechSet};
//! use discurso::text::tokenize::SpeechTokenizer;
//!
//! let speeches = SpeechSet::from_speeches(vec![Speech::new(
//!     "1961-inaugural",
//!     1961,
//!     "Kennedy",
//!     "Democratic",
//!     "Ask not what your country can do for you",
//! )]);
//!
//! let observations = speeches
//!     .observations(GroupBy::Speaker, &SpeechTokenizer::new())
//!     .expect("tokenization should succeed");
//! assert_eq!(observations[0].group_key, "Kennedy");
//! assert_eq!(observations[0].term, "ask");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::text::Tokenizer;

/// A single speech with its identifying labels.
///
/// The `id` doubles as the document identifier carried into every
/// [`Observation`] derived from this speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speech {
    /// Document identifier, unique within a corpus
    pub id: String,
    /// Year the speech was delivered
    pub year: i32,
    /// Speaker name
    pub speaker: String,
    /// Party affiliation of the speaker
    pub party: String,
    /// Raw text
    pub text: String,
}

impl Speech {
    /// Create a speech record.
    pub fn new(
        id: impl Into<String>,
        year: i32,
        speaker: impl Into<String>,
        party: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            year,
            speaker: speaker.into(),
            party: party.into(),
            text: text.into(),
        }
    }
}

/// Which speech label becomes the group key of derived observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupBy {
    /// Group observations by speaker name.
    Speaker,
    /// Group observations by party affiliation.
    Party,
}

impl GroupBy {
    fn key_of(self, speech: &Speech) -> &str {
        match self {
            GroupBy::Speaker => &speech.speaker,
            GroupBy::Party => &speech.party,
        }
    }
}

/// One token occurrence: a (document, group, term) triple.
///
/// Produced once per token surviving upstream filtering; immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Identifier of the document the token occurred in
    pub document_id: String,
    /// Group key (speaker or party, fixed at extraction time)
    pub group_key: String,
    /// The term itself
    pub term: String,
}

impl Observation {
    /// Create an observation.
    pub fn new(
        document_id: impl Into<String>,
        group_key: impl Into<String>,
        term: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            group_key: group_key.into(),
            term: term.into(),
        }
    }
}

/// An immutable collection of speeches.
///
/// Filters produce new sets rather than mutating in place, so one loaded
/// corpus can be sliced repeatedly (different year ranges, different
/// groupings) without re-reading anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechSet {
    speeches: Vec<Speech>,
}

impl SpeechSet {
    /// Create a set from speech records.
    #[must_use]
    pub fn from_speeches(speeches: Vec<Speech>) -> Self {
        Self { speeches }
    }

    /// Restrict to speeches delivered between `min_year` and `max_year`
    /// inclusive.
    #[must_use]
    pub fn with_year_range(self, min_year: i32, max_year: i32) -> Self {
        Self {
            speeches: self
                .speeches
                .into_iter()
                .filter(|s| s.year >= min_year && s.year <= max_year)
                .collect(),
        }
    }

    /// Number of speeches in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.speeches.len()
    }

    /// Returns true if the set holds no speeches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speeches.is_empty()
    }

    /// The speeches, in insertion order.
    #[must_use]
    pub fn speeches(&self) -> &[Speech] {
        &self.speeches
    }

    /// Extract one observation per token of every speech, grouped by the
    /// requested label.
    ///
    /// Observations preserve speech order and, within a speech, token
    /// order. An empty set yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokenizer fails on any speech.
    pub fn observations(
        &self,
        group_by: GroupBy,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Vec<Observation>> {
        let mut observations = Vec::new();
        for speech in &self.speeches {
            let group_key = group_by.key_of(speech);
            for term in tokenizer.tokenize(&speech.text)? {
                observations.push(Observation {
                    document_id: speech.id.clone(),
                    group_key: group_key.to_string(),
                    term,
                });
            }
        }
        Ok(observations)
    }
}
