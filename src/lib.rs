//! Discurso: lexical analysis for labeled speech corpora.
//!
//! Discurso turns collections of labeled documents (presidential speeches
//! tagged with speaker and party) into grouped term statistics: tf-idf
//! rankings of what each group says that the others do not, and a
//! correspondence analysis placing groups and terms together in a shared
//! low-dimensional space.
//!
//! # Quick Start
//!
//! ```
//! use discurso::prelude::*;
//!
//! let speeches = vec![
//!     Speech::new("1861-lincoln", 1861, "Lincoln", "Republican",
//!         "We must preserve the union. The union endures."),
//!     Speech::new("1869-grant", 1869, "Grant", "Republican",
//!         "Let us have peace. Peace across the whole nation."),
//! ];
//!
//! let set = SpeechSet::from_speeches(speeches);
//! let observations = set
//!     .observations(GroupBy::Speaker, &SpeechTokenizer::new())
//!     .unwrap();
//!
//! let table = TokenCounter::new()
//!     .with_stopwords(StopwordList::english())
//!     .count(&observations);
//! let vocabulary = VocabularySelector::new().select(&table);
//! let rows = TfIdfEngine::new().compute(&table.restrict_to(&vocabulary));
//!
//! // "union" is distinctive for Lincoln, "peace" for Grant.
//! assert_eq!(rows.iter().find(|r| r.group_key == "Grant").unwrap().term, "peace");
//! assert_eq!(rows.iter().find(|r| r.group_key == "Lincoln").unwrap().term, "union");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`corpus`]: Speech records, grouping, and observation extraction
//! - [`text`]: Tokenization and stop word lists
//! - [`count`]: Observation counting into sparse group-by-term tables
//! - [`vocabulary`]: Top-K term selection
//! - [`tfidf`]: Grouped tf-idf scoring
//! - [`contingency`]: Dense contingency tables
//! - [`stats`]: Chi-square statistic for contingency tables
//! - [`decomposition`]: Correspondence analysis

pub mod contingency;
pub mod corpus;
pub mod count;
pub mod decomposition;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod text;
pub mod tfidf;
pub mod vocabulary;

pub use count::StopwordPredicate;
pub use error::{DiscursoError, Result};
pub use primitives::{Matrix, Vector};
pub use text::Tokenizer;
