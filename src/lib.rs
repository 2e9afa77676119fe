//! Turkish deasciifier: restores diacritics to ASCII-typed Turkish text
//! ("Turkce karakterli bir metin" → "Türkçe karakterli bir metin").
//!
//! For each candidate character the engine builds a bounded,
//! case-normalized context window around the cursor and matches every
//! marker-spanning substring against that letter's signed-rank pattern
//! table; the minimal-magnitude match decides whether the accent is
//! toggled. Overlay passes restore excluded words and apply fixed-phrase
//! corrections afterwards.
//!
//! ```
//! use deasciifier::Deasciifier;
//!
//! let engine = Deasciifier::default();
//! assert_eq!(engine.deasciify("Turkce"), "Türkçe");
//! ```

pub mod context;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod overlay;
pub mod patterns;
pub mod pipeline;
pub mod tables;

pub use engine::{Deasciifier, DEFAULT_CONTEXT_SIZE};
pub use errors::{DeasciifyError, TableError};
pub use overlay::{CorrectionList, ExclusionSet};
pub use patterns::{PatternSet, PatternTable, Rank};
pub use pipeline::Pipeline;
