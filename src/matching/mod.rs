//! Clause matching.
//!
//! [`ClauseLocator`] finds the longest contiguous run of a sentence's words
//! that appears verbatim inside a text.
//!
//! ## Algorithm
//!
//! The sentence is split on whitespace and scanned left to right. Words are
//! appended one at a time to a space-joined candidate run, and the run is
//! tested against the text with a raw substring search. A run that stops
//! matching is discarded together with the word that broke it, and the scan
//! restarts from the next word. The longest run seen is reported, at its
//! leftmost occurrence in the text, provided it has at least
//! [`DEFAULT_MIN_CLAUSE_WORDS`] words.
//!
//! Containment is not word-boundary aware: `"cat en"` is found inside
//! `"concat enate"`.
//!
//! ## Example
//!
//! ```rust
//! use clause_locator::matching::locate;
//!
//! let result = locate("The quick brown fox jumps", "quick brown");
//! assert_eq!(result.span(), Some((4, 14)));
//! ```

pub mod locator;

pub use locator::{locate, ClauseLocator, LocatorConfig, DEFAULT_MIN_CLAUSE_WORDS};
