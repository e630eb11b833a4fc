//! # clause-locator
//!
//! A library for finding where a quoted sentence occurs inside a longer text.
//!
//! Given a document and a sentence, the locator grows a candidate phrase one
//! word at a time and keeps the longest contiguous run of the sentence's words
//! that appears verbatim in the document. Runs of a single word are ignored, so
//! common words such as "for" or "a" do not count as a match on their own.
//!
//! ## Example
//!
//! ```rust
//! use clause_locator::{ClauseLocator, MatchResult};
//!
//! let locator = ClauseLocator::default();
//! let result = locator.locate("The quick brown fox jumps", "a quick brown dog");
//!
//! match result {
//!     MatchResult::Found { start_index, end_index, resulting_match, .. } => {
//!         assert_eq!(resulting_match, "quick brown");
//!         assert_eq!((start_index, end_index), (4, 14));
//!     }
//!     MatchResult::NotFound { .. } => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Request and result types
//! - [`matching`]: The clause locator
//! - [`utils`]: Request payload validation
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP API

pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::request::MatchRequest;
pub use crate::core::result::MatchResult;
pub use matching::locator::{locate, ClauseLocator, LocatorConfig};
pub use utils::validation::ValidationError;
