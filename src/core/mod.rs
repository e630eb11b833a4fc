//! Core data types for clause location.
//!
//! - [`MatchRequest`]: A validated `(text, sentence)` pair
//! - [`MatchResult`]: The outcome of locating a sentence's clause in a text
//!
//! Both are transient: they are built for a single evaluation and never
//! outlive it.

pub mod request;
pub mod result;

pub use request::MatchRequest;
pub use result::MatchResult;
