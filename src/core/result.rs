use std::ops::Range;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Outcome of locating a sentence's longest clause inside a text.
///
/// Borrows from the input strings: `resulting_match` is the slice of `text`
/// where the clause was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// A run of at least the minimum number of words was found
    Found {
        sentence: &'a str,
        text: &'a str,
        /// Character offset of the first matched character
        start_index: usize,
        /// Character offset of the last matched character (inclusive)
        end_index: usize,
        resulting_match: &'a str,
    },

    /// No run reached the minimum clause length
    NotFound { sentence: &'a str, text: &'a str },
}

impl<'a> MatchResult<'a> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub fn sentence(&self) -> &'a str {
        match self {
            Self::Found { sentence, .. } | Self::NotFound { sentence, .. } => *sentence,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Found { text, .. } | Self::NotFound { text, .. } => *text,
        }
    }

    /// The matched clause, if any
    #[must_use]
    pub fn resulting_match(&self) -> Option<&'a str> {
        match self {
            Self::Found {
                resulting_match, ..
            } => Some(*resulting_match),
            Self::NotFound { .. } => None,
        }
    }

    /// Inclusive character span `(start_index, end_index)` of the match
    #[must_use]
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            Self::Found {
                start_index,
                end_index,
                ..
            } => Some((*start_index, *end_index)),
            Self::NotFound { .. } => None,
        }
    }

    /// Byte range of the match within `text`, suitable for slicing a `&str`.
    ///
    /// Equal to the character span for ASCII input; differs once multi-byte
    /// characters precede or fall inside the match.
    #[must_use]
    pub fn byte_range(&self) -> Option<Range<usize>> {
        match self {
            Self::Found {
                text,
                start_index,
                resulting_match,
                ..
            } => {
                let start = text
                    .char_indices()
                    .nth(*start_index)
                    .map_or(text.len(), |(offset, _)| offset);
                Some(start..start + resulting_match.len())
            }
            Self::NotFound { .. } => None,
        }
    }
}

/// Serializes to the response body of the `/contract-query` endpoint:
/// `result_found` is always present, the span fields only when found.
impl Serialize for MatchResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found {
                sentence,
                text,
                start_index,
                end_index,
                resulting_match,
            } => {
                let mut state = serializer.serialize_struct("MatchResult", 6)?;
                state.serialize_field("sentence", sentence)?;
                state.serialize_field("text", text)?;
                state.serialize_field("result_found", &true)?;
                state.serialize_field("start_index", start_index)?;
                state.serialize_field("end_index", end_index)?;
                state.serialize_field("resulting_match", resulting_match)?;
                state.end()
            }
            Self::NotFound { sentence, text } => {
                let mut state = serializer.serialize_struct("MatchResult", 3)?;
                state.serialize_field("sentence", sentence)?;
                state.serialize_field("text", text)?;
                state.serialize_field("result_found", &false)?;
                state.end()
            }
        }
    }
}
