/// A request to locate `sentence` inside `text`.
///
/// Both fields are plain strings with no length constraints; empty strings
/// are legal. Instances are normally produced by
/// [`validate_request`](crate::utils::validation::validate_request), which
/// enforces the exact two-key shape of the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    /// The document searched for the clause
    pub text: String,

    /// The quoted sentence whose words are matched against `text`
    pub sentence: String,
}

impl MatchRequest {
    pub fn new(text: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentence: sentence.into(),
        }
    }
}
