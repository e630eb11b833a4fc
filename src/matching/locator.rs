use tracing::debug;

use crate::core::result::MatchResult;

/// Default minimum number of contiguous words a run needs to count as a clause.
///
/// A single matched word is rejected, otherwise common short words such as
/// "for" or "a" would register as clause matches.
pub const DEFAULT_MIN_CLAUSE_WORDS: usize = 2;

/// Configuration for the clause locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Minimum number of contiguous words in a reported clause (never below 2)
    pub min_clause_words: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            min_clause_words: DEFAULT_MIN_CLAUSE_WORDS,
        }
    }
}

impl LocatorConfig {
    /// Build a config with the given threshold, clamped to [`DEFAULT_MIN_CLAUSE_WORDS`].
    #[must_use]
    pub fn with_min_clause_words(min_clause_words: usize) -> Self {
        Self {
            min_clause_words: min_clause_words.max(DEFAULT_MIN_CLAUSE_WORDS),
        }
    }
}

/// Locates the longest contiguous run of a sentence's words inside a text.
///
/// Stateless apart from its configuration, so one instance can be shared
/// across threads and requests.
#[derive(Debug, Clone, Default)]
pub struct ClauseLocator {
    config: LocatorConfig,
}

impl ClauseLocator {
    #[must_use]
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Find the longest clause of `sentence` contained in `text`.
    ///
    /// Never fails: empty inputs simply produce [`MatchResult::NotFound`].
    /// When the winning run occurs several times in `text`, the leftmost
    /// occurrence is reported.
    #[must_use]
    pub fn locate<'a>(&self, text: &'a str, sentence: &'a str) -> MatchResult<'a> {
        let best = longest_run(text, sentence);
        let min_words = self.config.min_clause_words.max(DEFAULT_MIN_CLAUSE_WORDS);

        debug!(
            best_words = best.words,
            min_words,
            best_run = &text[best.byte_range()],
            "Scanned sentence for contiguous runs"
        );

        if best.words < min_words {
            return MatchResult::NotFound { sentence, text };
        }

        let resulting_match = &text[best.byte_range()];
        let start_index = text[..best.byte_start].chars().count();
        let end_index = start_index + resulting_match.chars().count() - 1;

        MatchResult::Found {
            sentence,
            text,
            start_index,
            end_index,
            resulting_match,
        }
    }
}

/// Find the locator's best run with the default configuration.
///
/// # Examples
///
/// ```
/// use clause_locator::matching::locate;
///
/// assert!(locate("The quick brown fox jumps", "quick brown").is_found());
/// assert!(!locate("The quick brown fox jumps", "for the win").is_found());
/// ```
#[must_use]
pub fn locate<'a>(text: &'a str, sentence: &'a str) -> MatchResult<'a> {
    ClauseLocator::default().locate(text, sentence)
}

/// Split a sentence into words.
///
/// Separators are Unicode whitespace plus the ASCII information separators
/// U+001C..=U+001F, so `"quick\u{1f}brown"` is two words. Runs of separators
/// collapse and no empty words are produced.
fn sentence_words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence
        .split(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .filter(|word| !word.is_empty())
}

/// Leftmost occurrence in the text of the best run found so far
#[derive(Debug, Clone, Copy, Default)]
struct BestRun {
    byte_start: usize,
    byte_len: usize,
    words: usize,
}

impl BestRun {
    fn byte_range(&self) -> std::ops::Range<usize> {
        self.byte_start..self.byte_start + self.byte_len
    }
}

/// Greedy left-to-right scan returning the longest contained run.
///
/// A word that breaks the current run is dropped along with it; it is not
/// retried as the start of a new run. Ties keep the run reached first.
fn longest_run(text: &str, sentence: &str) -> BestRun {
    let mut run = String::new();
    let mut count = 0;
    let mut best = BestRun::default();

    for word in sentence_words(sentence) {
        if !run.is_empty() {
            run.push(' ');
        }
        run.push_str(word);

        if let Some(byte_start) = text.find(run.as_str()) {
            count += 1;
            if count > best.words {
                best = BestRun {
                    byte_start,
                    byte_len: run.len(),
                    words: count,
                };
            }
        } else {
            count = 0;
            run.clear();
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps";

    fn assert_contained(result: &MatchResult<'_>) {
        let range = result.byte_range().expect("expected a match");
        let clause = result.resulting_match().unwrap();
        assert_eq!(&result.text()[range], clause);
        assert!(clause.split_whitespace().count() >= 2);

        let (start, end) = result.span().unwrap();
        assert!(start <= end);
        assert_eq!(end - start + 1, clause.chars().count());
    }

    #[test]
    fn test_two_word_clause() {
        let result = locate(FOX, "quick brown");
        assert_eq!(
            result,
            MatchResult::Found {
                sentence: "quick brown",
                text: FOX,
                start_index: 4,
                end_index: 14,
                resulting_match: "quick brown",
            }
        );
        assert_contained(&result);
    }

    #[test]
    fn test_no_clause_is_case_sensitive() {
        // "the" only occurs as "The", and "for"/"win" are absent
        let result = locate(FOX, "for the win");
        assert_eq!(
            result,
            MatchResult::NotFound {
                sentence: "for the win",
                text: FOX,
            }
        );
    }

    #[test]
    fn test_single_word_is_not_a_clause() {
        assert!(!locate(FOX, "fox").is_found());
        assert!(!locate(FOX, "jumps over").is_found());
    }

    #[test]
    fn test_threshold_law() {
        // Every word is present, but no two consecutive words are adjacent in the text
        let result = locate(FOX, "fox quick jumps brown The");
        assert!(!result.is_found());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!locate(FOX, "").is_found());
        assert!(!locate(FOX, "   \t\n ").is_found());
        assert!(!locate("", "quick brown").is_found());
        assert!(!locate("", "").is_found());
    }

    #[test]
    fn test_longest_run_wins() {
        let result = locate(FOX, "quick brown fox leaps");
        assert_eq!(result.resulting_match(), Some("quick brown fox"));
        assert_eq!(result.span(), Some((4, 18)));
        assert_contained(&result);
    }

    #[test]
    fn test_whitespace_in_sentence_collapses() {
        let result = locate(FOX, "  quick \t\n brown  ");
        assert_eq!(result.resulting_match(), Some("quick brown"));
        assert_eq!(result.sentence(), "  quick \t\n brown  ");
    }

    #[test]
    fn test_information_separators_split_words() {
        for separator in ['\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}'] {
            let sentence = format!("quick{separator}brown");
            let result = locate(FOX, &sentence);
            assert_eq!(result.resulting_match(), Some("quick brown"), "{separator:?}");
            assert_eq!(result.span(), Some((4, 14)), "{separator:?}");
        }
    }

    #[test]
    fn test_unicode_whitespace_splits_words() {
        for sentence in ["quick\u{a0}brown", "quick\u{3000}brown", "\u{3000}quick\u{a0}\u{1f} brown\u{1c}"] {
            let result = locate(FOX, sentence);
            assert_eq!(result.span(), Some((4, 14)), "{sentence:?}");
        }
    }

    #[test]
    fn test_sentence_words() {
        let words: Vec<&str> = sentence_words("\u{1f}a\u{a0}\u{a0}b\tc\u{3000}").collect();
        assert_eq!(words, vec!["a", "b", "c"]);
        assert_eq!(sentence_words("\u{1c}\u{1d} \u{1e}").count(), 0);
        // Other control characters stay inside words
        assert_eq!(sentence_words("a\u{1b}b").collect::<Vec<_>>(), vec!["a\u{1b}b"]);
    }

    #[test]
    fn test_leftmost_occurrence_reported() {
        let text = "quick brown and again quick brown";
        let result = locate(text, "again quick brown");
        assert_eq!(result.span(), Some((16, 32)));

        let result = locate(text, "quick brown");
        assert_eq!(result.span(), Some((0, 10)));
    }

    #[test]
    fn test_tie_keeps_first_run() {
        let text = "alpha beta and gamma delta";
        let result = locate(text, "alpha beta zzz gamma delta");
        assert_eq!(result.resulting_match(), Some("alpha beta"));
        assert_eq!(result.span(), Some((0, 9)));
    }

    #[test]
    fn test_later_longer_run_replaces_earlier() {
        let text = "alpha beta and gamma delta epsilon";
        let result = locate(text, "alpha beta zzz gamma delta epsilon");
        assert_eq!(result.resulting_match(), Some("gamma delta epsilon"));
    }

    #[test]
    fn test_breaking_word_is_not_retried() {
        // "x b" fails, which drops "b" as well, so "b c" is never tried
        let text = "x y b c";
        assert!(!locate(text, "x b c").is_found());
    }

    #[test]
    fn test_substring_does_not_span_missing_space() {
        // "cat" and "ate" match alone; "cat en" never occurs since the text has no spaces
        let result = locate("concatenate", "cat en ate");
        assert_eq!(
            result,
            MatchResult::NotFound {
                sentence: "cat en ate",
                text: "concatenate",
            }
        );
    }

    #[test]
    fn test_substring_straddles_word_boundaries() {
        // Raw containment: the run is embedded inside unrelated longer words
        let result = locate("concat enate", "cat en");
        assert_eq!(result.resulting_match(), Some("cat en"));
        assert_eq!(result.span(), Some((3, 8)));
        assert_contained(&result);
    }

    #[test]
    fn test_character_indices_with_multibyte_text() {
        let text = "café au lait";
        let result = locate(text, "au lait");
        assert_eq!(result.span(), Some((5, 11)));
        assert_eq!(result.byte_range(), Some(6..13));
        assert_contained(&result);
    }

    #[test]
    fn test_multibyte_inside_match() {
        let text = "le café noir";
        let result = locate(text, "café noir");
        assert_eq!(result.span(), Some((3, 11)));
        assert_contained(&result);
    }

    #[test]
    fn test_deterministic() {
        let first = locate(FOX, "brown fox jumps high");
        let second = locate(FOX, "brown fox jumps high");
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_min_clause_words() {
        let locator = ClauseLocator::new(LocatorConfig::with_min_clause_words(3));
        assert!(!locator.locate(FOX, "quick brown").is_found());
        assert_eq!(
            locator.locate(FOX, "quick brown fox").resulting_match(),
            Some("quick brown fox")
        );
    }

    #[test]
    fn test_min_clause_words_never_below_two() {
        let config = LocatorConfig::with_min_clause_words(1);
        assert_eq!(config.min_clause_words, DEFAULT_MIN_CLAUSE_WORDS);

        let locator = ClauseLocator::new(LocatorConfig { min_clause_words: 0 });
        assert!(!locator.locate(FOX, "fox").is_found());
    }
}
