//! Lightweight counts shown next to the input while the user types.
//!
//! These are advisory only: they are never sent to the server and do not
//! participate in validation, which works on the trimmed length.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A run of non-terminators closed by one or more `.`, `!` or `?`
static SENTENCE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("Failed to compile sentence regex"));

/// Character, word and sentence counts of a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl TextStats {
    /// Compute counts for `text`.
    ///
    /// `char_count` covers the raw text including surrounding whitespace; the
    /// other two counts look at the trimmed text. Text without any terminated
    /// sentence still counts as one sentence.
    pub fn compute(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self {
                char_count: text.chars().count(),
                word_count: 0,
                sentence_count: 0,
            };
        }

        let sentence_count = match SENTENCE_RUN.find_iter(trimmed).count() {
            0 => 1,
            n => n,
        };

        Self {
            char_count: text.chars().count(),
            word_count: trimmed.split_whitespace().count(),
            sentence_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(TextStats::compute(""), TextStats::default());
    }

    #[test]
    fn test_whitespace_only_counts_raw_chars() {
        let stats = TextStats::compute("  \n\t ");
        assert_eq!(stats.char_count, 5);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        let stats = TextStats::compute("just a fragment with no ending");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_sentence_runs() {
        let stats = TextStats::compute("It rained. Did it stop?! Yes... Finally");
        // The trailing "Finally" has no terminator and is not counted
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.word_count, 7);
    }

    #[test]
    fn test_terminators_only() {
        let stats = TextStats::compute("?!.");
        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_char_count_uses_raw_text_and_unicode_scalars() {
        let stats = TextStats::compute("  Привіт, світе!  ");
        assert_eq!(stats.char_count, 18);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_mixed_whitespace_between_words() {
        let stats = TextStats::compute("one\ttwo\n\nthree   four.");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.sentence_count, 1);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let text = "First line. Second line!";
        assert_eq!(TextStats::compute(text), TextStats::compute(text));
    }
}
