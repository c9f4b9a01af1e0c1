//! Keyword-density windows over transcript words.

use crate::types::{KeywordWindow, WordSegment};
use std::collections::HashSet;

/// Context words taken before a keyword hit
const CONTEXT_BEFORE: usize = 5;

/// Context words taken after a keyword hit
const CONTEXT_AFTER: usize = 10;

/// Punctuation stripped from word edges before matching
const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\''];

/// Find transcript windows around keyword hits.
///
/// For every word whose normalized form matches a configured keyword, the
/// surrounding context (5 words before, 10 after, clamped to the transcript)
/// becomes a window scored by the fraction of its words that are themselves
/// keywords. Windows from nearby hits may overlap; nothing deduplicates them
/// at this stage.
pub fn keyword_windows(words: &[WordSegment], keywords: &[String]) -> Vec<KeywordWindow> {
    if words.is_empty() || keywords.is_empty() {
        return Vec::new();
    }

    let keyword_set: HashSet<String> = keywords.iter().map(|k| k.trim().to_lowercase()).collect();
    let is_keyword = |word: &WordSegment| keyword_set.contains(&normalize(&word.text));

    let mut windows = Vec::new();

    for (i, word) in words.iter().enumerate() {
        if !is_keyword(word) {
            continue;
        }

        let ctx_start = i.saturating_sub(CONTEXT_BEFORE);
        // Exclusive upper bound, so the final transcript word never joins a
        // context window
        let ctx_end = (i + CONTEXT_AFTER).min(words.len() - 1);
        let context = &words[ctx_start..ctx_end];
        if context.is_empty() {
            continue;
        }

        let hits = context.iter().filter(|w| is_keyword(w)).count();
        windows.push(KeywordWindow {
            start: context[0].start,
            end: context[context.len() - 1].end,
            density: hits as f32 / context.len() as f32,
        });
    }

    windows
}

/// Lowercase a word and strip surrounding whitespace and punctuation.
fn normalize(text: &str) -> String {
    text.trim().trim_matches(TRIM_CHARS).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_from(texts: &[&str]) -> Vec<WordSegment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| WordSegment::new(*t, i as f32, i as f32 + 0.8))
            .collect()
    }

    fn kw(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn matches_are_case_insensitive_and_punctuation_stripped() {
        let words = words_from(&["so", "WAIT,", "here", "it", "comes", "now", "ok"]);

        let windows = keyword_windows(&words, &kw(&["wait"]));

        assert_eq!(windows.len(), 1);
        assert!((windows[0].start - 0.0).abs() < 0.001);
    }

    #[test]
    fn density_counts_keywords_in_context() {
        // Hit at index 1; context is words[0..6], two of six are keywords
        let words = words_from(&["ok", "insane", "and", "crazy", "stuff", "here", "end"]);

        let windows = keyword_windows(&words, &kw(&["insane", "crazy"]));

        assert_eq!(windows.len(), 2);
        assert!((windows[0].density - 2.0 / 6.0).abs() < 0.001);
    }

    #[test]
    fn context_clamps_at_transcript_start() {
        let words = words_from(&["wow", "that", "was", "something", "else"]);

        let windows = keyword_windows(&words, &kw(&["wow"]));

        assert_eq!(windows.len(), 1);
        // Context runs from the first word up to (exclusive) the last index
        assert!((windows[0].start - 0.0).abs() < 0.001);
        assert!((windows[0].end - 3.8).abs() < 0.001);
    }

    #[test]
    fn single_word_transcript_yields_no_window() {
        let words = words_from(&["insane"]);
        assert!(keyword_windows(&words, &kw(&["insane"])).is_empty());
    }

    #[test]
    fn no_keywords_configured_yields_nothing() {
        let words = words_from(&["wait", "what"]);
        assert!(keyword_windows(&words, &[]).is_empty());
    }

    #[test]
    fn empty_transcript_yields_nothing() {
        assert!(keyword_windows(&[], &kw(&["wait"])).is_empty());
    }

    #[test]
    fn overlapping_hits_produce_overlapping_windows() {
        let mut texts = vec!["filler"; 20];
        texts[8] = "insane";
        texts[10] = "crazy";
        let words = words_from(&texts);

        let windows = keyword_windows(&words, &kw(&["insane", "crazy"]));

        assert_eq!(windows.len(), 2);
        assert!(windows[0].end > windows[1].start);
    }
}
