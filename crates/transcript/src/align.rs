//! # Edited-text-as-Oracle Aligner
//!
//! The edited segment text is the **sole source of truth** for what the words
//! say; the original word list is the sole source of truth for *when* they
//! were said. Alignment reconciles the two.
//!
//! ## Two paths
//!
//! **Token counts match** — the common case: spelling or wording changed
//! without adding or removing words. Each token takes the corresponding
//! original word's timing verbatim. Pairing is strictly positional,
//! left-to-right; no fuzzy text matching.
//!
//! **Token counts differ** — the original timestamps cannot be trusted
//! word-by-word, so the whole segment interval is redistributed across the
//! new tokens proportionally to their character length. Approximate by
//! design: longer words get more screen time, and the segment-sum invariant
//! holds exactly.

use crate::types::{Segment, Word};

/// Re-derive per-token timing for an edited segment.
///
/// `original` is the ordered subsequence of words owned by the segment's
/// (unedited) interval. Returns the new word list and whether the fallback
/// redistribution was taken.
///
/// Empty edited text produces zero words; the segment itself stays in the
/// transcript, it just contributes nothing to the flattened word list.
pub fn align_segment(segment: &Segment, original: &[Word]) -> (Vec<Word>, bool) {
    let tokens: Vec<&str> = segment.text.split_whitespace().collect();
    if tokens.is_empty() {
        return (Vec::new(), false);
    }

    if tokens.len() == original.len() {
        let words = tokens
            .iter()
            .zip(original)
            .map(|(token, word)| Word {
                text: (*token).to_string(),
                start_ms: word.start_ms,
                end_ms: word.end_ms,
                speaker: word.speaker.clone(),
            })
            .collect();
        return (words, false);
    }

    (distribute(segment, &tokens), true)
}

/// Apportion the segment interval across `tokens` by character length.
///
/// Each token gets `floor(span * len / total_len)` milliseconds; the final
/// token absorbs the flooring remainder by ending exactly at the segment end.
/// Words are contiguous: each starts where the previous one ended.
pub fn distribute(segment: &Segment, tokens: &[&str]) -> Vec<Word> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let span = segment.end_ms - segment.start_ms;
    let lengths: Vec<i64> = tokens.iter().map(|t| t.chars().count() as i64).collect();
    let total: i64 = lengths.iter().sum();

    let mut words = Vec::with_capacity(tokens.len());
    let mut cursor = segment.start_ms;

    for (i, (token, len)) in tokens.iter().zip(&lengths).enumerate() {
        let end_ms = if i == tokens.len() - 1 {
            segment.end_ms
        } else {
            cursor + span * len / total
        };
        words.push(Word {
            text: (*token).to_string(),
            start_ms: cursor,
            end_ms,
            speaker: segment.speaker.clone(),
        });
        cursor = end_ms;
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start_ms: i64, end_ms: i64, text: &str) -> Segment {
        Segment {
            start_ms,
            end_ms,
            text: text.to_string(),
            speaker: None,
        }
    }

    fn word(text: &str, start_ms: i64, end_ms: i64) -> Word {
        Word {
            text: text.to_string(),
            start_ms,
            end_ms,
            speaker: Some("A".to_string()),
        }
    }

    #[test]
    fn equal_count_copies_original_timing() {
        let seg = segment(0, 2000, "helo world");
        let original = vec![word("hello", 0, 900), word("world", 1000, 2000)];

        let (words, drifted) = align_segment(&seg, &original);

        assert!(!drifted);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "helo");
        assert_eq!((words[0].start_ms, words[0].end_ms), (0, 900));
        assert_eq!((words[1].start_ms, words[1].end_ms), (1000, 2000));
        assert_eq!(words[0].speaker.as_deref(), Some("A"));
    }

    #[test]
    fn whitespace_only_edit_is_count_preserving() {
        let seg = segment(0, 1000, "  hello   world  ");
        let original = vec![word("hello", 0, 400), word("world", 500, 1000)];

        let (words, drifted) = align_segment(&seg, &original);

        assert!(!drifted);
        assert_eq!(words[0].text, "hello");
        assert_eq!(words[1].text, "world");
    }

    #[test]
    fn empty_text_yields_no_words() {
        let seg = segment(0, 1000, "   ");
        let original = vec![word("gone", 0, 1000)];

        let (words, drifted) = align_segment(&seg, &original);

        assert!(words.is_empty());
        assert!(!drifted);
    }

    #[test]
    fn count_change_falls_back_to_distribution() {
        let seg = segment(1000, 5000, "a b c");
        let original = vec![word("a", 1000, 2800), word("b", 3000, 5000)];

        let (words, drifted) = align_segment(&seg, &original);

        assert!(drifted);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].duration_ms(), 1333);
        assert_eq!(words[1].duration_ms(), 1333);
        assert_eq!(words[2].duration_ms(), 1334);
        assert_eq!(words[0].start_ms, 1000);
        assert_eq!(words[2].end_ms, 5000);
    }

    #[test]
    fn distribution_is_contiguous_and_covers_the_span() {
        let seg = segment(250, 3890, "uno dos tres cuatro");
        let tokens: Vec<&str> = seg.text.split_whitespace().collect();

        let words = distribute(&seg, &tokens);

        assert_eq!(words[0].start_ms, 250);
        assert_eq!(words.last().unwrap().end_ms, 3890);
        for pair in words.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
        let total: i64 = words.iter().map(|w| w.duration_ms()).sum();
        assert_eq!(total, 3890 - 250);
    }

    #[test]
    fn distribution_favors_longer_tokens() {
        let seg = segment(0, 7000, "hi there");
        let tokens: Vec<&str> = seg.text.split_whitespace().collect();

        let words = distribute(&seg, &tokens);

        // 2 of 7 chars vs 5 of 7 chars
        assert_eq!(words[0].duration_ms(), 2000);
        assert_eq!(words[1].duration_ms(), 5000);
    }

    #[test]
    fn distribution_counts_chars_not_bytes() {
        let seg = segment(0, 600, "año set");
        let tokens: Vec<&str> = seg.text.split_whitespace().collect();

        let words = distribute(&seg, &tokens);

        // equal char lengths despite "año" being 4 bytes
        assert_eq!(words[0].duration_ms(), 300);
        assert_eq!(words[1].duration_ms(), 300);
    }

    #[test]
    fn distributed_words_take_the_segment_speaker() {
        let mut seg = segment(0, 900, "x y z");
        seg.speaker = Some("B".to_string());
        let tokens: Vec<&str> = seg.text.split_whitespace().collect();

        let words = distribute(&seg, &tokens);

        assert!(words.iter().all(|w| w.speaker.as_deref() == Some("B")));
    }
}
