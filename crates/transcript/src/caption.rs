use crate::types::{CaptionCue, Word};

/// Tunable limits for grouping words into subtitle cues.
///
/// Defaults target two 40-character display lines per cue, at most five
/// seconds on screen, and a cue break at any silence longer than 700 ms.
#[derive(Debug, Clone)]
pub struct CaptionConfig {
    pub max_chars: usize,
    pub max_duration_ms: i64,
    pub max_gap_ms: i64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_chars: 80,
            max_duration_ms: 5000,
            max_gap_ms: 700,
        }
    }
}

/// Group the canonical word list into caption cues.
///
/// Greedy single pass, independent of segment boundaries: a cue may span the
/// tail of one segment and the head of the next. A word joins the current cue
/// unless doing so would exceed the character or duration limit, or the
/// silence before it exceeds the gap threshold; any of those closes the cue
/// and the word opens the next one. A word that alone exceeds the limits is
/// still emitted as its own oversized cue, never dropped or truncated.
///
/// Punctuation shapes cues into phrases: sentence-final punctuation closes
/// the cue after its word; clause punctuation closes it once the cue holds at
/// least three words.
pub fn chunk(words: &[Word], config: &CaptionConfig) -> Vec<CaptionCue> {
    let mut cues: Vec<CaptionCue> = Vec::new();
    let mut current: Vec<&Word> = Vec::new();
    let mut chars = 0;

    for word in words {
        let word_chars = word.text.chars().count();

        if let Some(last) = current.last() {
            let gap_ms = word.start_ms - last.end_ms;
            let grown_chars = chars + 1 + word_chars;
            let grown_duration_ms = word.end_ms - current[0].start_ms;

            if gap_ms > config.max_gap_ms
                || grown_chars > config.max_chars
                || grown_duration_ms > config.max_duration_ms
            {
                close(&mut cues, &mut current);
                chars = 0;
            }
        }

        chars += if current.is_empty() {
            word_chars
        } else {
            1 + word_chars
        };
        current.push(word);

        if ends_sentence(&word.text) || (ends_clause(&word.text) && current.len() >= 3) {
            close(&mut cues, &mut current);
            chars = 0;
        }
    }

    close(&mut cues, &mut current);
    cues
}

fn close(cues: &mut Vec<CaptionCue>, current: &mut Vec<&Word>) {
    let (Some(first), Some(last)) = (current.first(), current.last()) else {
        return;
    };

    cues.push(CaptionCue {
        index: cues.len() + 1,
        start_ms: first.start_ms,
        end_ms: last.end_ms,
        text: current
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    });
    current.clear();
}

fn ends_sentence(text: &str) -> bool {
    matches!(text.trim_end().chars().last(), Some('.' | '!' | '?'))
}

fn ends_clause(text: &str) -> bool {
    matches!(text.trim_end().chars().last(), Some(',' | ';' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start_ms: i64, end_ms: i64) -> Word {
        Word {
            text: text.to_string(),
            start_ms,
            end_ms,
            speaker: None,
        }
    }

    fn contiguous(texts: &[&str], word_ms: i64) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| word(t, i as i64 * word_ms, (i as i64 + 1) * word_ms))
            .collect()
    }

    #[test]
    fn char_limit_closes_before_the_triggering_word() {
        let words = contiguous(&["aaaa", "bbbb", "cccc"], 100);
        let config = CaptionConfig {
            max_chars: 9, // "aaaa bbbb" fits, adding " cccc" does not
            ..Default::default()
        };

        let cues = chunk(&words, &config);

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "aaaa bbbb");
        assert_eq!(cues[1].text, "cccc");
        assert_eq!(cues[1].start_ms, 200);
    }

    #[test]
    fn duration_limit_closes_the_cue() {
        let words = contiguous(&["a", "b", "c", "d"], 2000);
        let config = CaptionConfig {
            max_duration_ms: 4000,
            ..Default::default()
        };

        let cues = chunk(&words, &config);

        assert_eq!(cues.len(), 2);
        assert_eq!((cues[0].start_ms, cues[0].end_ms), (0, 4000));
        assert_eq!((cues[1].start_ms, cues[1].end_ms), (4000, 8000));
    }

    #[test]
    fn long_silence_forces_a_break() {
        let words = vec![
            word("before", 0, 400),
            word("after", 2000, 2400), // 1600ms gap
        ];

        let cues = chunk(&words, &CaptionConfig::default());

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "before");
        assert_eq!(cues[1].text, "after");
    }

    #[test]
    fn oversized_single_word_is_emitted_whole() {
        let words = vec![word("pneumonoultramicroscopicsilicovolcanoconiosis", 0, 800)];
        let config = CaptionConfig {
            max_chars: 10,
            ..Default::default()
        };

        let cues = chunk(&words, &config);

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "pneumonoultramicroscopicsilicovolcanoconiosis");
    }

    #[test]
    fn sentence_punctuation_closes_the_cue() {
        let words = contiguous(&["it", "ended.", "next"], 300);

        let cues = chunk(&words, &CaptionConfig::default());

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "it ended.");
        assert_eq!(cues[1].text, "next");
    }

    #[test]
    fn clause_punctuation_needs_three_words() {
        let words = contiguous(&["so,", "it", "went,", "on"], 300);

        let cues = chunk(&words, &CaptionConfig::default());

        // "so," alone does not close; "went," as the third word does
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "so, it went,");
        assert_eq!(cues[1].text, "on");
    }

    #[test]
    fn indices_are_one_based_and_consecutive() {
        let words = vec![
            word("a.", 0, 100),
            word("b.", 200, 300),
            word("c.", 400, 500),
        ];

        let cues = chunk(&words, &CaptionConfig::default());

        let indices: Vec<usize> = cues.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_produces_no_cues() {
        assert!(chunk(&[], &CaptionConfig::default()).is_empty());
    }
}
