//! Pure renderers from reconciled data to the three textual artifacts.
//!
//! No side effects: persistence is the caller's job, which is what lets the
//! whole artifact set be computed in memory before anything is overwritten.

use crate::types::{CaptionCue, Transcript};

/// Maximum characters per displayed subtitle line; cue text wraps onto at
/// most two such lines.
const MAX_LINE_CHARS: usize = 40;

/// The full text, undecorated.
pub fn plain_text(transcript: &Transcript) -> String {
    let mut out = transcript.text.trim().to_string();
    out.push('\n');
    out
}

/// One line per segment: `[HH:MM:SS.mmm - HH:MM:SS.mmm] (speaker) text`.
///
/// The speaker parenthetical is omitted for unattributed segments.
pub fn timestamped_text(transcript: &Transcript) -> String {
    let mut out = String::new();
    for segment in &transcript.segments {
        out.push_str(&format!(
            "[{} - {}]",
            clock_time(segment.start_ms),
            clock_time(segment.end_ms)
        ));
        if let Some(speaker) = &segment.speaker {
            out.push_str(&format!(" ({speaker})"));
        }
        out.push(' ');
        out.push_str(&segment.text);
        out.push('\n');
    }
    out
}

/// Standard SRT cue records: index, `HH:MM:SS,mmm --> HH:MM:SS,mmm`, wrapped
/// text, blank-line separator.
pub fn subtitles(cues: &[CaptionCue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            cue.index,
            srt_time(cue.start_ms),
            srt_time(cue.end_ms),
            wrap_cue_text(&cue.text, MAX_LINE_CHARS)
        ));
    }
    out
}

fn time_parts(ms: i64) -> (i64, i64, i64, i64) {
    let ms = ms.max(0);
    (
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1000,
        ms % 1000,
    )
}

fn clock_time(ms: i64) -> String {
    let (h, m, s, millis) = time_parts(ms);
    format!("{h:02}:{m:02}:{s:02}.{millis:03}")
}

fn srt_time(ms: i64) -> String {
    let (h, m, s, millis) = time_parts(ms);
    format!("{h:02}:{m:02}:{s:02},{millis:03}")
}

/// Wrap cue text onto at most two lines of at most `max_line` characters,
/// splitting at the last space at or before the limit. Never truncates: the
/// second line carries all remaining text, and a single unbreakable word
/// longer than the limit stays whole.
fn wrap_cue_text(text: &str, max_line: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_line {
        return text.to_string();
    }

    let mut split = None;
    for (count, (idx, ch)) in text.char_indices().enumerate() {
        if count > max_line {
            break;
        }
        if ch == ' ' {
            split = Some(idx);
        }
    }

    let Some(split) = split else {
        // one unbreakable run; find the first space anywhere, or give up
        return match text.find(' ') {
            Some(idx) => format!("{}\n{}", &text[..idx], text[idx..].trim_start()),
            None => text.to_string(),
        };
    };

    let line1 = text[..split].trim_end();
    let line2 = text[split..].trim_start();
    format!("{line1}\n{line2}")
}
