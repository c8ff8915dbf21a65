use tracing::{debug, warn};

use crate::align::align_segment;
use crate::error::Error;
use crate::types::{Transcript, Word};

/// Non-fatal notice that a segment edit changed its token count, forcing
/// proportional redistribution instead of exact original timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftWarning {
    pub segment: usize,
    pub original_words: usize,
    pub edited_tokens: usize,
}

/// Output of one reconciliation pass: the transcript with its invariants
/// restored, plus every timing drift encountered along the way.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub transcript: Transcript,
    pub drift: Vec<DriftWarning>,
}

/// Restore the transcript invariants after segment texts were edited.
///
/// Segments are the source of truth for text; the stale word list is the
/// source of truth for timing. One linear pass: each segment claims the
/// original words whose start time falls within its interval (a cursor over
/// the time-ordered word list, no backtracking and no cross-segment token
/// borrowing), re-aligns its edited text against them, and contributes the
/// result to the rebuilt word list. `text` becomes the space-joined segment
/// texts.
///
/// Word and caption data are rebuilt whole, never patched incrementally.
///
/// # Errors
///
/// A segment with `end <= start` means the editor violated the read-only
/// timing contract; the whole run is rejected before anything is derived.
pub fn reconcile(transcript: &Transcript) -> Result<Reconciled, Error> {
    validate(transcript)?;

    let mut words: Vec<Word> = Vec::with_capacity(transcript.words.len());
    let mut drift = Vec::new();
    let mut cursor = 0;

    for (index, segment) in transcript.segments.iter().enumerate() {
        while cursor < transcript.words.len()
            && transcript.words[cursor].start_ms < segment.start_ms
        {
            cursor += 1;
        }
        let from = cursor;
        while cursor < transcript.words.len() && transcript.words[cursor].start_ms < segment.end_ms
        {
            cursor += 1;
        }
        let original = &transcript.words[from..cursor];

        let (aligned, drifted) = align_segment(segment, original);
        if drifted {
            warn!(
                segment = index,
                original_words = original.len(),
                edited_tokens = aligned.len(),
                "token count changed; redistributing segment interval"
            );
            drift.push(DriftWarning {
                segment: index,
                original_words: original.len(),
                edited_tokens: aligned.len(),
            });
        }
        words.extend(aligned);
    }

    let text = transcript
        .segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        segments = transcript.segments.len(),
        words = words.len(),
        drifted = drift.len(),
        "transcript reconciled"
    );

    Ok(Reconciled {
        transcript: Transcript {
            text,
            segments: transcript.segments.clone(),
            words,
            extra: transcript.extra.clone(),
        },
        drift,
    })
}

fn validate(transcript: &Transcript) -> Result<(), Error> {
    for (index, segment) in transcript.segments.iter().enumerate() {
        if segment.end_ms <= segment.start_ms {
            return Err(Error::SegmentTiming {
                index,
                start_ms: segment.start_ms,
                end_ms: segment.end_ms,
            });
        }
    }
    Ok(())
}
