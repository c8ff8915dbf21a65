use serde::{Deserialize, Serialize};

/// The smallest timed unit: one token with its own start/end.
///
/// Wire field names are `start`/`end` (integer milliseconds); internally the
/// `*_ms` suffix keeps the unit explicit at every use site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(rename = "start")]
    pub start_ms: i64,
    #[serde(rename = "end")]
    pub end_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Word {
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// A timestamped span of speech with attributed text and speaker.
///
/// Segment `start`/`end` are the timing ground truth: human editors may change
/// `text` freely but never the interval. The reconciler treats an interval as
/// read-only when re-deriving word timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "start")]
    pub start_ms: i64,
    #[serde(rename = "end")]
    pub end_ms: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Segment {
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// The persisted transcript document: the single mutable source of truth.
///
/// Invariant (restored by [`crate::reconcile::reconcile`] after an edit):
/// `text` is the space-joined concatenation of all segment texts in order, and
/// `words` flattened in time order equals the concatenation of the
/// tokenization of each segment's text in order.
///
/// Unknown top-level fields (provider metadata such as `confidence` or
/// `transcript_id`) are captured in `extra` and survive a round-trip, so
/// re-saving a reconciled document never strips what the transcription
/// provider wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub segments: Vec<Segment>,
    pub words: Vec<Word>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Transcript {
    pub fn from_json(raw: &str) -> Result<Self, crate::error::Error> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, crate::error::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A displayed subtitle unit, chunked independently of segmentation.
///
/// Derived data: regenerated whole on every run, never persisted and never
/// merged with a prior version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionCue {
    /// 1-based, consecutive.
    pub index: usize,
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
}
