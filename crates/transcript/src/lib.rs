//! Reconciliation engine for human-edited speech transcripts.
//!
//! A transcription provider writes a document with three views of the same
//! speech: full text, speaker-attributed segments, and word-level timings.
//! A human then edits segment *text* (never timing). This crate restores the
//! cross-view invariants after such an edit and re-derives every downstream
//! artifact deterministically: realigned words, caption cues, and the three
//! rendered outputs.

pub mod align;
pub mod caption;
pub mod error;
pub mod reconcile;
pub mod render;
pub mod types;

pub use caption::{CaptionConfig, chunk};
pub use error::Error;
pub use reconcile::{DriftWarning, Reconciled, reconcile};
pub use types::{CaptionCue, Segment, Transcript, Word};
