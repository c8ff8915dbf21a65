#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error("segment {index}: end ({end_ms}ms) is not after start ({start_ms}ms)")]
    SegmentTiming {
        index: usize,
        start_ms: i64,
        end_ms: i64,
    },
}
