use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use retime_storage::{Artifact, write_all};
use retime_transcript::{CaptionConfig, Transcript, caption, reconcile, render};

#[derive(Parser)]
#[command(
    name = "retime",
    about = "Reconcile transcript edits and regenerate text, timestamped text, and SRT artifacts"
)]
struct Cli {
    /// Persisted transcript JSON (segment texts may have been edited)
    input: PathBuf,

    /// Directory for regenerated artifacts (defaults to the input's directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(long, env = "RETIME_MAX_CUE_CHARS", default_value_t = CaptionConfig::default().max_chars)]
    max_cue_chars: usize,

    #[arg(long, env = "RETIME_MAX_CUE_DURATION_MS", default_value_t = CaptionConfig::default().max_duration_ms)]
    max_cue_duration_ms: i64,

    #[arg(long, env = "RETIME_MAX_GAP_MS", default_value_t = CaptionConfig::default().max_gap_ms)]
    max_gap_ms: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let report = run(&cli)?;

    for backup in &report.backups {
        println!("backed up {}", backup.display());
    }
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<retime_storage::WriteReport> {
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("read {}", cli.input.display()))?;
    let transcript = Transcript::from_json(&raw)
        .with_context(|| format!("parse {}", cli.input.display()))?;

    let reconciled = reconcile(&transcript)?;
    for drift in &reconciled.drift {
        tracing::warn!(
            segment = drift.segment,
            original_words = drift.original_words,
            edited_tokens = drift.edited_tokens,
            "segment timing redistributed"
        );
    }

    let config = CaptionConfig {
        max_chars: cli.max_cue_chars,
        max_duration_ms: cli.max_cue_duration_ms,
        max_gap_ms: cli.max_gap_ms,
    };
    let cues = caption::chunk(&reconciled.transcript.words, &config);

    let out_dir = match &cli.out_dir {
        Some(dir) => dir.clone(),
        None => cli
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let base = base_name(&cli.input);

    // everything is rendered before anything is written
    let artifacts = vec![
        Artifact::new(
            out_dir.join(format!("{base}_transcript.txt")),
            render::plain_text(&reconciled.transcript),
        ),
        Artifact::new(
            out_dir.join(format!("{base}_transcript_detailed.txt")),
            render::timestamped_text(&reconciled.transcript),
        ),
        Artifact::new(
            out_dir.join(format!("{base}_subtitles.srt")),
            render::subtitles(&cues),
        ),
        Artifact::new(cli.input.clone(), reconciled.transcript.to_json()?),
    ];

    write_all(&artifacts).context("write artifacts")
}

/// Artifact base name: the input's file stem, minus the transcription
/// provider's `_transcription` suffix when present.
fn base_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    stem.strip_suffix("_transcription").unwrap_or(stem).to_string()
}
