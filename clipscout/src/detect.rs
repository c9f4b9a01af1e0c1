//! Detect subcommand - find highlight clips and write them as JSON.

use crate::cli::TuningArgs;
use crate::transcript;
use clipscout_detect::config::DetectionConfig;
use clipscout_detect::engine;
use clipscout_detect::error::Error as DetectError;
use clipscout_detect::types::ClipCandidate;
use color_eyre::Section;
use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};

/// CLI arguments for highlight detection.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the source audio track (WAV)
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Path to the source video file (requires ffmpeg on PATH)
    #[arg(long)]
    pub video: Option<PathBuf>,

    /// Word-level transcript JSON (whisper-style word list)
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Subtitle transcript (SRT); cue edges stand in for word edges
    #[arg(long, conflicts_with = "words")]
    pub transcript: Option<PathBuf>,

    /// Chapter markers JSON
    #[arg(long)]
    pub chapters: Option<PathBuf>,

    /// Output JSON path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

/// Resolved configuration for highlight detection.
#[derive(Debug)]
pub struct Config {
    pub audio: Option<PathBuf>,
    pub video: Option<PathBuf>,
    pub words: Option<PathBuf>,
    pub transcript: Option<PathBuf>,
    pub chapters: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub detection: DetectionConfig,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            audio: args.audio,
            video: args.video,
            words: args.words,
            transcript: args.transcript,
            chapters: args.chapters,
            output: args.output,
            detection: args.tuning.into_config()?,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let words = transcript::load_words(config.words.as_deref(), config.transcript.as_deref())?;
    let chapters = config
        .chapters
        .as_deref()
        .map(transcript::chapters_from_json)
        .transpose()?
        .unwrap_or_default();

    tracing::info!(
        words = words.len(),
        chapters = chapters.len(),
        "running highlight detection"
    );

    let clips = engine::find_highlights(
        config.audio.as_deref(),
        config.video.as_deref(),
        &words,
        &chapters,
        &config.detection,
    )
    .map_err(|e| match e {
        DetectError::NoHighlights => {
            let suggestion = e.user_message();
            eyre::Report::new(e).suggestion(suggestion)
        }
        other => eyre::Report::new(other),
    })?;

    write_report(&clips, config.output.as_deref())
}

/// Write the ranked candidates as pretty JSON to a file or stdout.
fn write_report(clips: &[ClipCandidate], output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(clips).wrap_err("failed to serialize clips")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .wrap_err_with(|| format!("failed to write report: {:?}", path.display()))?;
            tracing::info!(path = ?path.display(), count = clips.len(), "wrote clip report");
        }
        None => println!("{json}"),
    }

    Ok(())
}
