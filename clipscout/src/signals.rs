//! Signals subcommand - inspect extracted signals without running selection.
//!
//! Useful for tuning weights and keyword lists: shows what each adapter
//! actually produced for a given input before any fusion happens.

use crate::cli::TuningArgs;
use crate::transcript;
use clipscout_detect::audio;
use clipscout_detect::config::DetectionConfig;
use clipscout_detect::engine;
use eyre::Result;
use std::path::PathBuf;

/// CLI arguments for signal inspection.
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

    /// Minimum gap between reported energy peaks in seconds
    /// (default: half the maximum clip duration)
    #[arg(long)]
    pub peak_gap: Option<f32>,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

/// Resolved configuration for signal inspection.
#[derive(Debug)]
pub struct Config {
    pub audio: Option<PathBuf>,
    pub video: Option<PathBuf>,
    pub words: Option<PathBuf>,
    pub transcript: Option<PathBuf>,
    pub peak_gap: Option<f32>,
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
            peak_gap: args.peak_gap,
            detection: args.tuning.into_config()?,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let words = transcript::load_words(config.words.as_deref(), config.transcript.as_deref())?;

    let signals = engine::collect_signals(
        config.audio.as_deref(),
        config.video.as_deref(),
        &words,
        &config.detection,
    );

    let peak_gap = config
        .peak_gap
        .unwrap_or(0.5 * config.detection.max_duration);
    let peaks = audio::energy_peaks(&signals.energy, peak_gap);

    println!("words:           {}", words.len());
    println!("energy samples:  {}", signals.energy.len());
    println!("energy peaks:    {}", format_times(&peaks));
    println!("scene cuts:      {}", format_times(&signals.scene_cuts));
    println!("keyword windows: {}", signals.keywords.len());
    for window in &signals.keywords {
        println!(
            "  {:.1}-{:.1}s density {:.2}",
            window.start, window.end, window.density
        );
    }

    Ok(())
}

fn format_times(times: &[f32]) -> String {
    if times.is_empty() {
        return "none".to_string();
    }

    times
        .iter()
        .map(|t| format!("{t:.1}s"))
        .collect::<Vec<_>>()
        .join(", ")
}
