//! Highlight detection orchestration.
//!
//! Run order: chapter fast path, signal adapters, window scorer, selector,
//! boundary refiner. Every run works on an immutable input snapshot and
//! shares nothing with other runs.

use crate::audio;
use crate::config::DetectionConfig;
use crate::error::{Error, Result};
use crate::keywords;
use crate::refine::refine_boundaries;
use crate::scene;
use crate::score::score_windows;
use crate::select::select_top;
use crate::types::{Chapter, ClipCandidate, SignalSet, WordSegment};
use std::path::Path;
use std::thread;

/// Chapter titles are truncated to this length in reason strings
const CHAPTER_TITLE_LEN: usize = 40;

/// Detect highlights from media files, transcript words, and chapters.
///
/// Pre-chaptered videos short-circuit before any signal extraction; otherwise
/// the signal adapters run and the heuristic scan takes over. Either media
/// path may be absent, which leaves the corresponding signal empty.
///
/// # Errors
///
/// Returns [`Error::NoHighlights`] when the heuristic scan produces an empty
/// candidate pool. Adapter failures never surface; they degrade the signals.
pub fn find_highlights(
    audio_path: Option<&Path>,
    video_path: Option<&Path>,
    words: &[WordSegment],
    chapters: &[Chapter],
    config: &DetectionConfig,
) -> Result<Vec<ClipCandidate>> {
    if let Some(clips) = chapter_fast_path(chapters, config) {
        tracing::info!(count = clips.len(), "using chapter-based clips");
        return Ok(clips);
    }

    let signals = collect_signals(audio_path, video_path, words, config);
    detect(words, &signals, config)
}

/// Detect highlights from already-extracted signals.
///
/// Same pipeline as [`find_highlights`] minus the adapters; useful when the
/// caller computes or caches signals itself.
///
/// # Errors
///
/// Returns [`Error::NoHighlights`] when the candidate pool is empty.
pub fn detect_from_signals(
    words: &[WordSegment],
    chapters: &[Chapter],
    signals: &SignalSet,
    config: &DetectionConfig,
) -> Result<Vec<ClipCandidate>> {
    if let Some(clips) = chapter_fast_path(chapters, config) {
        tracing::info!(count = clips.len(), "using chapter-based clips");
        return Ok(clips);
    }

    detect(words, signals, config)
}

/// Use chapter markers as clips when enough of them fit the duration bounds.
///
/// Chapters within `[min, max]` become candidates with score 1.0 in input
/// order. Returns `None` when fewer than `max_clips` qualify, falling through
/// to the heuristic scan.
pub fn chapter_fast_path(
    chapters: &[Chapter],
    config: &DetectionConfig,
) -> Option<Vec<ClipCandidate>> {
    let fitting: Vec<ClipCandidate> = chapters
        .iter()
        .filter(|ch| {
            let duration = ch.duration();
            duration >= config.min_duration && duration <= config.max_duration
        })
        .map(|ch| {
            ClipCandidate::new(
                ch.start,
                ch.end,
                1.0,
                format!("Chapter: {}", title_prefix(&ch.title)),
            )
        })
        .collect();

    if fitting.len() >= config.max_clips {
        Some(fitting.into_iter().take(config.max_clips).collect())
    } else {
        None
    }
}

/// Run the three signal adapters over their inputs.
///
/// The scene scan shells out to ffmpeg and runs on its own thread while the
/// loudness curve and keyword windows are computed here; each adapter reads
/// only its own input and failures degrade to empty signals.
pub fn collect_signals(
    audio_path: Option<&Path>,
    video_path: Option<&Path>,
    words: &[WordSegment],
    config: &DetectionConfig,
) -> SignalSet {
    thread::scope(|scope| {
        let cuts = scope.spawn(move || {
            video_path
                .map(scene::detect_scene_cuts)
                .unwrap_or_default()
        });

        let energy = audio_path.map(audio::loudness_from_wav).unwrap_or_default();
        let keyword_hits = keywords::keyword_windows(words, &config.keywords);

        SignalSet {
            energy,
            scene_cuts: cuts.join().expect("scene adapter panicked"),
            keywords: keyword_hits,
        }
    })
}

/// Heuristic scan: score, select, refine.
fn detect(
    words: &[WordSegment],
    signals: &SignalSet,
    config: &DetectionConfig,
) -> Result<Vec<ClipCandidate>> {
    let pool = score_windows(words, signals, config);
    if pool.is_empty() {
        return Err(Error::NoHighlights);
    }

    let selected = select_top(
        &pool,
        config.min_duration,
        config.max_duration,
        config.max_clips,
    );

    let refined: Vec<ClipCandidate> = selected
        .iter()
        .map(|clip| {
            refine_boundaries(
                clip,
                words,
                config.min_duration,
                config.max_duration,
                config.snap_tolerance,
            )
        })
        .collect();

    tracing::info!(count = refined.len(), "selected highlight clips");
    Ok(refined)
}

fn title_prefix(title: &str) -> String {
    title.chars().take(CHAPTER_TITLE_LEN).collect()
}
