//! Transcript and chapter input loading.
//!
//! Words arrive either as a whisper-style word-timing JSON list or as an SRT
//! file whose cue edges stand in for word edges; chapters as a JSON list in
//! yt-dlp naming.

use clipscout_detect::types::{Chapter, WordSegment};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use srtlib::Subtitles;
use std::path::Path;

/// One word entry in a whisper-style word-timing JSON file.
#[derive(Debug, Deserialize)]
struct WordRecord {
    #[serde(alias = "word")]
    text: String,
    start: f32,
    end: f32,
    #[serde(default = "full_confidence", alias = "probability")]
    confidence: f32,
}

fn full_confidence() -> f32 {
    1.0
}

/// One chapter entry, yt-dlp naming accepted.
#[derive(Debug, Deserialize)]
struct ChapterRecord {
    #[serde(default)]
    title: String,
    #[serde(alias = "start_time")]
    start: f32,
    #[serde(alias = "end_time")]
    end: f32,
}

/// Load words from whichever transcript form was given; none yields an empty
/// list.
pub fn load_words(words: Option<&Path>, transcript: Option<&Path>) -> Result<Vec<WordSegment>> {
    match (words, transcript) {
        (Some(path), _) => words_from_json(path),
        (None, Some(path)) => words_from_srt(path),
        (None, None) => Ok(Vec::new()),
    }
}

/// Load word-level timings from a whisper-style JSON list.
pub fn words_from_json(path: &Path) -> Result<Vec<WordSegment>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read words: {:?}", path.display()))?;
    let records: Vec<WordRecord> = serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse words: {:?}", path.display()))?;

    Ok(records
        .into_iter()
        .map(|r| WordSegment {
            text: r.text,
            start: r.start,
            end: r.end,
            confidence: r.confidence,
        })
        .collect())
}

/// Load an SRT transcript as coarse word segments.
pub fn words_from_srt(path: &Path) -> Result<Vec<WordSegment>> {
    let subtitles = Subtitles::parse_from_file(path, None)
        .wrap_err_with(|| format!("failed to parse srt: {:?}", path.display()))?;

    Ok(subtitles
        .into_iter()
        .map(|s| WordSegment::new(s.text, timestamp_secs(&s.start_time), timestamp_secs(&s.end_time)))
        .collect())
}

/// Load chapter markers, dropping entries without positive duration.
pub fn chapters_from_json(path: &Path) -> Result<Vec<Chapter>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read chapters: {:?}", path.display()))?;
    let records: Vec<ChapterRecord> = serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse chapters: {:?}", path.display()))?;

    Ok(records
        .into_iter()
        .filter(|r| r.end > r.start)
        .map(|r| Chapter::new(r.title, r.start, r.end))
        .collect())
}

fn timestamp_secs(ts: &srtlib::Timestamp) -> f32 {
    let (hours, minutes, seconds, milliseconds) = ts.get();
    hours as f32 * 3600.0 + minutes as f32 * 60.0 + seconds as f32 + milliseconds as f32 / 1000.0
}
