//! Core types for clipscout-detect.

use serde::{Deserialize, Serialize};

/// A transcribed word with timestamps.
///
/// Produced by an external transcription collaborator; ordered by `start`
/// ascending, not necessarily gap-free. `confidence` is informational only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordSegment {
    /// Transcribed word text
    pub text: String,
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
    /// Transcription confidence in [0, 1]
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    1.0
}

impl WordSegment {
    /// Create a word segment with full confidence.
    pub fn new(text: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            confidence: 1.0,
        }
    }
}

/// An externally supplied chapter marker with `end > start`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter title
    pub title: String,
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
}

impl Chapter {
    /// Create a chapter marker.
    pub fn new(title: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Chapter duration in seconds.
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// One point on the audio loudness curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    /// Timestamp in seconds, at the RMS window start
    pub time: f32,
    /// Root-mean-square amplitude, non-negative
    pub rms: f32,
}

/// A contiguous transcript span around a keyword hit.
///
/// `density` is the fraction of words in the span that are themselves
/// keywords. Windows from nearby hits may overlap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordWindow {
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
    /// Keyword fraction in [0, 1]
    pub density: f32,
}

/// A scored clip window, the engine's output unit.
///
/// Immutable once produced; the refiner returns a replacement value rather
/// than mutating in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipCandidate {
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
    /// Fusion score, non-negative
    pub score: f32,
    /// Human-readable tags for the signals that fired
    pub reason: String,
}

impl ClipCandidate {
    /// Create a clip candidate.
    pub fn new(start: f32, end: f32, score: f32, reason: impl Into<String>) -> Self {
        Self {
            start,
            end,
            score,
            reason: reason.into(),
        }
    }

    /// Clip duration in seconds.
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// Immutable snapshot of the three extracted signals for one detection run.
///
/// Any signal may be empty; scoring degrades gracefully instead of failing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalSet {
    /// Audio loudness curve
    pub energy: Vec<EnergySample>,
    /// Scene-change timestamps in seconds
    pub scene_cuts: Vec<f32>,
    /// Keyword-density windows from the transcript
    pub keywords: Vec<KeywordWindow>,
}

impl SignalSet {
    /// True when every signal is empty.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty() && self.scene_cuts.is_empty() && self.keywords.is_empty()
    }
}
