//! Sliding-window fusion scoring across the three signals.

use crate::config::DetectionConfig;
use crate::types::{ClipCandidate, EnergySample, KeywordWindow, SignalSet, WordSegment};
use std::thread;

/// Scan duration when the transcript is empty
const FALLBACK_DURATION: f32 = 120.0;

/// Keyword densities are small fractions; scale before clamping to [0, 1]
const KEYWORD_DENSITY_SCALE: f32 = 3.0;

/// Scene score saturates at this many cuts per window
const SCENE_SATURATION_CUTS: usize = 2;

/// Score all candidate windows across the three window sizes.
///
/// The timeline runs from zero to the last word's end (120s with no words).
/// Each window size slides in `config.step` increments; every position
/// becomes a candidate, unpruned. The three size scans run in parallel over
/// the shared immutable inputs and merge in fixed size order (min, mid, max),
/// so candidate generation order is deterministic.
pub fn score_windows(
    words: &[WordSegment],
    signals: &SignalSet,
    config: &DetectionConfig,
) -> Vec<ClipCandidate> {
    // With no words and no signals there is nothing to score; an empty pool
    // lets the engine raise its no-highlights condition
    if words.is_empty() && signals.is_empty() {
        return Vec::new();
    }

    let total = words.last().map_or(FALLBACK_DURATION, |w| w.end);
    let norm = EnergyNorm::from_curve(&signals.energy);
    let norm = &norm;

    let pools = thread::scope(|scope| {
        let handles = config
            .window_sizes()
            .map(|size| scope.spawn(move || scan_size(size, total, signals, norm, config)));
        handles.map(|h| h.join().expect("window scan panicked"))
    });

    pools.into_iter().flatten().collect()
}

/// Slide one window size across the timeline.
fn scan_size(
    size: f32,
    total: f32,
    signals: &SignalSet,
    norm: &EnergyNorm,
    config: &DetectionConfig,
) -> Vec<ClipCandidate> {
    let mut pool = Vec::new();
    let mut pos = 0.0f32;

    while pos + size <= total {
        let end = pos + size;

        let energy = energy_score(&signals.energy, norm, pos, end);
        let keyword = keyword_score(&signals.keywords, pos, end);
        let scene = scene_score(&signals.scene_cuts, pos, end);

        let combined = config.energy_weight * energy
            + config.keyword_weight * keyword
            + config.scene_weight * scene;

        pool.push(ClipCandidate {
            start: pos,
            end,
            score: combined,
            reason: reason(energy, keyword, scene, config),
        });

        pos += config.step;
    }

    pool
}

/// Global min/max RMS for normalizing per-window energy.
struct EnergyNorm {
    min: f32,
    range: f32,
}

impl EnergyNorm {
    fn from_curve(curve: &[EnergySample]) -> Self {
        if curve.is_empty() {
            return Self {
                min: 0.0,
                range: 1.0,
            };
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for sample in curve {
            min = min.min(sample.rms);
            max = max.max(sample.rms);
        }

        // A flat curve normalizes to zero instead of dividing by zero
        let range = max - min;
        Self {
            min,
            range: if range > 0.0 { range } else { 1.0 },
        }
    }
}

/// Mean normalized RMS over samples inside the window; 0 with none.
fn energy_score(curve: &[EnergySample], norm: &EnergyNorm, start: f32, end: f32) -> f32 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for sample in curve {
        if sample.time >= start && sample.time < end {
            sum += (sample.rms - norm.min) / norm.range;
            count += 1;
        }
    }

    if count == 0 { 0.0 } else { sum / count as f32 }
}

/// Highest density among keyword windows fully contained in the clip window.
///
/// Partial containment does not count; the clip must hold the whole burst.
fn keyword_score(windows: &[KeywordWindow], start: f32, end: f32) -> f32 {
    let best = windows
        .iter()
        .filter(|w| w.start >= start && w.end <= end)
        .map(|w| w.density)
        .fold(0.0, f32::max);

    (best * KEYWORD_DENSITY_SCALE).min(1.0)
}

/// Cut count saturating at two cuts per window.
fn scene_score(cuts: &[f32], start: f32, end: f32) -> f32 {
    let in_window = cuts.iter().filter(|&&t| t >= start && t < end).count();
    (in_window as f32 / SCENE_SATURATION_CUTS as f32).min(1.0)
}

fn reason(energy: f32, keyword: f32, scene: f32, config: &DetectionConfig) -> String {
    // Inclusive comparisons: a single scene cut lands exactly on the 0.5
    // threshold and still deserves its tag
    let mut parts = Vec::new();
    if energy >= config.energy_reason_threshold {
        parts.push("high energy");
    }
    if keyword >= config.keyword_reason_threshold {
        parts.push("keyword");
    }
    if scene >= config.scene_reason_threshold {
        parts.push("scene change");
    }

    if parts.is_empty() {
        "multi-signal".to_string()
    } else {
        parts.join(", ")
    }
}
