//! Greedy overlap-aware candidate selection.

use crate::types::ClipCandidate;

/// Maximum fraction of a candidate's own duration that may overlap already
/// selected clips
const MAX_OVERLAP_FRACTION: f32 = 0.5;

/// Select the top-scoring candidates under the overlap constraint.
///
/// Candidates outside the duration bounds are dropped; the rest are walked in
/// score order and a newcomer is accepted only while its overlap with each
/// selected clip stays within half of the newcomer's own duration. The
/// overlap test is asymmetric on purpose; a symmetric IoU rule selects
/// different clips.
///
/// The sort is stable, so equal scores keep generation order — which favors
/// the smaller window sizes scanned first.
pub fn select_top(
    candidates: &[ClipCandidate],
    min_duration: f32,
    max_duration: f32,
    max_clips: usize,
) -> Vec<ClipCandidate> {
    let mut valid: Vec<&ClipCandidate> = candidates
        .iter()
        .filter(|c| {
            let duration = c.duration();
            duration >= min_duration && duration <= max_duration
        })
        .collect();

    valid.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut selected: Vec<ClipCandidate> = Vec::new();
    for candidate in valid {
        if fits(candidate, &selected) {
            selected.push(candidate.clone());
        }
        if selected.len() >= max_clips {
            break;
        }
    }

    selected
}

fn fits(candidate: &ClipCandidate, selected: &[ClipCandidate]) -> bool {
    let budget = MAX_OVERLAP_FRACTION * candidate.duration();
    selected
        .iter()
        .all(|incumbent| overlap(candidate, incumbent) <= budget)
}

fn overlap(a: &ClipCandidate, b: &ClipCandidate) -> f32 {
    (a.end.min(b.end) - a.start.max(b.start)).max(0.0)
}
