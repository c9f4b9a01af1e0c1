//! Snap clip boundaries to transcript word edges.

use crate::types::{ClipCandidate, WordSegment};

/// Refine a clip to the nearest word boundaries.
///
/// The start snaps to the word start with the smallest absolute difference
/// within `tolerance` seconds, the end likewise to word ends; the whole word
/// list is scanned for each edge. The refined duration is then re-clamped to
/// the bounds by moving the end. Score and reason carry over unchanged into
/// a new candidate value.
///
/// A clip whose edges already sit on word boundaries comes back unchanged.
pub fn refine_boundaries(
    clip: &ClipCandidate,
    words: &[WordSegment],
    min_duration: f32,
    max_duration: f32,
    tolerance: f32,
) -> ClipCandidate {
    if words.is_empty() {
        return clip.clone();
    }

    let start = snap(clip.start, words.iter().map(|w| w.start), tolerance);
    let mut end = snap(clip.end, words.iter().map(|w| w.end), tolerance);

    let duration = end - start;
    if duration < min_duration {
        end = start + min_duration;
    } else if duration > max_duration {
        end = start + max_duration;
    }

    ClipCandidate {
        start,
        end,
        score: clip.score,
        reason: clip.reason.clone(),
    }
}

/// Closest edge to `target` within `tolerance`, or `target` itself.
fn snap(target: f32, edges: impl Iterator<Item = f32>, tolerance: f32) -> f32 {
    let mut best = target;
    let mut best_diff = f32::INFINITY;

    for edge in edges {
        let diff = (edge - target).abs();
        if diff < best_diff && diff <= tolerance {
            best_diff = diff;
            best = edge;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<WordSegment> {
        vec![
            WordSegment::new("first", 9.2, 9.8),
            WordSegment::new("second", 10.4, 11.0),
            WordSegment::new("third", 29.5, 30.2),
            WordSegment::new("fourth", 31.0, 31.6),
        ]
    }

    #[test]
    fn snaps_to_nearest_word_edges() {
        let clip = ClipCandidate::new(10.0, 30.0, 0.7, "high energy");

        let refined = refine_boundaries(&clip, &words(), 15.0, 30.0, 2.0);

        // 10.4 beats 9.2 for the start; 30.2 beats 31.6 for the end
        assert!((refined.start - 10.4).abs() < 0.001);
        assert!((refined.end - 30.2).abs() < 0.001);
        assert_eq!(refined.score, 0.7);
        assert_eq!(refined.reason, "high energy");
    }

    #[test]
    fn edges_outside_tolerance_stay_put() {
        let clip = ClipCandidate::new(50.0, 70.0, 0.5, "multi-signal");

        let refined = refine_boundaries(&clip, &words(), 15.0, 30.0, 2.0);

        assert_eq!(refined.start, 50.0);
        assert_eq!(refined.end, 70.0);
    }

    #[test]
    fn refinement_is_idempotent() {
        let clip = ClipCandidate::new(10.0, 30.0, 0.7, "keyword");
        let word_list = words();

        let once = refine_boundaries(&clip, &word_list, 15.0, 30.0, 2.0);
        let twice = refine_boundaries(&once, &word_list, 15.0, 30.0, 2.0);

        assert_eq!(once, twice);
    }

    #[test]
    fn short_refined_clip_extends_to_min_duration() {
        let word_list = vec![
            WordSegment::new("a", 10.0, 10.5),
            WordSegment::new("b", 19.5, 20.0),
        ];
        let clip = ClipCandidate::new(10.2, 19.8, 0.4, "multi-signal");

        let refined = refine_boundaries(&clip, &word_list, 15.0, 30.0, 2.0);

        // Snapped to [10.0, 20.0): 10s, below min, so the end extends
        assert!((refined.start - 10.0).abs() < 0.001);
        assert!((refined.end - 25.0).abs() < 0.001);
    }

    #[test]
    fn long_refined_clip_truncates_to_max_duration() {
        let word_list = vec![
            WordSegment::new("a", 10.0, 10.5),
            WordSegment::new("b", 44.5, 45.0),
        ];
        let clip = ClipCandidate::new(10.2, 44.8, 0.4, "multi-signal");

        let refined = refine_boundaries(&clip, &word_list, 15.0, 30.0, 2.0);

        assert!((refined.start - 10.0).abs() < 0.001);
        assert!((refined.end - 40.0).abs() < 0.001);
    }

    #[test]
    fn no_words_leaves_clip_unchanged() {
        let clip = ClipCandidate::new(10.0, 30.0, 0.7, "scene change");

        let refined = refine_boundaries(&clip, &[], 15.0, 30.0, 2.0);

        assert_eq!(refined, clip);
    }
}
