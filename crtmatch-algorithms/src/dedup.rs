//! Greedy best-pair selection and the final acceptance cuts.

use crtmatch_core::config::{DELTA_Y_CUT, SCORE_CUT};
use crtmatch_core::TrackCrtPair;

/// Reduces a pooled candidate set to a partial matching: each track id and
/// each hit id survives in at most one pair.
///
/// Candidates are stable-sorted by descending absolute score, then the best
/// remaining pair is accepted and every other pair sharing its track or hit
/// is discarded, until none remain. Greedy, not globally optimal; candidate
/// counts per event are small and ties are rare.
pub fn select_unique_pairs(mut candidates: Vec<TrackCrtPair>) -> Vec<TrackCrtPair> {
    candidates.sort_by(|a, b| b.score.abs().total_cmp(&a.score.abs()));

    let mut accepted = Vec::new();
    while !candidates.is_empty() {
        let best = candidates.remove(0);
        candidates.retain(|pair| pair.track_id != best.track_id && pair.hit_id != best.hit_id);
        accepted.push(best);
    }
    accepted
}

/// Final quality cuts on a deduplicated pair: near-colinear direction and a
/// bounded vertical residual. Failing pairs are dropped, never retried.
#[inline]
pub fn passes_acceptance(pair: &TrackCrtPair) -> bool {
    pair.score.abs() > SCORE_CUT && pair.delta_y.abs() < DELTA_Y_CUT
}
