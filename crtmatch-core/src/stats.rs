//! Run-level counters.
//!
//! The only state that outlives an event. Everything here is additive so
//! per-event tallies can be merged in any order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters accumulated across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStatistics {
    /// Events that ran the full matching pipeline.
    pub events_processed: u64,
    /// Beam events dropped by the timing quality flag.
    pub events_skipped_quality: u64,
    /// Beam events dropped because the trigger board reported no usable
    /// pixel pair.
    pub events_skipped_pixels: u64,
    /// Readings surviving the amplitude cut.
    pub readings_kept: u64,
    /// 2-D hits built across both regions.
    pub hits_built: u64,
    /// Candidate (track, hit) pairs scored.
    pub candidates: u64,
    /// Pairs surviving deduplication and acceptance.
    pub accepted: u64,
}

impl RunStatistics {
    /// Adds another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        self.events_processed += other.events_processed;
        self.events_skipped_quality += other.events_skipped_quality;
        self.events_skipped_pixels += other.events_skipped_pixels;
        self.readings_kept += other.readings_kept;
        self.hits_built += other.hits_built;
        self.candidates += other.candidates;
        self.accepted += other.accepted;
    }
}
