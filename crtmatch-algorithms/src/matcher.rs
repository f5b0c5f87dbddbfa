//! Per-event matching: chains filtering, hit building, projection, and
//! deduplication into accepted records.
#![allow(clippy::cast_possible_truncation)]

use crtmatch_core::config::QUALITY_FLAG_ACCEPT;
use crtmatch_core::{
    tables, Event, FlashHit, Hit2D, MatchConfig, MatchRecord, Point3, Region, Result,
    RunStatistics, StripGeometry, TrackCrtPair, TriggerCoincidence,
};

use crate::dedup::{passes_acceptance, select_unique_pairs};
use crate::filter::{bucket_readings, BucketedReadings};
use crate::hit_builder::build_region_hits;
use crate::projection::{
    direction_score, in_back_window, in_front_window, nearest_flash_diff, project_to_z,
};

/// Why an event produced no output before matching ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Beam event whose timing quality flag was not the accept value.
    QualityFlag,
    /// Beam event whose trigger board reported no usable pixel pair.
    TriggerPixels,
}

/// Result of matching one event.
#[derive(Debug, Clone, Default)]
pub struct EventOutcome {
    /// Accepted records, one per surviving pair.
    pub records: Vec<MatchRecord>,
    /// Set when the event was skipped wholesale.
    pub skip: Option<SkipReason>,
    /// This event's contribution to the run counters.
    pub stats: RunStatistics,
}

/// Event-scoped working collections.
///
/// Everything here is rebuilt from scratch each event; reuse only saves the
/// allocations. Holding stale contents across events would leak one event's
/// hits into the next, so `match_event` clears all of it up front.
#[derive(Debug, Default)]
pub struct EventScratch {
    readings: BucketedReadings,
    hits_front: Vec<Hit2D>,
    hits_back: Vec<Hit2D>,
    candidates: Vec<TrackCrtPair>,
}

impl EventScratch {
    /// Creates empty scratch collections.
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.readings.clear();
        self.hits_front.clear();
        self.hits_back.clear();
        self.candidates.clear();
    }
}

/// The per-event matching pipeline, configured once per run.
#[derive(Debug, Clone)]
pub struct EventMatcher {
    config: MatchConfig,
}

impl EventMatcher {
    /// Creates a matcher with the given configuration.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Runs the full pipeline on one event.
    ///
    /// # Errors
    ///
    /// Fails only on malformed geometry lookups; policy skips (quality flag,
    /// trigger pixels) are reported through [`EventOutcome::skip`].
    pub fn match_event<G: StripGeometry>(
        &self,
        event: &Event,
        geometry: &G,
        scratch: &mut EventScratch,
    ) -> Result<EventOutcome> {
        scratch.clear();
        let mut outcome = EventOutcome::default();

        let (pixel_front, pixel_back) = if self.config.is_beam() {
            if event.quality_flag != Some(QUALITY_FLAG_ACCEPT) {
                outcome.skip = Some(SkipReason::QualityFlag);
                outcome.stats.events_skipped_quality = 1;
                return Ok(outcome);
            }
            match trigger_pixels(&event.coincidences) {
                Some(pixels) => pixels,
                None => {
                    outcome.skip = Some(SkipReason::TriggerPixels);
                    outcome.stats.events_skipped_pixels = 1;
                    return Ok(outcome);
                }
            }
        } else {
            (None, None)
        };

        bucket_readings(&event.readings, geometry, &self.config, &mut scratch.readings)?;
        outcome.stats.readings_kept = scratch.readings.len() as u64;

        let mut next_hit_id = 0;
        build_region_hits(
            &scratch.readings.front,
            Region::Front,
            geometry,
            &self.config,
            &mut next_hit_id,
            &mut scratch.hits_front,
        )?;
        build_region_hits(
            &scratch.readings.back,
            Region::Back,
            geometry,
            &self.config,
            &mut next_hit_id,
            &mut scratch.hits_back,
        )?;
        outcome.stats.hits_built = (scratch.hits_front.len() + scratch.hits_back.len()) as u64;

        let mut group_id = 0;
        for (track_index, track) in event.tracks.iter().enumerate() {
            let (start, end) = track.ordered_by_z();
            let track_id = track_index as u32;
            let mut entered = false;

            if in_front_window(start, end) {
                entered = true;
                for hit in &scratch.hits_front {
                    if self.config.is_beam() && !pixel_gate_passes(hit, pixel_front) {
                        continue;
                    }
                    scratch.candidates.push(score_candidate(
                        group_id,
                        track_id,
                        start,
                        end,
                        hit,
                        &event.flashes,
                    ));
                }
            }
            if in_back_window(start, end) {
                entered = true;
                for hit in &scratch.hits_back {
                    if self.config.is_beam() && !pixel_gate_passes(hit, pixel_back) {
                        continue;
                    }
                    scratch.candidates.push(score_candidate(
                        group_id,
                        track_id,
                        start,
                        end,
                        hit,
                        &event.flashes,
                    ));
                }
            }
            if entered {
                group_id += 1;
            }
        }
        outcome.stats.candidates = scratch.candidates.len() as u64;

        let unique = select_unique_pairs(std::mem::take(&mut scratch.candidates));
        outcome.records = unique
            .iter()
            .filter(|pair| passes_acceptance(pair))
            .map(|pair| MatchRecord::from_pair(event.number, pair))
            .collect();
        outcome.stats.accepted = outcome.records.len() as u64;
        outcome.stats.events_processed = 1;
        Ok(outcome)
    }
}

/// Folds the trigger coincidences down to the event's (front, back) pixels.
///
/// Every coincidence must decode to a complete pixel pair; one that does not
/// invalidates the whole event (`None`). With no coincidences at all the
/// pixels stay unset and the gate rejects every hit, matching a board that
/// saw nothing.
fn trigger_pixels(coincidences: &[TriggerCoincidence]) -> Option<(Option<u8>, Option<u8>)> {
    let mut pixels = (None, None);
    for coincidence in coincidences {
        let (front, back) = coincidence.pixels();
        if front.is_none() || back.is_none() {
            return None;
        }
        pixels = (front, back);
    }
    Some(pixels)
}

/// A hit passes the gate only if its module crossing maps to the pixel the
/// trigger board reported for that region.
#[inline]
fn pixel_gate_passes(hit: &Hit2D, expected: Option<u8>) -> bool {
    expected.is_some() && tables::pixel_for(hit.module_y, hit.module_x) == expected
}

fn score_candidate(
    group_id: u32,
    track_id: u32,
    start: Point3,
    end: Point3,
    hit: &Hit2D,
    flashes: &[FlashHit],
) -> TrackCrtPair {
    let (predicted_x, predicted_y) = project_to_z(start, end, hit.position.z);
    TrackCrtPair {
        group_id,
        hit_id: hit.id,
        track_id,
        delta_x: predicted_x - hit.position.x,
        delta_y: predicted_y - hit.position.y,
        score: direction_score(start, end, hit.position),
        track_start: start,
        track_end: end,
        hit_position: hit.position,
        hit_time: hit.time_avg,
        flash_time_diff: nearest_flash_diff(hit.time_avg, flashes),
        module_x: hit.module_x,
        module_y: hit.module_y,
        channel_x: hit.channel_x,
        channel_y: hit.channel_y,
        adc_x: hit.adc_x,
        adc_y: hit.adc_y,
    }
}
