//! Track/CRT-hit match candidates and the emitted record type.

use crate::point::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scored (track, CRT hit) candidate, alive only during the per-event
/// matching phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackCrtPair {
    /// Synthetic group id, shared by all candidates of one track.
    pub group_id: u32,
    /// Event-scoped id of the CRT hit.
    pub hit_id: u32,
    /// Index of the owning track in the event's track list.
    pub track_id: u32,
    /// Residual in x: predicted minus observed.
    pub delta_x: f64,
    /// Residual in y: predicted minus observed.
    pub delta_y: f64,
    /// Direction-agreement score, the signed dot product of the track unit
    /// vector and the hit-to-track-start unit vector.
    pub score: f64,
    /// Normalized track start (smaller z).
    pub track_start: Point3,
    /// Normalized track end (larger z).
    pub track_end: Point3,
    /// Reconstructed CRT hit position.
    pub hit_position: Point3,
    /// Averaged CRT hit time in ticks.
    pub hit_time: f64,
    /// Signed time difference to the nearest light flash, `None` when the
    /// event carries no flashes.
    pub flash_time_diff: Option<f64>,
    /// Module supplying the hit's x coordinate.
    pub module_x: u8,
    /// Module supplying the hit's y coordinate.
    pub module_y: u8,
    /// Raw channel of the x-side reading.
    pub channel_x: u16,
    /// Raw channel of the y-side reading.
    pub channel_y: u16,
    /// Amplitude of the x-side reading.
    pub adc_x: i32,
    /// Amplitude of the y-side reading.
    pub adc_y: i32,
}

/// One accepted association, flattened for downstream persistence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchRecord {
    /// Event number the pair was found in.
    pub event: u64,
    /// Absolute direction-agreement score.
    pub direction_cos: f64,
    /// Residual in x.
    pub delta_x: f64,
    /// Residual in y.
    pub delta_y: f64,
    /// CRT hit x.
    pub crt_x: f64,
    /// CRT hit y.
    pub crt_y: f64,
    /// CRT hit z.
    pub crt_z: f64,
    /// Averaged CRT hit time in ticks.
    pub crt_t0: f64,
    /// Track start x.
    pub track_start_x: f64,
    /// Track start y.
    pub track_start_y: f64,
    /// Track start z.
    pub track_start_z: f64,
    /// Track end x.
    pub track_end_x: f64,
    /// Track end y.
    pub track_end_y: f64,
    /// Track end z.
    pub track_end_z: f64,
    /// Module supplying the hit's x coordinate.
    pub module_x: u8,
    /// Module supplying the hit's y coordinate.
    pub module_y: u8,
    /// Raw channel of the x-side reading.
    pub strip_x: u16,
    /// Raw channel of the y-side reading.
    pub strip_y: u16,
    /// Amplitude of the x-side reading.
    pub adc_x: i32,
    /// Amplitude of the y-side reading.
    pub adc_y: i32,
    /// Signed time difference to the nearest light flash, if any.
    pub flash_time_diff: Option<f64>,
}

impl MatchRecord {
    /// Flattens an accepted pair into a record for event `event`.
    pub fn from_pair(event: u64, pair: &TrackCrtPair) -> Self {
        Self {
            event,
            direction_cos: pair.score.abs(),
            delta_x: pair.delta_x,
            delta_y: pair.delta_y,
            crt_x: pair.hit_position.x,
            crt_y: pair.hit_position.y,
            crt_z: pair.hit_position.z,
            crt_t0: pair.hit_time,
            track_start_x: pair.track_start.x,
            track_start_y: pair.track_start.y,
            track_start_z: pair.track_start.z,
            track_end_x: pair.track_end.x,
            track_end_y: pair.track_end.y,
            track_end_z: pair.track_end.z,
            module_x: pair.module_x,
            module_y: pair.module_y,
            strip_x: pair.channel_x,
            strip_y: pair.channel_y,
            adc_x: pair.adc_x,
            adc_y: pair.adc_y,
            flash_time_diff: pair.flash_time_diff,
        }
    }
}
