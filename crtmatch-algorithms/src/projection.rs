//! Track windows, linear projection to a hit's depth, and scoring.

use crtmatch_core::config::{BACK_END_Z_MIN, BACK_START_Z, FRONT_END_Z, FRONT_START_Z_MAX};
use crtmatch_core::{FlashHit, Point3};

/// Flash peak times are in microseconds; hit times in ticks.
pub const FLASH_TIME_SCALE: f64 = 1000.0;

/// True when a track (endpoints ordered by z) can have crossed the front
/// region: it must end inside the volume and start close to the upstream
/// face.
#[inline]
pub fn in_front_window(start: Point3, end: Point3) -> bool {
    end.z > FRONT_END_Z.0 && end.z < FRONT_END_Z.1 && start.z < FRONT_START_Z_MAX
}

/// True when a track (endpoints ordered by z) can have crossed the back
/// region.
#[inline]
pub fn in_back_window(start: Point3, end: Point3) -> bool {
    start.z > BACK_START_Z.0 && start.z < BACK_START_Z.1 && end.z > BACK_END_Z_MIN
}

/// Extends the track line to depth `z`, returning the predicted (x, y).
#[inline]
pub fn project_to_z(start: Point3, end: Point3, z: f64) -> (f64, f64) {
    let t = (z - end.z) / (start.z - end.z);
    let x = t * (start.x - end.x) + end.x;
    let y = t * (start.y - end.y) + end.y;
    (x, y)
}

/// Direction-agreement score: the dot product of the unit vector along the
/// track and the unit vector from the hit to the track start. Values near
/// +/-1 mean the hit lies on the track line.
#[inline]
pub fn direction_score(start: Point3, end: Point3, hit: Point3) -> f64 {
    let track = end.sub(&start).unit();
    let to_start = start.sub(&hit).unit();
    track.dot(&to_start)
}

/// Signed time difference between a hit and its nearest flash, by absolute
/// value. `None` when the event recorded no flashes. Diagnostic only.
pub fn nearest_flash_diff(hit_time: f64, flashes: &[FlashHit]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for flash in flashes {
        let diff = hit_time - flash.peak_time * FLASH_TIME_SCALE;
        if best.map_or(true, |b| diff.abs() < b.abs()) {
            best = Some(diff);
        }
    }
    best
}
