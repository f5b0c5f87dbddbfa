//! Per-event input collections handed to the matcher by the event source.

use crate::point::Point3;
use crate::reading::ChannelReading;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reconstructed track, reduced to its two endpoints.
///
/// The endpoints carry no inherent ordering; the matcher normalizes them so
/// the start has the smaller z before projecting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    /// One endpoint.
    pub start: Point3,
    /// The other endpoint.
    pub end: Point3,
}

impl Track {
    /// Creates a track from two endpoints.
    #[inline]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Endpoints reordered so the first has the smaller z.
    #[inline]
    pub fn ordered_by_z(&self) -> (Point3, Point3) {
        if self.start.z > self.end.z {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }
}

/// A light-flash hit from the photon detection system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlashHit {
    /// Peak time in microseconds.
    pub peak_time: f64,
}

/// A trigger-board coincidence, reduced to its 32-bit channel mask.
///
/// Bits 0-15 report the upstream pixel, bits 16-31 the downstream pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriggerCoincidence {
    /// Raw channel-status mask.
    pub mask: u32,
}

impl TriggerCoincidence {
    /// Creates a coincidence from a raw mask.
    #[inline]
    pub fn new(mask: u32) -> Self {
        Self { mask }
    }

    /// Decodes the (front, back) pixel ids from the mask.
    ///
    /// The highest set bit in each half wins, matching the board readout
    /// order. A half with no set bit yields `None`.
    pub fn pixels(&self) -> (Option<u8>, Option<u8>) {
        let mut front = None;
        let mut back = None;
        for i in 0..32u8 {
            if self.mask & (1 << i) != 0 {
                if i < 16 {
                    front = Some(i);
                } else {
                    back = Some(i);
                }
            }
        }
        (front, back)
    }
}

/// Everything the matcher consumes for one event.
///
/// Absent upstream collections are empty vectors, never errors.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Event {
    /// Event number, stamped into every emitted record.
    pub number: u64,
    /// Upstream timing quality flag, when the decoder provided one.
    pub quality_flag: Option<u32>,
    /// Raw per-channel CRT readings.
    pub readings: Vec<ChannelReading>,
    /// Reconstructed tracks.
    pub tracks: Vec<Track>,
    /// Light-flash hits.
    pub flashes: Vec<FlashHit>,
    /// Trigger-board coincidences.
    pub coincidences: Vec<TriggerCoincidence>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_endpoint_ordering() {
        let t = Track::new(Point3::new(0.0, 0.0, 500.0), Point3::new(1.0, 1.0, 10.0));
        let (start, end) = t.ordered_by_z();
        assert_eq!(start.z, 10.0);
        assert_eq!(end.z, 500.0);

        let already = Track::new(Point3::new(0.0, 0.0, 10.0), Point3::new(1.0, 1.0, 500.0));
        let (start, end) = already.ordered_by_z();
        assert_eq!(start.z, 10.0);
        assert_eq!(end.z, 500.0);
    }

    #[test]
    fn test_coincidence_pixel_decoding() {
        let c = TriggerCoincidence::new((1 << 7) | (1 << 21));
        assert_eq!(c.pixels(), (Some(7), Some(21)));

        // Highest set bit wins within each half.
        let c = TriggerCoincidence::new((1 << 3) | (1 << 7) | (1 << 18) | (1 << 30));
        assert_eq!(c.pixels(), (Some(7), Some(30)));

        let front_only = TriggerCoincidence::new(1 << 2);
        assert_eq!(front_only.pixels(), (Some(2), None));

        let empty = TriggerCoincidence::new(0);
        assert_eq!(empty.pixels(), (None, None));
    }
}
