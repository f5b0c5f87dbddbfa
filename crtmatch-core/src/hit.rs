//! Reconstructed 2-D hits on the cosmic-ray tagger.

use crate::point::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Depth zone of the detector, discriminated by the z coordinate of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    /// Upstream zone (strip center z below the split plane).
    Front,
    /// Downstream zone.
    Back,
}

/// A position- and time-resolved hit formed by pairing one strip reading
/// from each of two overlapping modules.
///
/// Until deduplication a single strip reading may contribute to several
/// `Hit2D` instances, one per candidate partner on the paired module.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hit2D {
    /// Event-scoped hit id, unique across both regions.
    pub id: u32,
    /// Region the hit was built in.
    pub region: Region,
    /// Module supplying the x coordinate.
    pub module_x: u8,
    /// Module supplying the y coordinate.
    pub module_y: u8,
    /// Raw channel of the x-side reading.
    pub channel_x: u16,
    /// Raw channel of the y-side reading.
    pub channel_y: u16,
    /// Amplitude of the x-side reading.
    pub adc_x: i32,
    /// Amplitude of the y-side reading.
    pub adc_y: i32,
    /// Reconstructed position, alignment corrections applied.
    pub position: Point3,
    /// Mean of the two module timestamps, in ticks.
    pub time_avg: f64,
}
