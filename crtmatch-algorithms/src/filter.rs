//! Channel filtering, canonical strip remapping, and region bucketing.

use crtmatch_core::config::REGION_SPLIT_Z;
use crtmatch_core::{ChannelReading, MatchConfig, Result, StripGeometry, StripReading};

/// Readings that survived the amplitude cut, split by detector region.
#[derive(Debug, Default)]
pub struct BucketedReadings {
    /// Readings whose strip sits upstream of the split plane.
    pub front: Vec<StripReading>,
    /// Readings whose strip sits downstream of the split plane.
    pub back: Vec<StripReading>,
}

impl BucketedReadings {
    /// Creates empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties both buckets, keeping their allocations.
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Total readings across both regions.
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// True when both buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }
}

/// Maps a raw readout channel to its canonical strip index.
///
/// Beam-data front-ends interleave the two SiPM layers: channels below 32
/// read even strips, the rest read odd strips. Simulated data numbers
/// strips directly.
#[inline]
pub fn canonical_strip(config: &MatchConfig, channel: u16) -> u16 {
    if config.is_beam() {
        if channel < 32 {
            2 * channel
        } else {
            2 * (channel - 32) + 1
        }
    } else {
        channel
    }
}

/// Applies the amplitude cut, remaps channels, and buckets the survivors by
/// region. No pairing happens here.
///
/// # Errors
///
/// Fails if any kept reading points outside the detector layout.
pub fn bucket_readings<G: StripGeometry>(
    readings: &[ChannelReading],
    geometry: &G,
    config: &MatchConfig,
    out: &mut BucketedReadings,
) -> Result<()> {
    for reading in readings {
        if reading.adc <= config.adc_threshold {
            continue;
        }
        let strip = canonical_strip(config, reading.channel);
        let kept = StripReading {
            module: reading.module,
            channel: reading.channel,
            strip,
            adc: reading.adc,
            timestamp: reading.timestamp,
        };
        let center = geometry.strip_center(reading.module, strip)?;
        if center.z < REGION_SPLIT_Z {
            out.front.push(kept);
        } else {
            out.back.push(kept);
        }
    }
    Ok(())
}
