//! Raw per-channel readings from the CRT front-end.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One threshold crossing on a single readout channel, as delivered by the
/// front-end for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelReading {
    /// Module (detector panel) id.
    pub module: u8,
    /// Raw readout channel within the module.
    pub channel: u16,
    /// Pulse amplitude in ADC counts.
    pub adc: i32,
    /// Module timestamp in clock ticks.
    pub timestamp: i64,
}

impl ChannelReading {
    /// Creates a new channel reading.
    #[inline]
    pub fn new(module: u8, channel: u16, adc: i32, timestamp: i64) -> Self {
        Self {
            module,
            channel,
            adc,
            timestamp,
        }
    }
}

/// A reading that survived the amplitude cut, carrying its canonical strip
/// index alongside the raw channel.
///
/// The canonical index orders strips by physical position; depending on the
/// operating mode the front-end channel numbering interleaves the two SiPM
/// layers, so raw channel and canonical strip differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StripReading {
    /// Module (detector panel) id.
    pub module: u8,
    /// Raw readout channel within the module.
    pub channel: u16,
    /// Canonical strip index used for geometry lookups.
    pub strip: u16,
    /// Pulse amplitude in ADC counts.
    pub adc: i32,
    /// Module timestamp in clock ticks.
    pub timestamp: i64,
}
