//! Operating-mode configuration for the matching pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// z coordinate splitting the detector into front and back regions.
pub const REGION_SPLIT_Z: f64 = 100.0;

/// Half of the physical strip pitch, applied when an adjacent strip on the
/// same module also fired and the crossing point is ambiguous between them.
pub const HALF_STRIP_PITCH: f64 = 1.25;

/// Acceptance cut on the absolute direction-agreement score.
pub const SCORE_CUT: f64 = 0.999;

/// Acceptance cut on the absolute y residual, in length units.
pub const DELTA_Y_CUT: f64 = 150.0;

/// Timing decoder flag value marking a good beam event.
pub const QUALITY_FLAG_ACCEPT: u32 = 13;

/// Front-region track window: end z must fall in this open interval.
pub const FRONT_END_Z: (f64, f64) = (90.0, 300.0);
/// Front-region track window: start z upper bound.
pub const FRONT_START_Z_MAX: f64 = 50.0;
/// Back-region track window: start z must fall in this open interval.
pub const BACK_START_Z: (f64, f64) = (300.0, 620.0);
/// Back-region track window: end z lower bound.
pub const BACK_END_Z_MIN: f64 = 660.0;

/// Which set of calibration constants and channel conventions applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatingMode {
    /// Simulated production: direct channel numbering, high ADC threshold,
    /// no as-built alignment corrections.
    Simulation,
    /// Beam data: interleaved channel numbering, low threshold, mirrored
    /// modules and alignment offsets, trigger-board gating.
    Beam,
}

/// Constants resolved once per run from the operating mode.
///
/// The per-event hot path reads these fields directly instead of re-deriving
/// anything from the mode flag.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchConfig {
    /// Operating mode the remaining fields were resolved from.
    pub mode: OperatingMode,
    /// Readings at or below this amplitude are dropped.
    pub adc_threshold: i32,
    /// Two readings pair into a hit only if their timestamps differ by less
    /// than this many ticks.
    pub module_timing_cut: i64,
    /// Additive y correction for front-region hits.
    pub front_y_offset: f64,
    /// Additive y correction for back-region hits.
    pub back_y_offset: f64,
}

impl MatchConfig {
    /// Resolves the constants for `mode`.
    pub fn for_mode(mode: OperatingMode) -> Self {
        match mode {
            OperatingMode::Simulation => Self {
                mode,
                adc_threshold: 800,
                module_timing_cut: 4,
                front_y_offset: 0.0,
                back_y_offset: 0.0,
            },
            OperatingMode::Beam => Self {
                mode,
                adc_threshold: 20,
                module_timing_cut: 5,
                // As-built vertical misalignment between the module frames,
                // surveyed per region.
                front_y_offset: -30.0,
                back_y_offset: -115.0,
            },
        }
    }

    /// Overrides the amplitude threshold.
    #[must_use]
    pub fn with_adc_threshold(mut self, threshold: i32) -> Self {
        self.adc_threshold = threshold;
        self
    }

    /// Overrides the module-to-module timing cut.
    #[must_use]
    pub fn with_module_timing_cut(mut self, ticks: i64) -> Self {
        self.module_timing_cut = ticks;
        self
    }

    /// True when channel mirroring, alignment offsets, and trigger gating
    /// apply (beam data only).
    #[inline]
    pub fn is_beam(&self) -> bool {
        self.mode == OperatingMode::Beam
    }
}
