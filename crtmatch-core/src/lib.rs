//! crtmatch-core: Core types and detector tables for CRT hit/track matching.
//!
//! This crate provides the foundational pieces for reconstructing 2-D hits
//! on the cosmic-ray tagger and associating them with tracks: raw readings,
//! reconstructed hits, match candidates and records, strip geometry lookup,
//! operating-mode configuration, and the fixed detector adjacency tables.
//!

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hit;
pub mod pair;
pub mod point;
pub mod reading;
pub mod stats;
pub mod tables;

pub use config::{MatchConfig, OperatingMode};
pub use error::{Error, Result};
pub use event::{Event, FlashHit, Track, TriggerCoincidence};
pub use geometry::{DetectorLayout, StripGeometry};
pub use hit::{Hit2D, Region};
pub use pair::{MatchRecord, TrackCrtPair};
pub use point::{Point3, Vec3};
pub use reading::{ChannelReading, StripReading};
pub use stats::RunStatistics;
