//! crtmatch-algorithms: The per-event CRT/track matching pipeline.
//!
//! Stages, leaves first:
//! - **filter** - amplitude cut, canonical strip remap, front/back bucketing
//! - **hit_builder** - pairs readings across overlapping modules into 2-D hits
//! - **projection** - track windows, linear projection, direction scoring
//! - **dedup** - greedy best-pair selection and acceptance cuts
//! - **matcher** - chains the stages for one event
//! - **process** - sequential and parallel batch drivers
//!
#![warn(missing_docs)]

mod dedup;
mod filter;
mod hit_builder;
mod matcher;
mod process;
pub mod projection;

pub use dedup::{passes_acceptance, select_unique_pairs};
pub use filter::{bucket_readings, canonical_strip, BucketedReadings};
pub use hit_builder::build_region_hits;
pub use matcher::{EventMatcher, EventOutcome, EventScratch, SkipReason};
pub use process::{match_events, match_events_parallel, BatchOutcome};

// Re-export the core configuration types callers need alongside the matcher.
pub use crtmatch_core::{MatchConfig, OperatingMode, RunStatistics};
