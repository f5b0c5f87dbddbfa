//! Batch drivers that run the matcher over many events.
//!
//! Each event is matched by the single-threaded pipeline; the parallel
//! driver only fans independent events across threads. Output order always
//! follows input order, so both drivers produce identical results.

use rayon::prelude::*;

use crtmatch_core::{Event, MatchRecord, Result, RunStatistics, StripGeometry};

use crate::matcher::{EventMatcher, EventScratch};

/// Accumulated output of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Accepted records across all events, in event order.
    pub records: Vec<MatchRecord>,
    /// Run counters summed over the batch.
    pub stats: RunStatistics,
}

impl BatchOutcome {
    fn absorb(&mut self, outcome: crate::matcher::EventOutcome) {
        self.records.extend(outcome.records);
        self.stats.merge(&outcome.stats);
    }
}

/// Matches events one after another, reusing one scratch allocation.
///
/// # Errors
///
/// Stops at the first event with a malformed geometry lookup.
pub fn match_events<G: StripGeometry>(
    matcher: &EventMatcher,
    events: &[Event],
    geometry: &G,
) -> Result<BatchOutcome> {
    let mut scratch = EventScratch::new();
    let mut batch = BatchOutcome::default();
    for event in events {
        batch.absorb(matcher.match_event(event, geometry, &mut scratch)?);
    }
    Ok(batch)
}

/// Matches events across the rayon thread pool, one scratch per event.
///
/// # Errors
///
/// Fails if any event hits a malformed geometry lookup.
pub fn match_events_parallel<G: StripGeometry + Sync>(
    matcher: &EventMatcher,
    events: &[Event],
    geometry: &G,
) -> Result<BatchOutcome> {
    let outcomes: Vec<_> = events
        .par_iter()
        .map(|event| {
            let mut scratch = EventScratch::new();
            matcher.match_event(event, geometry, &mut scratch)
        })
        .collect::<Result<_>>()?;

    let mut batch = BatchOutcome::default();
    for outcome in outcomes {
        batch.absorb(outcome);
    }
    Ok(batch)
}
