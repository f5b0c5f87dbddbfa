//! Event files: one JSON array of events per run.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crtmatch_core::Event;

use crate::Result;

/// Reads every event from a JSON event file.
///
/// Collections a producer left out deserialize as empty, so sparse event
/// files stay valid.
///
/// # Errors
///
/// Fails on unreadable files or malformed JSON.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>> {
    let file = File::open(path)?;
    let events = serde_json::from_reader(BufReader::new(file))?;
    Ok(events)
}
