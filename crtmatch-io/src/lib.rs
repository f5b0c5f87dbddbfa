//! crtmatch-io: File I/O for the matching pipeline.
//!
//! Events and detector layouts are read from JSON; accepted records are
//! written as CSV or JSON lines. This layer stands in for the experiment
//! framework's event source and tree writer.
//!

mod error;
mod layout;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use layout::{read_layout, LayoutEntry};
pub use reader::read_events;
pub use writer::MatchFileWriter;
