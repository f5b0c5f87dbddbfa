//! Writers for accepted match records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crtmatch_core::MatchRecord;

use crate::Result;

/// CSV column order, fixed so downstream readers can rely on it.
const CSV_HEADER: &str = "event,direction_cos,delta_x,delta_y,crt_x,crt_y,crt_z,crt_t0,\
track_start_x,track_start_y,track_start_z,track_end_x,track_end_y,track_end_z,\
module_x,module_y,strip_x,strip_y,adc_x,adc_y,flash_time_diff";

/// Writes accepted records to a file, one row per pair.
pub struct MatchFileWriter {
    writer: BufWriter<File>,
}

impl MatchFileWriter {
    /// Creates a new record writer.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Writes records as CSV, prefixing the header when `with_header` is
    /// set. An absent flash difference leaves its field empty.
    ///
    /// # Errors
    ///
    /// Fails on write errors.
    pub fn write_records_csv(&mut self, records: &[MatchRecord], with_header: bool) -> Result<()> {
        if with_header {
            writeln!(self.writer, "{CSV_HEADER}")?;
        }
        for r in records {
            let flash = r
                .flash_time_diff
                .map_or_else(String::new, |d| d.to_string());
            writeln!(
                self.writer,
                "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
                r.event,
                r.direction_cos,
                r.delta_x,
                r.delta_y,
                r.crt_x,
                r.crt_y,
                r.crt_z,
                r.crt_t0,
                r.track_start_x,
                r.track_start_y,
                r.track_start_z,
                r.track_end_x,
                r.track_end_y,
                r.track_end_z,
                r.module_x,
                r.module_y,
                r.strip_x,
                r.strip_y,
                r.adc_x,
                r.adc_y,
                flash,
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes records as JSON lines, one object per row.
    ///
    /// # Errors
    ///
    /// Fails on write or serialization errors.
    pub fn write_records_jsonl(&mut self, records: &[MatchRecord]) -> Result<()> {
        for record in records {
            serde_json::to_writer(&mut self.writer, record)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Fails on write errors.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
