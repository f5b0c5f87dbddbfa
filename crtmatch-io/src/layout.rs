//! Detector layout files: surveyed strip centers as JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crtmatch_core::{DetectorLayout, Point3};

use crate::Result;

/// One surveyed strip center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Module id.
    pub module: u8,
    /// Canonical strip index.
    pub strip: u16,
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Center z.
    pub z: f64,
}

/// Reads a layout file: a JSON array of strip centers.
///
/// # Errors
///
/// Fails on unreadable files or malformed JSON.
pub fn read_layout<P: AsRef<Path>>(path: P) -> Result<DetectorLayout> {
    let file = File::open(path)?;
    let entries: Vec<LayoutEntry> = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries
        .into_iter()
        .map(|e| (e.module, e.strip, Point3::new(e.x, e.y, e.z)))
        .collect())
}
