//! Strip geometry lookup.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::point::Point3;

/// Lookup from (module, canonical strip) to the 3-D center of the strip's
/// sensitive volume.
///
/// The detector layout is fixed for a run; implementations are expected to
/// behave as pure functions. A lookup outside the known layout is a hard
/// error, never a silent default.
pub trait StripGeometry {
    /// Returns the center of the strip's sensitive volume.
    fn strip_center(&self, module: u8, strip: u16) -> Result<Point3>;
}

/// Map-backed geometry, filled from a surveyed layout description.
#[derive(Debug, Clone, Default)]
pub struct DetectorLayout {
    centers: HashMap<(u8, u16), Point3>,
}

impl DetectorLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the center of one strip, replacing any previous entry.
    pub fn insert(&mut self, module: u8, strip: u16, center: Point3) {
        self.centers.insert((module, strip), center);
    }

    /// Number of strips in the layout.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// True if no strips are registered.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

impl FromIterator<(u8, u16, Point3)> for DetectorLayout {
    fn from_iter<I: IntoIterator<Item = (u8, u16, Point3)>>(iter: I) -> Self {
        let mut layout = Self::new();
        for (module, strip, center) in iter {
            layout.insert(module, strip, center);
        }
        layout
    }
}

impl StripGeometry for DetectorLayout {
    fn strip_center(&self, module: u8, strip: u16) -> Result<Point3> {
        self.centers
            .get(&(module, strip))
            .copied()
            .ok_or(Error::UnknownStrip { module, strip })
    }
}
