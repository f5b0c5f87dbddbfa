//! Fixed detector relations: module adjacency, trigger pixels, mirroring.
//!
//! These are as-built properties of the tagger, encoded as literal tables so
//! they can be unit-tested instead of living in conditional chains.

use crate::hit::Region;

/// The 32 (y module, x module) pairs whose strips overlap and may combine
/// into a 2-D hit. The relation is the only source of cross-layer pairing.
pub const MODULE_PAIRS: [(u8, u8); 32] = [
    (0, 5),
    (0, 4),
    (12, 5),
    (12, 4),
    (16, 20),
    (16, 21),
    (28, 20),
    (28, 21),
    (1, 6),
    (1, 7),
    (13, 6),
    (13, 7),
    (17, 22),
    (17, 23),
    (29, 22),
    (29, 23),
    (2, 10),
    (2, 11),
    (14, 10),
    (14, 11),
    (19, 24),
    (19, 25),
    (31, 24),
    (31, 25),
    (3, 8),
    (3, 9),
    (15, 8),
    (15, 9),
    (18, 26),
    (18, 27),
    (30, 26),
    (30, 27),
];

/// Mapping from an overlapping module pair to the trigger-board pixel id
/// covering that crossing. Front pixels are 0-15, back pixels 16-31.
pub const PIXEL_MAP: [(u8, u8, u8); 32] = [
    (13, 6, 15),
    (13, 7, 10),
    (1, 6, 8),
    (1, 7, 9),
    (16, 20, 4),
    (16, 21, 13),
    (28, 20, 3),
    (28, 21, 2),
    (29, 22, 1),
    (29, 23, 0),
    (17, 22, 12),
    (17, 23, 11),
    (0, 5, 7),
    (0, 4, 6),
    (12, 5, 14),
    (12, 4, 5),
    (3, 8, 25),
    (3, 9, 24),
    (15, 8, 26),
    (15, 9, 31),
    (18, 26, 27),
    (18, 27, 28),
    (30, 26, 16),
    (30, 27, 17),
    (31, 24, 18),
    (31, 25, 19),
    (19, 24, 29),
    (19, 25, 20),
    (14, 10, 30),
    (14, 11, 21),
    (2, 10, 23),
    (2, 11, 22),
];

/// Beam-data modules whose strip numbering runs opposite the survey
/// coordinate, per region and readout side. Their strip index is
/// complemented within the 0-63 local range before geometry lookup.
const FRONT_MIRRORED_X: [u8; 1] = [21];
const FRONT_MIRRORED_Y: [u8; 2] = [1, 13];
const BACK_MIRRORED_X: [u8; 4] = [10, 11, 24, 25];
const BACK_MIRRORED_Y: [u8; 4] = [2, 3, 14, 15];

/// Tests whether two modules overlap and may form a 2-D hit.
#[inline]
pub fn modules_compatible(module_y: u8, module_x: u8) -> bool {
    MODULE_PAIRS.iter().any(|&(y, x)| y == module_y && x == module_x)
}

/// Trigger pixel covering the crossing of `module_y` and `module_x`, or
/// `None` for pairs that do not overlap.
#[inline]
pub fn pixel_for(module_y: u8, module_x: u8) -> Option<u8> {
    PIXEL_MAP
        .iter()
        .find(|&&(y, x, _)| y == module_y && x == module_x)
        .map(|&(_, _, pixel)| pixel)
}

/// Whether the x-side `module` is strip-mirrored in `region` (beam data).
#[inline]
pub fn mirrored_x_module(region: Region, module: u8) -> bool {
    match region {
        Region::Front => FRONT_MIRRORED_X.contains(&module),
        Region::Back => BACK_MIRRORED_X.contains(&module),
    }
}

/// Whether the y-side `module` is strip-mirrored in `region` (beam data).
#[inline]
pub fn mirrored_y_module(region: Region, module: u8) -> bool {
    match region {
        Region::Front => FRONT_MIRRORED_Y.contains(&module),
        Region::Back => BACK_MIRRORED_Y.contains(&module),
    }
}

/// As-built cabling swap for back-region x-side geometry lookups (beam
/// data): four module pairs were installed in each other's surveyed slots.
#[inline]
pub fn back_x_geometry_module(module: u8) -> u8 {
    match module {
        8 => 11,
        11 => 8,
        9 => 10,
        10 => 9,
        24 => 27,
        27 => 24,
        25 => 26,
        26 => 25,
        other => other,
    }
}

/// Complements a strip index within the 0-63 local range.
#[inline]
pub fn mirror_strip(strip: u16) -> u16 {
    strip ^ 63
}
