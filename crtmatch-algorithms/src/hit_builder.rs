//! Builds 2-D hits by pairing strip readings across overlapping modules.

use crtmatch_core::config::HALF_STRIP_PITCH;
use crtmatch_core::{tables, Hit2D, MatchConfig, Point3, Region, Result, StripGeometry, StripReading};

/// Scans every ordered (x-side, y-side) pair of readings in one region and
/// emits a 2-D hit for each pair that is module-compatible and in time.
///
/// All-pairs is quadratic in the region's multiplicity, which stays in the
/// tens per event; a module-indexed multimap would only move the constant.
///
/// Hit ids are drawn from `next_id` so they stay unique across regions.
///
/// # Errors
///
/// Fails if a strip lookup lands outside the detector layout.
pub fn build_region_hits<G: StripGeometry>(
    readings: &[StripReading],
    region: Region,
    geometry: &G,
    config: &MatchConfig,
    next_id: &mut u32,
    out: &mut Vec<Hit2D>,
) -> Result<()> {
    let beam = config.is_beam();
    for x_reading in readings {
        for y_reading in readings {
            if !tables::modules_compatible(y_reading.module, x_reading.module) {
                continue;
            }
            let time_diff = x_reading.timestamp - y_reading.timestamp;
            if time_diff.abs() >= config.module_timing_cut {
                continue;
            }

            let x_mirrored = beam && tables::mirrored_x_module(region, x_reading.module);
            let x_strip = effective_strip(x_reading.strip, x_mirrored);
            let x_geo_module = if beam && region == Region::Back {
                tables::back_x_geometry_module(x_reading.module)
            } else {
                x_reading.module
            };
            let x_center = geometry.strip_center(x_geo_module, x_strip)?;

            let y_mirrored = beam && tables::mirrored_y_module(region, y_reading.module);
            let y_strip = effective_strip(y_reading.strip, y_mirrored);
            let y_center = geometry.strip_center(y_reading.module, y_strip)?;

            // The crossing point is ambiguous within a strip pitch whenever
            // the neighbouring strip also fired; split the difference.
            let mut x = x_center.x;
            if has_adjacent_strip(readings, x_reading, flip_direction(x_mirrored)) {
                x += HALF_STRIP_PITCH;
            }
            let mut y = y_center.y;
            if has_adjacent_strip(readings, y_reading, flip_direction(y_mirrored)) {
                y += HALF_STRIP_PITCH;
            }
            if beam {
                y += match region {
                    Region::Front => config.front_y_offset,
                    Region::Back => config.back_y_offset,
                };
            }
            let z = (x_center.z + y_center.z) / 2.0;

            out.push(Hit2D {
                id: *next_id,
                region,
                module_x: x_reading.module,
                module_y: y_reading.module,
                channel_x: x_reading.channel,
                channel_y: y_reading.channel,
                adc_x: x_reading.adc,
                adc_y: y_reading.adc,
                position: Point3::new(x, y, z),
                time_avg: midpoint(x_reading.timestamp, y_reading.timestamp),
            });
            *next_id += 1;
        }
    }
    Ok(())
}

#[inline]
fn effective_strip(strip: u16, mirrored: bool) -> u16 {
    if mirrored {
        tables::mirror_strip(strip)
    } else {
        strip
    }
}

/// Strip-pitch neighbours are searched on the mirrored side for mirrored
/// modules, so the offset always lands on the surveyed side.
#[inline]
fn flip_direction(mirrored: bool) -> i32 {
    if mirrored {
        -1
    } else {
        1
    }
}

#[inline]
fn has_adjacent_strip(readings: &[StripReading], reading: &StripReading, flip: i32) -> bool {
    readings.iter().any(|other| {
        other.module == reading.module
            && i32::from(other.strip) == i32::from(reading.strip) + flip
    })
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn midpoint(a: i64, b: i64) -> f64 {
    (a + b) as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crtmatch_core::{DetectorLayout, OperatingMode};

    // Front crossing of y-module 0 and x-module 4: strips fan out along the
    // axis each module measures, both planes just upstream of the split.
    fn front_layout() -> DetectorLayout {
        let mut layout = DetectorLayout::new();
        for strip in 0..64u16 {
            let offset = 2.5 * (f64::from(strip) - 32.0);
            layout.insert(4, strip, Point3::new(offset, 0.0, 99.0));
            layout.insert(0, strip, Point3::new(0.0, offset, 99.0));
        }
        layout
    }

    fn reading(module: u8, strip: u16, timestamp: i64) -> StripReading {
        StripReading {
            module,
            channel: strip,
            strip,
            adc: 900,
            timestamp,
        }
    }

    #[test]
    fn test_compatible_pair_in_time_builds_one_hit() {
        let layout = front_layout();
        let config = MatchConfig::for_mode(OperatingMode::Simulation);
        let readings = [reading(4, 32, 0), reading(0, 32, 2)];
        let mut hits = Vec::new();
        let mut next_id = 0;
        build_region_hits(&readings, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();

        assert_eq!(hits.len(), 1);
        let hit = hits[0];
        assert_eq!(hit.module_x, 4);
        assert_eq!(hit.module_y, 0);
        assert_eq!(hit.position, Point3::new(0.0, 0.0, 99.0));
        assert_eq!(hit.time_avg, 1.0);
    }

    #[test]
    fn test_incompatible_modules_never_pair() {
        let mut layout = front_layout();
        for strip in 0..64u16 {
            layout.insert(6, strip, Point3::new(0.0, 0.0, 99.0));
        }
        let config = MatchConfig::for_mode(OperatingMode::Simulation);
        // Modules 0 and 6 do not overlap in either order.
        let readings = [reading(0, 32, 0), reading(6, 32, 0)];
        let mut hits = Vec::new();
        let mut next_id = 0;
        build_region_hits(&readings, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_timing_cut_is_strict() {
        let layout = front_layout();
        let config = MatchConfig::for_mode(OperatingMode::Simulation);
        let mut hits = Vec::new();
        let mut next_id = 0;

        // Exactly at the cut: rejected.
        let at_cut = [reading(4, 32, 0), reading(0, 32, 4)];
        build_region_hits(&at_cut, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();
        assert!(hits.is_empty());

        // One tick inside: accepted.
        let inside = [reading(4, 32, 0), reading(0, 32, 3)];
        build_region_hits(&inside, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_adjacent_strip_shifts_by_half_pitch() {
        let layout = front_layout();
        let config = MatchConfig::for_mode(OperatingMode::Simulation);
        // Strips 32 and 33 both fired on the x module.
        let readings = [reading(4, 32, 0), reading(4, 33, 0), reading(0, 32, 0)];
        let mut hits = Vec::new();
        let mut next_id = 0;
        build_region_hits(&readings, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();

        // Both x strips pair with the y strip.
        assert_eq!(hits.len(), 2);
        let from_32 = hits.iter().find(|h| h.channel_x == 32).unwrap();
        assert_eq!(from_32.position.x, HALF_STRIP_PITCH);
        // Strip 33 has no neighbour at 34, so it stays on its center.
        let from_33 = hits.iter().find(|h| h.channel_x == 33).unwrap();
        assert_eq!(from_33.position.x, 2.5);
    }

    #[test]
    fn test_hit_ids_continue_across_calls() {
        let layout = front_layout();
        let config = MatchConfig::for_mode(OperatingMode::Simulation);
        let readings = [reading(4, 32, 0), reading(0, 32, 0)];
        let mut hits = Vec::new();
        let mut next_id = 0;
        build_region_hits(&readings, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();
        build_region_hits(&readings, Region::Front, &layout, &config, &mut next_id, &mut hits)
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 0);
        assert_eq!(hits[1].id, 1);
    }
}
