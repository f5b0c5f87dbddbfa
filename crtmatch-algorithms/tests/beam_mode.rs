//! Beam-data conventions: channel interleaving, mirrored modules, as-built
//! corrections, and trigger-board gating.

use approx::assert_relative_eq;
use crtmatch_algorithms::{
    bucket_readings, build_region_hits, BucketedReadings, EventMatcher, EventScratch, SkipReason,
};
use crtmatch_core::{
    ChannelReading, DetectorLayout, Event, MatchConfig, OperatingMode, Point3, Region, Track,
    TriggerCoincidence,
};

fn beam_config() -> MatchConfig {
    MatchConfig::for_mode(OperatingMode::Beam)
}

/// Front crossing of y-module 13 (strip-mirrored) and x-module 6.
fn front_layout() -> DetectorLayout {
    let mut layout = DetectorLayout::new();
    for strip in 0..64u16 {
        let offset = 2.5 * (f64::from(strip) - 32.0);
        layout.insert(6, strip, Point3::new(offset, 0.0, 99.0));
        layout.insert(13, strip, Point3::new(0.0, offset, 99.0));
    }
    layout
}

/// Back crossing of y-module 15 (strip-mirrored) and x-module 8, whose
/// geometry lives in module 11's surveyed slot. Distinct x bases make any
/// confusion between the two slots visible.
fn back_layout() -> DetectorLayout {
    let mut layout = DetectorLayout::new();
    for strip in 0..64u16 {
        let offset = 2.5 * f64::from(strip);
        layout.insert(8, strip, Point3::new(1000.0 + offset, 0.0, 700.0));
        layout.insert(11, strip, Point3::new(2000.0 + offset, 0.0, 700.0));
        layout.insert(15, strip, Point3::new(0.0, 2.5 * (f64::from(strip) - 32.0), 700.0));
    }
    layout
}

#[test]
fn test_interleaved_channels_and_mirroring_set_the_position() {
    let layout = front_layout();
    let config = beam_config();
    let readings = [
        // Channel 32 reads odd strip 1 on the x module.
        ChannelReading::new(6, 32, 100, 0),
        // Channel 0 reads strip 0, mirrored to 63 on module 13.
        ChannelReading::new(13, 0, 100, 0),
    ];

    let mut buckets = BucketedReadings::new();
    bucket_readings(&readings, &layout, &config, &mut buckets).unwrap();
    assert_eq!(buckets.front.len(), 2);

    let mut hits = Vec::new();
    let mut next_id = 0;
    build_region_hits(
        &buckets.front,
        Region::Front,
        &layout,
        &config,
        &mut next_id,
        &mut hits,
    )
    .unwrap();

    assert_eq!(hits.len(), 1);
    let hit = hits[0];
    // Strip 1 on the x module: 2.5 (1 - 32).
    assert_relative_eq!(hit.position.x, -77.5);
    // Mirrored strip 63 on the y module, then the front survey offset.
    assert_relative_eq!(hit.position.y, 77.5 + config.front_y_offset);
    assert_relative_eq!(hit.position.z, 99.0);
    // Metadata keeps the readout channels, not the remapped strips.
    assert_eq!(hit.channel_x, 32);
    assert_eq!(hit.channel_y, 0);
}

#[test]
fn test_back_region_reads_geometry_through_the_swapped_slot() {
    let layout = back_layout();
    let config = beam_config();
    let readings = [
        ChannelReading::new(8, 0, 100, 0),
        ChannelReading::new(15, 0, 100, 0),
    ];

    let mut buckets = BucketedReadings::new();
    bucket_readings(&readings, &layout, &config, &mut buckets).unwrap();
    assert_eq!(buckets.back.len(), 2);

    let mut hits = Vec::new();
    let mut next_id = 0;
    build_region_hits(
        &buckets.back,
        Region::Back,
        &layout,
        &config,
        &mut next_id,
        &mut hits,
    )
    .unwrap();

    assert_eq!(hits.len(), 1);
    let hit = hits[0];
    // Module 8's x comes from module 11's surveyed position.
    assert_relative_eq!(hit.position.x, 2000.0);
    // Mirrored strip 63 on module 15, then the back survey offset.
    assert_relative_eq!(hit.position.y, 77.5 + config.back_y_offset);
    // The hit still reports the module that fired.
    assert_eq!(hit.module_x, 8);
}

fn beam_event(coincidences: Vec<TriggerCoincidence>) -> Event {
    Event {
        number: 1,
        quality_flag: Some(13),
        readings: vec![
            ChannelReading::new(6, 32, 100, 0),
            ChannelReading::new(13, 0, 100, 0),
        ],
        tracks: vec![Track::new(
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(0.0, 0.0, 150.0),
        )],
        flashes: Vec::new(),
        coincidences,
    }
}

#[test]
fn test_quality_flag_skips_the_whole_event() {
    let layout = front_layout();
    let matcher = EventMatcher::new(beam_config());
    let mut scratch = EventScratch::new();

    let mut event = beam_event(vec![TriggerCoincidence::new((1 << 15) | (1 << 25))]);
    event.quality_flag = Some(12);
    let outcome = matcher.match_event(&event, &layout, &mut scratch).unwrap();
    assert_eq!(outcome.skip, Some(SkipReason::QualityFlag));
    assert_eq!(outcome.stats.events_skipped_quality, 1);
    assert_eq!(outcome.stats.events_processed, 0);
    assert!(outcome.records.is_empty());

    // An absent flag is not the accept value either.
    event.quality_flag = None;
    let outcome = matcher.match_event(&event, &layout, &mut scratch).unwrap();
    assert_eq!(outcome.skip, Some(SkipReason::QualityFlag));
}

#[test]
fn test_incomplete_trigger_mask_skips_the_whole_event() {
    let layout = front_layout();
    let matcher = EventMatcher::new(beam_config());
    let mut scratch = EventScratch::new();

    // Front bit only: no back pixel.
    let event = beam_event(vec![TriggerCoincidence::new(1 << 15)]);
    let outcome = matcher.match_event(&event, &layout, &mut scratch).unwrap();
    assert_eq!(outcome.skip, Some(SkipReason::TriggerPixels));
    assert_eq!(outcome.stats.events_skipped_pixels, 1);
}

#[test]
fn test_pixel_gate_selects_the_reported_crossing() {
    let layout = front_layout();
    let matcher = EventMatcher::new(beam_config());
    let mut scratch = EventScratch::new();

    // Modules (13, 6) cross at pixel 15.
    let matching = beam_event(vec![TriggerCoincidence::new((1 << 15) | (1 << 25))]);
    let outcome = matcher.match_event(&matching, &layout, &mut scratch).unwrap();
    assert!(outcome.skip.is_none());
    assert_eq!(outcome.stats.hits_built, 1);
    assert_eq!(outcome.stats.candidates, 1);

    // A different front pixel gates the hit out entirely.
    let elsewhere = beam_event(vec![TriggerCoincidence::new((1 << 8) | (1 << 25))]);
    let outcome = matcher.match_event(&elsewhere, &layout, &mut scratch).unwrap();
    assert!(outcome.skip.is_none());
    assert_eq!(outcome.stats.hits_built, 1);
    assert_eq!(outcome.stats.candidates, 0);
}

#[test]
fn test_silent_trigger_board_gates_every_hit() {
    let layout = front_layout();
    let matcher = EventMatcher::new(beam_config());
    let mut scratch = EventScratch::new();

    let event = beam_event(Vec::new());
    let outcome = matcher.match_event(&event, &layout, &mut scratch).unwrap();
    assert!(outcome.skip.is_none());
    assert_eq!(outcome.stats.hits_built, 1);
    assert_eq!(outcome.stats.candidates, 0);
}
