//! Test forging of whole elements through the public interface.

extern crate approx;
extern crate libwaveforge;

use approx::assert_abs_diff_eq;

use libwaveforge::{ChannelId, Context, Element, Error, Forge, ForgeSpec, Segment, SegmentGroup, Transformation};
use libwaveforge::atoms::{FLAT, MARKER_OFF, MARKER_PULSE, RAMP, SINE};

/// A readout pulse: a ramp up, a symbolic plateau and a ramp down on the
/// drive channel, with a marker covering the plateau.
fn pulse_element() -> Element {
    let drive = SegmentGroup::new(vec![
        Segment::new(RAMP, "edge").with("start", 0f64).with("stop", "level"),
        Segment::new(FLAT, "plateau").with("amplitude", "level"),
        Segment::new(RAMP, "edge").with("start", "level").with("stop", 0f64),
    ], "total").with_transformation(Transformation::linear(vec![
        ("plateau", vec![(1f64, "total"), (-2f64, "edge")]),
    ]));
    let marker = SegmentGroup::new(vec![
        Segment::new(MARKER_PULSE, "total").with("delay", "edge").with("marker_duration", "width"),
    ], "total").with_transformation(Transformation::linear(vec![
        ("width", vec![(1f64, "total"), (-2f64, "edge")]),
    ]));
    Element::new()
        .with_channel(1u32, drive)
        .with_channel("m1", marker)
        .with_local_context(Context::new().with("edge", 0.25f64))
}

#[test]
fn forge_pulse() {
    let elem = pulse_element();
    let ctx = Context::new().with("total", 1f64).with("level", 0.5f64);
    let spec = ForgeSpec::new(8f64).unwrap();

    assert_eq!(elem.get_duration(&ctx), Ok(1f64));
    let out = elem.forge(&spec, &ctx).unwrap();

    let drive = &out[&ChannelId::Index(1)];
    assert_eq!(drive.len(), 8);
    let expected = [0f64, 0.5f64, 0.5f64, 0.5f64, 0.5f64, 0.5f64, 0.5f64, 0f64];
    for (e, a) in expected.iter().zip(drive.iter()) {
        assert_abs_diff_eq!(e, a, epsilon = 1e-12);
    }
    let marker = &out[&ChannelId::from("m1")];
    assert_eq!(marker.to_vec(), vec![0f64, 0f64, 1f64, 1f64, 1f64, 1f64, 0f64, 0f64]);
}

#[test]
fn same_tree_other_context() {
    let elem = pulse_element();
    let spec = ForgeSpec::new(8f64).unwrap();
    let short = Context::new().with("total", 0.5f64).with("level", 1f64);
    let out = elem.forge(&spec, &short).unwrap();
    assert!(out.values().all(|c| c.len() == 4));
}

#[test]
fn missing_symbol_surfaces_before_samples() {
    let elem = pulse_element();
    let ctx = Context::new().with("total", 1f64);
    let spec = ForgeSpec::new(8f64).unwrap();
    // Durations don't need `level`, the samples do.
    assert_eq!(elem.get_duration(&ctx), Ok(1f64));
    assert_eq!(elem.forge(&spec, &ctx), Err(Error::ContextResolution("level".to_string())));
}

#[test]
fn mismatched_channels() {
    let elem = pulse_element()
        .with_channel(2u32, Segment::new(MARKER_OFF, "total").with("unused", 0f64))
        .with_channel(3u32, Segment::new(SINE, 2f64).with("frequency", 1f64));
    let ctx = Context::new().with("total", 1f64).with("level", 0.5f64);
    match elem.get_duration(&ctx) {
        Err(Error::ElementDuration { durations, failed }) => {
            assert_eq!(durations, vec![1f64, 2f64]);
            assert!(failed.is_empty());
        },
        other => panic!("expected a duration mismatch, got {:?}", other),
    }
}
