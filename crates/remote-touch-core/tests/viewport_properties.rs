//! Integration tests for the viewport pipeline.
//!
//! These tests drive the public API the way the client does (pan/zoom the
//! view, map touches, throttle samples, encode commands) and check the
//! properties that must hold across the whole range of inputs rather than at
//! a single point.

use std::time::{Duration, Instant};

use remote_touch_core::{
    center_point_from_transform,
    domain::mapping::offset_for_center,
    encode_command, fit_viewport, point_to_normalized,
    protocol::messages::MoveBody,
    Channel, Command, CursorOffsets, NormalizedPoint, Point, Size, ThrottleGate, Vector,
    ViewTransform,
};

const EPS: f64 = 1e-9;

fn zoomed_and_panned(scale: f64, pan: Vector) -> ViewTransform {
    let mut t = ViewTransform::new();
    t.apply_zoom(scale);
    t.commit_zoom();
    t.apply_pan(pan);
    t.commit_pan();
    t
}

#[test]
fn test_center_point_is_exact_inverse_of_pan_across_scales() {
    let viewport = Size::new(844.0, 474.75);
    let pans = [
        Vector::new(0.0, 0.0),
        Vector::new(120.0, -40.0),
        Vector::new(-300.5, 210.25),
        Vector::new(1_000.0, 1_000.0),
    ];

    for step in 0..=40 {
        let scale = 1.0 + f64::from(step) * 0.1;
        for pan in pans {
            // Arrange
            let t = zoomed_and_panned(scale, pan);

            // Act – recentre, then derive the offset that recentring implies
            let center = center_point_from_transform(viewport, &t).expect("usable viewport");
            let offset = offset_for_center(viewport, t.scale(), center).expect("usable viewport");

            // Assert
            assert!(
                (offset.dx - t.offset().dx).abs() < EPS && (offset.dy - t.offset().dy).abs() < EPS,
                "scale {scale}: offset {:?} did not round-trip (got {offset:?})",
                t.offset()
            );
        }
    }
}

#[test]
fn test_zoom_out_below_one_always_snaps_to_origin() {
    for scale in [1.5, 2.0, 3.7, 5.0] {
        for pinch in [0.9, 0.5, 0.1, 0.01] {
            // Arrange
            let mut t = zoomed_and_panned(scale, Vector::new(55.0, -80.0));

            // Act
            t.apply_zoom(pinch / scale);
            t.commit_zoom();

            // Assert
            assert_eq!(t.scale(), 1.0);
            assert_eq!(t.offset(), Vector::ZERO);
        }
    }
}

#[test]
fn test_scale_stays_within_bounds_for_any_sample_sequence() {
    let mut t = ViewTransform::new();
    let samples = [0.2, 7.0, 1.1, 30.0, 0.5, 0.01, 2.2, 9.9];
    for s in samples {
        t.apply_zoom(s);
        assert!((1.0..=5.0).contains(&t.scale()));
        if t.scale() == 1.0 {
            assert_eq!(t.offset(), Vector::ZERO);
        }
    }
}

#[test]
fn test_throttle_never_admits_two_samples_closer_than_interval() {
    // Arrange – irregular sample spacing between 1 and 17 ms
    let mut gate = ThrottleGate::default();
    let t0 = Instant::now();
    let mut now = t0;
    let mut admitted = Vec::new();

    // Act
    for i in 0..500u64 {
        now += Duration::from_millis(1 + (i * 7) % 17);
        if gate.admit(Channel::Move, now) {
            admitted.push(now);
        }
    }

    // Assert
    assert!(admitted.len() > 1);
    for pair in admitted.windows(2) {
        assert!(pair[1] - pair[0] >= Duration::from_millis(30));
    }
}

#[test]
fn test_throttle_admits_one_sample_per_elapsed_interval_on_exact_grid() {
    // Arrange – a sample every millisecond for one second
    let mut gate = ThrottleGate::default();
    let t0 = Instant::now();

    // Act
    let admitted = (0..1_000u64)
        .filter(|ms| gate.admit(Channel::Scroll, t0 + Duration::from_millis(*ms)))
        .count();

    // Assert – admissions at 0, 50, ..., 950
    assert_eq!(admitted, 20);
}

#[test]
fn test_scroll_delta_follows_admitted_baseline() {
    let mut gate = ThrottleGate::default();
    let t0 = Instant::now();

    assert_eq!(gate.admit_scroll(10.0, t0), Some(10.0));
    assert_eq!(gate.admit_scroll(35.0, t0 + Duration::from_millis(50)), Some(25.0));
    assert_eq!(gate.admit_scroll(40.0, t0 + Duration::from_millis(70)), None);
    assert_eq!(gate.admit_scroll(45.0, t0 + Duration::from_millis(100)), Some(10.0));
}

#[test]
fn test_touch_to_wire_clamps_every_edge_touch() {
    // Arrange – touches along every edge of an aspect-fit frame
    let container = Size::new(390.0, 844.0);
    let frame = fit_viewport(container, 16.0 / 9.0).expect("usable container");
    let offsets = CursorOffsets::default();
    let edges = [
        Point::new(frame.origin.x, frame.origin.y),
        Point::new(frame.origin.x + frame.size.width, frame.origin.y),
        Point::new(frame.origin.x, frame.origin.y + frame.size.height),
        Point::new(
            frame.origin.x + frame.size.width + 40.0,
            frame.origin.y + frame.size.height + 40.0,
        ),
    ];

    for touch in edges {
        // Act
        let mapped = point_to_normalized(frame.to_local(touch), frame.size, &offsets, 1.0)
            .expect("usable frame");
        let req = encode_command(&Command::Move {
            point: mapped.transmitted,
            click: false,
        })
        .expect("encodable");
        let body: MoveBody = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();

        // Assert
        assert!(NormalizedPoint::new(body.x, body.y).is_within_bounds());
    }
}

#[test]
fn test_reference_touch_maps_to_documented_coordinate() {
    let mapped = point_to_normalized(
        Point::new(500.0, 500.0),
        Size::new(1000.0, 1000.0),
        &CursorOffsets {
            screen_lead: Vector::new(-20.0, -50.0),
            visual_hotspot: Vector::new(10.0, 10.0),
        },
        1.0,
    )
    .unwrap();

    assert!((mapped.transmitted.x - 0.480).abs() < EPS);
    assert!((mapped.transmitted.y - 0.450).abs() < EPS);
}
