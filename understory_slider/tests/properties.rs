// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Round trip: a step-aligned value survives value -> pixel -> value.
//! 2. Clamp idempotence: snapping an aligned in-range value is a no-op.
//! 3. Range order: drags never let the handles cross or get closer than a step.
//! 4. Bounds: every reported value stays inside `[min, max]`.
//! 5. Grid: with steps that do not divide the range, or are fractional, every
//!    reported handle still sits on a step boundary counted from `min`.

use proptest::prelude::*;
use understory_slider::geometry::TrackGeometry;
use understory_slider::{Handle, Mode, SliderConfig, SliderEngine, SliderValue};

// ── Strategies ───────────────────────────────────────────────────────

/// `(min, step, step count, width)` with integer-valued bounds and steps.
fn arb_track() -> impl Strategy<Value = (f64, f64, u32, f64)> {
    (-500_i32..500, 1_u32..20, 1_u32..200, 1.0..2_000.0_f64)
        .prop_map(|(min, step, count, width)| (f64::from(min), f64::from(step), count, width))
}

/// `(min, step, max)` where the step is often fractional and rarely divides the range.
fn arb_uneven_track() -> impl Strategy<Value = (f64, f64, f64)> {
    let step = prop_oneof![
        Just(0.1),
        Just(0.25),
        Just(0.3),
        Just(1.5),
        Just(3.0),
        Just(4.0),
        Just(7.0),
    ];
    (-50.0..50.0_f64, step, 2.0..150.0_f64)
        .prop_map(|(min, step, steps)| (min, step, min + step * steps))
}

/// Distance from `value` to the nearest step boundary, in steps.
fn off_grid(track: &TrackGeometry, value: f64) -> f64 {
    ((track.snap(value) - value) / track.step).abs()
}

#[derive(Clone, Debug)]
enum Gesture {
    Start(Handle, f64),
    Move(f64),
    End,
    Cancel,
    Press(f64),
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    let handle = prop_oneof![Just(Handle::Start), Just(Handle::End)];
    prop_oneof![
        (handle, -100.0..700.0_f64).prop_map(|(h, x)| Gesture::Start(h, x)),
        (-100.0..700.0_f64).prop_map(Gesture::Move),
        Just(Gesture::End),
        Just(Gesture::Cancel),
        (-100.0..700.0_f64).prop_map(Gesture::Press),
    ]
}

/// Feeds one gesture to `engine`, returning the change it reported.
fn replay(engine: &mut SliderEngine, gesture: Gesture) -> Option<SliderValue> {
    match gesture {
        Gesture::Start(handle, x) => {
            engine.drag_start(handle, x);
            None
        }
        Gesture::Move(x) => engine
            .drag_state()
            .active()
            .and_then(|handle| engine.drag_move(handle, x, 0.0)),
        Gesture::End => {
            engine.drag_end();
            None
        }
        Gesture::Cancel => {
            engine.drag_cancel();
            None
        }
        Gesture::Press(x) => engine.track_press(x, 0.0),
    }
}

// ── 1. Round trip ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn aligned_values_round_trip_through_pixels(
        (min, step, count, width) in arb_track(),
        k in 0_u32..200,
    ) {
        let k = k.min(count);
        let max = min + step * f64::from(count);
        let track = TrackGeometry::new(min, max, step, width);
        let value = min + step * f64::from(k);

        prop_assert_eq!(track.value_at(track.position_of(value)), value);
    }
}

// ── 2. Clamp idempotence ─────────────────────────────────────────────

proptest! {
    #[test]
    fn snapping_is_idempotent(
        (min, step, count, width) in arb_track(),
        raw in -2_000.0..2_000.0_f64,
    ) {
        let max = min + step * f64::from(count);
        let track = TrackGeometry::new(min, max, step, width);
        let once = track.snap(raw);

        prop_assert!(once >= min && once <= max);
        prop_assert_eq!(track.snap(once), once);
    }
}

// ── 3 & 4. Range order and bounds ────────────────────────────────────

proptest! {
    #[test]
    fn range_handles_never_cross(
        step in 1_u32..10,
        gestures in prop::collection::vec(arb_gesture(), 1..60),
    ) {
        let step = f64::from(step);
        let config = SliderConfig::new(0.0, 100.0 * step).with_step(step);
        let mut engine = SliderEngine::uncontrolled(config, Mode::Range);
        engine.on_layout(600.0);

        for gesture in gestures {
            let change = replay(&mut engine, gesture);
            if let Some(change) = change {
                prop_assert_eq!(change, engine.value());
            }
            let SliderValue::Range(start, end) = engine.value() else {
                panic!("range engine reported a single value");
            };
            prop_assert!(start >= config.min && end <= config.max);
            prop_assert!(end - start >= step - 1e-9, "{start}..{end} closer than {step}");
        }
    }
}

// ── 5. Grid with uneven and fractional steps ─────────────────────────

proptest! {
    #[test]
    fn uneven_snaps_stay_on_grid_and_in_bounds(
        (min, step, max) in arb_uneven_track(),
        raw in -500.0..1_500.0_f64,
    ) {
        let track = TrackGeometry::new(min, max, step, 100.0);
        let snapped = track.snap(raw);

        prop_assert!(snapped >= min && snapped <= max, "{snapped} outside {min}..{max}");
        prop_assert!(off_grid(&track, snapped) <= 1e-9, "{snapped} off grid");
        prop_assert_eq!(track.snap(snapped), snapped);
    }

    #[test]
    fn uneven_range_handles_stay_on_grid(
        (min, step, max) in arb_uneven_track(),
        gestures in prop::collection::vec(arb_gesture(), 1..60),
    ) {
        let config = SliderConfig::new(min, max).with_step(step);
        let track = config.geometry(600.0);
        let mut engine = SliderEngine::uncontrolled(config, Mode::Range);
        engine.on_layout(600.0);

        for gesture in gestures {
            let change = replay(&mut engine, gesture);
            if let Some(change) = change {
                prop_assert_eq!(change, engine.value());
            }
            let SliderValue::Range(start, end) = engine.value() else {
                panic!("range engine reported a single value");
            };
            prop_assert!(start >= min && end <= max, "{start}..{end} outside {min}..{max}");
            prop_assert!(off_grid(&track, start) <= 1e-9, "start {start} off grid");
            prop_assert!(off_grid(&track, end) <= 1e-9, "end {end} off grid");
            prop_assert!(end - start >= step * (1.0 - 1e-9), "{start}..{end} closer than {step}");
        }
    }
}
