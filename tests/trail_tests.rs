// Host-side tests for the pointer trail and its throttle.

mod common;

use common::{effects, effects_with, run_until};
use cursor_fx::core::{
    EffectsConfig, ManualScheduler, ThrottleConfig, TimerKind, TrailConfig, TrailStep, Wake,
};

fn fast_moves() -> EffectsConfig {
    EffectsConfig {
        throttle: ThrottleConfig {
            min_interval_ms: 1.0,
            min_distance: 5.0,
        },
        ..EffectsConfig::default()
    }
}

#[test]
fn moves_inside_the_window_or_too_close_make_no_dots() {
    let mut fx = effects(1);
    let mut s = ManualScheduler::default();

    run_until(&mut fx, &mut s, 100.0);
    assert_eq!(fx.pointer_move(200.0, 200.0, 100.0, &mut s), Some(0));

    // 29ms later, far away
    assert_eq!(fx.pointer_move(400.0, 400.0, 129.0, &mut s), None);
    // in time, but under 5px from the accepted point
    assert_eq!(fx.pointer_move(203.0, 203.0, 200.0, &mut s), None);

    assert_eq!(fx.trail.pool().active_count(), 1);
    assert_eq!(s.pending_len(), 1);
}

#[test]
fn dot_is_configured_at_the_pointer() {
    let mut fx = effects(2);
    let mut s = ManualScheduler::default();
    run_until(&mut fx, &mut s, 1000.0);

    let slot = fx.pointer_move(42.0, 17.0, 1_000_123.0, &mut s).unwrap();
    let el = &fx.trail.handle(slot).unwrap().element;
    assert_eq!(el.display(), "block");
    assert_eq!(el.prop("left").as_deref(), Some("42px"));
    assert_eq!(el.prop("top").as_deref(), Some("17px"));
    assert_eq!(el.prop("opacity").as_deref(), Some("1"));
    // 1_000_123 mod 360
    assert_eq!(
        el.prop("background").as_deref(),
        Some("hsla(43, 90%, 60%, 0.7)")
    );

    let width: f32 = el
        .prop("width")
        .unwrap()
        .trim_end_matches("px")
        .parse()
        .unwrap();
    assert!((4.0..12.0).contains(&width), "width {width}");
}

#[test]
fn dot_dwells_shrinks_then_frees_its_slot() {
    let mut fx = effects(3);
    let mut s = ManualScheduler::default();
    run_until(&mut fx, &mut s, 100.0);
    let slot = fx.pointer_move(50.0, 50.0, 100.0, &mut s).unwrap();

    run_until(&mut fx, &mut s, 599.0);
    assert_eq!(
        fx.trail.handle(slot).unwrap().pending().map(|p| p.step),
        Some(TrailStep::Dwell)
    );

    // dwell fires at 600 and waits for the frame at 608
    run_until(&mut fx, &mut s, 600.0);
    let pending = fx.trail.handle(slot).unwrap().pending().unwrap();
    assert_eq!(pending.step, TrailStep::Shrink);
    assert_eq!(s.kind_of(pending.timer), Some(TimerKind::Frame));

    run_until(&mut fx, &mut s, 608.0);
    let handle = fx.trail.handle(slot).unwrap();
    assert_eq!(
        handle.element.prop("transform").as_deref(),
        Some("translate(-50%, -50%) scale(0)")
    );
    assert_eq!(handle.element.prop("opacity").as_deref(), Some("0"));
    assert!(handle.active);

    run_until(&mut fx, &mut s, 907.0);
    assert!(fx.trail.handle(slot).unwrap().active);
    run_until(&mut fx, &mut s, 908.0);
    let handle = fx.trail.handle(slot).unwrap();
    assert!(!handle.active);
    assert_eq!(handle.element.display(), "none");
    assert_eq!(s.pending_len(), 0);
}

#[test]
fn freed_slot_is_reused_first() {
    let mut fx = effects(4);
    let mut s = ManualScheduler::default();
    run_until(&mut fx, &mut s, 100.0);
    assert_eq!(fx.pointer_move(10.0, 10.0, 100.0, &mut s), Some(0));
    run_until(&mut fx, &mut s, 140.0);
    assert_eq!(fx.pointer_move(30.0, 10.0, 140.0, &mut s), Some(1));

    run_until(&mut fx, &mut s, 1000.0);
    assert_eq!(fx.trail.pool().active_count(), 0);
    assert_eq!(fx.pointer_move(90.0, 90.0, 1000.0, &mut s), Some(0));
}

#[test]
fn saturated_trail_steals_slot_zero_and_cancels_its_timer() {
    let mut fx = effects_with(fast_moves(), 5);
    let mut s = ManualScheduler::default();

    let mut t = 100.0;
    for i in 0..30 {
        run_until(&mut fx, &mut s, t);
        let slot = fx.pointer_move(10.0 * (i + 1) as f32, 0.0, t, &mut s);
        assert_eq!(slot, Some(i));
        t += 2.0;
    }
    assert_eq!(fx.trail.pool().active_count(), 30);

    let old = fx.trail.handle(0).unwrap().pending().unwrap().timer;
    run_until(&mut fx, &mut s, t);
    assert_eq!(fx.pointer_move(500.0, 500.0, t, &mut s), Some(0));

    assert_eq!(s.kind_of(old), None, "previous dwell must be cancelled");
    assert_eq!(s.pending_for(Wake::trail(0)), 1);
    let el = &fx.trail.handle(0).unwrap().element;
    assert_eq!(el.prop("left").as_deref(), Some("500px"));
}

#[test]
fn reacquired_dot_keeps_its_own_timeline() {
    let mut fx = effects_with(fast_moves(), 6);
    let pool_size = fx.trail.pool().len();
    let mut s = ManualScheduler::default();

    let mut t = 100.0;
    for i in 0..pool_size {
        run_until(&mut fx, &mut s, t);
        fx.pointer_move(10.0 * (i + 1) as f32, 0.0, t, &mut s);
        t += 2.0;
    }
    // slot 0 was first shown at 100; steal it at 400 mid-dwell
    run_until(&mut fx, &mut s, 400.0);
    assert_eq!(fx.pointer_move(900.0, 900.0, 400.0, &mut s), Some(0));

    // the dot first shown at 100 would have hidden at 908
    run_until(&mut fx, &mut s, 1000.0);
    let handle = fx.trail.handle(0).unwrap();
    assert!(handle.active);
    assert_eq!(handle.element.prop("opacity").as_deref(), Some("0"));

    run_until(&mut fx, &mut s, 1300.0);
    assert!(!fx.trail.handle(0).unwrap().active);
    assert_eq!(fx.trail.pool().active_count(), 0);
}

#[test]
fn dot_stolen_while_fading_is_not_hidden_by_the_old_fade() {
    let mut fx = effects_with(
        EffectsConfig {
            trail: TrailConfig {
                pool_size: 1,
                ..TrailConfig::default()
            },
            ..fast_moves()
        },
        8,
    );
    let mut s = ManualScheduler::default();
    run_until(&mut fx, &mut s, 100.0);
    assert_eq!(fx.pointer_move(10.0, 10.0, 100.0, &mut s), Some(0));

    // shrink starts on the frame at 608, hide is due 300ms later
    run_until(&mut fx, &mut s, 608.0);
    let old = fx.trail.handle(0).unwrap().pending().unwrap();
    assert_eq!(old.step, TrailStep::Hide);
    assert_eq!(s.due_of(old.timer), Some(908.0));

    run_until(&mut fx, &mut s, 700.0);
    assert_eq!(fx.pointer_move(300.0, 300.0, 700.0, &mut s), Some(0));
    assert_eq!(s.kind_of(old.timer), None);

    run_until(&mut fx, &mut s, 908.0);
    let handle = fx.trail.handle(0).unwrap();
    assert!(handle.active);
    assert_eq!(handle.element.display(), "block");
    assert_eq!(handle.element.prop("left").as_deref(), Some("300px"));
    assert_eq!(handle.pending().map(|p| p.step), Some(TrailStep::Dwell));
}

#[test]
fn every_handle_has_at_most_one_pending_timer() {
    let mut fx = effects_with(fast_moves(), 7);
    let mut s = ManualScheduler::default();
    let mut t = 50.0;
    for i in 0..200 {
        run_until(&mut fx, &mut s, t);
        fx.pointer_move((i % 40) as f32 * 8.0, (i / 40) as f32 * 8.0, t, &mut s);
        for slot in 0..fx.trail.pool().len() {
            assert!(s.pending_for(Wake::trail(slot)) <= 1);
        }
        t += 7.0;
    }
}
