// Host-side tests for easing and the staggered ball sequencer.

use draw_core::{
    slot_target_x, AnimationSequencer, BallId, BallPool, DrawConfig, Easing, Tween, TweenPhase,
};
use std::f32::consts::PI;
use std::time::Duration;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

fn setup(numbers: &[u32]) -> (DrawConfig, BallPool, Vec<BallId>, AnimationSequencer) {
    let config = DrawConfig::default();
    let mut pool = BallPool::new();
    let ids: Vec<BallId> = numbers
        .iter()
        .enumerate()
        .map(|(slot, &n)| pool.acquire(n, slot, &config))
        .collect();
    let mut seq = AnimationSequencer::new();
    seq.animate(&ids, &mut pool, &config.motion());
    (config, pool, ids, seq)
}

#[test]
fn easing_curves_hit_endpoints_and_midpoint() {
    for easing in [Easing::Linear, Easing::QuadInOut, Easing::QuadOut] {
        assert!(approx(easing.apply(0.0), 0.0), "{easing:?} at 0");
        assert!(approx(easing.apply(1.0), 1.0), "{easing:?} at 1");
        assert!(approx(easing.apply(2.0), 1.0), "{easing:?} clamps");
    }
    assert!(approx(Easing::QuadInOut.apply(0.5), 0.5));
    assert!(approx(Easing::QuadInOut.apply(0.25), 0.125));
    assert!(approx(Easing::QuadOut.apply(0.5), 0.75));
}

#[test]
fn ease_in_out_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = Easing::QuadInOut.apply(i as f32 / 100.0);
        assert!(v >= prev, "not increasing at step {i}");
        prev = v;
    }
}

#[test]
fn tween_phase_respects_delay_and_duration() {
    let t = Tween::new(1.0, 2.0, Easing::Linear);
    assert_eq!(t.phase(0.5), TweenPhase::Pending);
    assert_eq!(t.phase(2.0), TweenPhase::Running(0.5));
    assert_eq!(t.phase(3.0), TweenPhase::Finished);
}

#[test]
fn animate_applies_travel_effects() {
    let (config, pool, ids, seq) = setup(&[3, 15, 1, 9, 6]);
    assert_eq!(seq.track_count(), 5);
    for id in ids {
        let ball = pool.get(id).expect("ball");
        assert!(ball.shadow.is_some(), "shadow missing on {}", ball.number);
        assert_eq!(ball.label.blur_x, config.label_blur);
        assert_eq!(ball.position.x, config.origin_x);
    }
}

#[test]
fn balls_start_moving_one_stagger_apart() {
    let (config, mut pool, ids, mut seq) = setup(&[1, 2, 3, 4, 5]);
    seq.tick(secs(0.25), &mut pool);
    assert!(pool.get(ids[0]).unwrap().position.x < config.origin_x);
    for id in &ids[1..] {
        assert_eq!(pool.get(*id).unwrap().position.x, config.origin_x);
    }

    seq.tick(secs(0.5), &mut pool);
    assert!(pool.get(ids[1]).unwrap().position.x < config.origin_x);
    assert_eq!(pool.get(ids[2]).unwrap().position.x, config.origin_x);
}

#[test]
fn label_spins_with_travel_progress() {
    let (config, mut pool, ids, mut seq) = setup(&[7]);
    seq.tick(secs(1.0), &mut pool);
    let ball = pool.get(ids[0]).unwrap();
    let target = slot_target_x(&config.motion(), 0);
    let halfway = config.origin_x + (target - config.origin_x) * 0.5;
    assert!(approx(ball.position.x, halfway), "x={}", ball.position.x);
    assert!(approx(ball.label.rotation, PI), "rotation={}", ball.label.rotation);
    assert_eq!(ball.label.center, ball.size / 2.0);
}

#[test]
fn landing_fires_once_and_resets_label() {
    let (config, mut pool, ids, mut seq) = setup(&[4, 8]);
    let landed = seq.tick(secs(2.1), &mut pool);
    assert_eq!(landed.as_slice(), &[0]);
    let ball = pool.get(ids[0]).unwrap();
    assert_eq!(ball.position.x, config.tube_start_x);
    assert_eq!(ball.label.rotation, 0.0);
    assert_eq!(ball.label.blur_x, 0.0);
    assert!(ball.shadow.is_some());

    let landed = seq.tick(secs(0.05), &mut pool);
    assert!(landed.is_empty());
    assert_eq!(seq.landed_count(), 1);
}

#[test]
fn landed_ball_pulses_up_then_back() {
    let (config, mut pool, ids, mut seq) = setup(&[2]);
    seq.tick(secs(2.0), &mut pool);
    seq.tick(secs(0.1), &mut pool);
    let mid_up = pool.get(ids[0]).unwrap().label.scale;
    assert!(approx(mid_up, 1.0 + config.pulse_scale * 0.75), "scale={mid_up}");

    seq.tick(secs(0.2), &mut pool);
    let mid_down = pool.get(ids[0]).unwrap().label.scale;
    assert!(mid_down > 1.0 && mid_down < 1.0 + config.pulse_scale);

    seq.tick(secs(0.2), &mut pool);
    assert_eq!(pool.get(ids[0]).unwrap().label.scale, 1.0);
    assert!(seq.is_settled());
}

#[test]
fn one_large_step_settles_every_ball_in_its_slot() {
    let (config, mut pool, ids, mut seq) = setup(&[3, 15, 1, 9, 6]);
    let landed = seq.tick(secs(10.0), &mut pool);
    assert_eq!(landed.as_slice(), &[0, 1, 2, 3, 4]);
    assert!(seq.is_settled());
    for (slot, id) in ids.iter().enumerate() {
        let ball = pool.get(*id).unwrap();
        assert_eq!(ball.position.x, slot_target_x(&config.motion(), slot));
        assert_eq!(ball.label.scale, 1.0);
        assert_eq!(ball.label.blur_x, 0.0);
    }
}

#[test]
fn slot_targets_step_by_ball_width() {
    let motion = DrawConfig::default().motion();
    assert_eq!(slot_target_x(&motion, 0), 137.0);
    assert_eq!(slot_target_x(&motion, 1), 137.0 + 72.0);
    assert_eq!(slot_target_x(&motion, 4), 137.0 + 4.0 * 72.0);
}
