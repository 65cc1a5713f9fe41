//! Staggered per-ball travel into the tube.
//!
//! Every ball gets its own track: a delayed ease-in-out slide from the entry
//! point to its slot, a progress hook that spins and re-centres the label, and
//! a landing hook that fires exactly once and starts the highlight pulse.
//! Tracks never wait on each other.

use crate::config::MotionParams;
use crate::constants::{SHADOW_ANGLE_DEG, SHADOW_BLUR, SHADOW_DISTANCE};
use crate::pool::{BallId, BallPool, BallVisual, DropShadow};
use crate::tween::{lerp, Easing, Tween, TweenPhase};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::time::Duration;

pub const BODY_SHADOW: DropShadow = DropShadow {
    blur: SHADOW_BLUR,
    distance: SHADOW_DISTANCE,
    angle_deg: SHADOW_ANGLE_DEG,
};

#[derive(Debug, Clone)]
struct BallTrack {
    ball: BallId,
    slot: usize,
    from_x: f32,
    to_x: f32,
    travel: Tween,
    pulse_up: Tween,
    pulse_down: Tween,
    elapsed: f32,
    landed: bool,
    settled: bool,
}

#[derive(Debug, Default)]
pub struct AnimationSequencer {
    tracks: Vec<BallTrack>,
    motion: MotionParams,
}

/// Resting x of the ball in `slot`.
#[inline]
pub fn slot_target_x(motion: &MotionParams, slot: usize) -> f32 {
    motion.tube_start_x + slot as f32 * motion.slot_width
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule one track per ball, in slot order. Replaces any previous
    /// schedule.
    pub fn animate(&mut self, balls: &[BallId], pool: &mut BallPool, motion: &MotionParams) {
        self.motion = *motion;
        self.tracks.clear();
        for (slot, &id) in balls.iter().enumerate() {
            let Some(ball) = pool.get_mut(id) else {
                log::warn!("[sequencer] ball {:?} missing from pool", id);
                continue;
            };
            ball.shadow = Some(BODY_SHADOW);
            ball.label.blur_x = motion.label_blur;

            let travel = Tween::new(
                slot as f32 * motion.stagger_sec,
                motion.travel_sec,
                Easing::QuadInOut,
            );
            let pulse_up = Tween::new(travel.end(), motion.pulse_sec, Easing::QuadOut);
            let pulse_down = Tween::new(pulse_up.end(), motion.pulse_sec, Easing::QuadOut);
            self.tracks.push(BallTrack {
                ball: id,
                slot,
                from_x: ball.position.x,
                to_x: slot_target_x(motion, slot),
                travel,
                pulse_up,
                pulse_down,
                elapsed: 0.0,
                landed: false,
                settled: false,
            });
        }
    }

    /// Advance every track by `dt`. Returns the slots that landed during this
    /// step, in slot order.
    pub fn tick(&mut self, dt: Duration, pool: &mut BallPool) -> SmallVec<[usize; 8]> {
        let dt_sec = dt.as_secs_f32();
        let gain = self.motion.pulse_scale;
        let mut landed = SmallVec::new();
        for track in self.tracks.iter_mut().filter(|t| !t.settled) {
            track.elapsed += dt_sec;
            let Some(ball) = pool.get_mut(track.ball) else {
                track.settled = true;
                continue;
            };
            match track.travel.phase(track.elapsed) {
                TweenPhase::Pending => {}
                TweenPhase::Running(progress) => {
                    ball.position.x = lerp(track.from_x, track.to_x, progress);
                    on_progress(ball, progress);
                }
                TweenPhase::Finished => {
                    if !track.landed {
                        ball.position.x = track.to_x;
                        on_landed(ball);
                        track.landed = true;
                        landed.push(track.slot);
                    }
                    ball.label.scale = match (
                        track.pulse_up.phase(track.elapsed),
                        track.pulse_down.phase(track.elapsed),
                    ) {
                        (TweenPhase::Running(p), _) => 1.0 + gain * p,
                        (_, TweenPhase::Running(p)) => 1.0 + gain * (1.0 - p),
                        (_, TweenPhase::Finished) => {
                            track.settled = true;
                            1.0
                        }
                        _ => 1.0 + gain,
                    };
                }
            }
        }
        landed
    }

    /// True once every scheduled ball has landed and finished its pulse.
    pub fn is_settled(&self) -> bool {
        self.tracks.iter().all(|t| t.settled)
    }

    pub fn landed_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.landed).count()
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

// Label spins one full turn over the trip and stays centred on the body.
fn on_progress(ball: &mut BallVisual, progress: f32) {
    ball.label.rotation = progress * TAU;
    ball.label.center = ball.size / 2.0;
}

fn on_landed(ball: &mut BallVisual) {
    ball.label.rotation = 0.0;
    ball.label.blur_x = 0.0;
    ball.label.center = ball.size / 2.0;
}
