//! Externally configurable draw parameters.
//!
//! Every field has a default from `constants.rs`; a partial JSON object only
//! overrides the keys it names.

use crate::constants::*;
use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub range_size: u32,
    pub visible_count: usize,
    pub ball_width: f32,
    pub ball_height: f32,
    pub tube_start_x: f32,
    pub origin_x: f32,
    pub lane_y: f32,
    pub stagger_ms: u64,
    pub travel_ms: u64,
    pub pulse_ms: u64,
    pub pulse_scale: f32,
    pub label_blur: f32,
    /// Fixed pacing override. When unset the cooldown is derived from the
    /// animation timings, see [`DrawConfig::cooldown`].
    pub cooldown_ms: Option<u64>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            range_size: RANGE_SIZE,
            visible_count: VISIBLE_COUNT,
            ball_width: BALL_WIDTH,
            ball_height: BALL_HEIGHT,
            tube_start_x: TUBE_START_X,
            origin_x: BALL_ORIGIN_X,
            lane_y: BALL_LANE_Y,
            stagger_ms: STAGGER_MS,
            travel_ms: TRAVEL_MS,
            pulse_ms: PULSE_MS,
            pulse_scale: PULSE_SCALE_GAIN,
            label_blur: LABEL_BLUR_X,
            cooldown_ms: None,
        }
    }
}

impl DrawConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_count == 0 {
            return Err(ConfigError::NoVisibleBalls);
        }
        if self.visible_count as u64 > u64::from(self.range_size) {
            return Err(ConfigError::CountExceedsRange {
                visible: self.visible_count,
                range: self.range_size,
            });
        }
        if !(self.ball_width > 0.0 && self.ball_height > 0.0) {
            return Err(ConfigError::BallSize {
                width: self.ball_width,
                height: self.ball_height,
            });
        }
        if self.travel_ms == 0 {
            return Err(ConfigError::ZeroTravel);
        }
        Ok(())
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn travel(&self) -> Duration {
        Duration::from_millis(self.travel_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    /// Time from the last ball starting its travel to the end of its pulse,
    /// plus the stagger of every ball before it.
    pub fn animation_span(&self) -> Duration {
        let last_delay = self.stagger() * self.visible_count.saturating_sub(1) as u32;
        last_delay + self.travel() + self.pulse() * 2
    }

    /// Lockout window after an activation before the trigger re-enables.
    pub fn cooldown(&self) -> Duration {
        match self.cooldown_ms {
            Some(ms) => Duration::from_millis(ms),
            None => self.animation_span(),
        }
    }

    pub fn metrics(&self) -> BallMetrics {
        BallMetrics {
            width: self.ball_width,
            height: self.ball_height,
        }
    }

    pub fn motion(&self) -> MotionParams {
        MotionParams {
            tube_start_x: self.tube_start_x,
            slot_width: self.ball_width,
            stagger_sec: self.stagger().as_secs_f32(),
            travel_sec: self.travel().as_secs_f32(),
            pulse_sec: self.pulse().as_secs_f32(),
            pulse_scale: self.pulse_scale,
            label_blur: self.label_blur,
        }
    }
}

/// Ball body size used by the style rule to centre labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for BallMetrics {
    fn default() -> Self {
        Self {
            width: BALL_WIDTH,
            height: BALL_HEIGHT,
        }
    }
}

/// Timings and geometry the sequencer needs, in seconds and scene pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub tube_start_x: f32,
    pub slot_width: f32,
    pub stagger_sec: f32,
    pub travel_sec: f32,
    pub pulse_sec: f32,
    pub pulse_scale: f32,
    pub label_blur: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        DrawConfig::default().motion()
    }
}
