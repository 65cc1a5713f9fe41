//! Easing curves and a delayed, fixed-length tween clock.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic acceleration then deceleration (power2.inOut).
    #[default]
    QuadInOut,
    /// Quadratic deceleration (power1.out).
    QuadOut,
}

impl Easing {
    /// Maps linear time `t` in 0..=1 to eased progress. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Where a tween is at a given local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenPhase {
    Pending,
    /// Eased progress in 0..1.
    Running(f32),
    Finished,
}

/// Start delay plus duration, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(delay: f32, duration: f32, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
        }
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }

    /// Phase at `elapsed` seconds since the tween was scheduled.
    pub fn phase(&self, elapsed: f32) -> TweenPhase {
        if elapsed < self.delay {
            TweenPhase::Pending
        } else if elapsed >= self.end() || self.duration <= 0.0 {
            TweenPhase::Finished
        } else {
            let t = (elapsed - self.delay) / self.duration;
            TweenPhase::Running(self.easing.apply(t))
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
