//! Reusable ball visuals.
//!
//! Visuals are created on first need and never destroyed. A draw rebinds free
//! entries in place; clearing a draw only flips the in-use flags, so the pool
//! keeps its size across draws.

use crate::config::DrawConfig;
use crate::style::{ball_style, BallStyle};
use glam::Vec2;

/// Index of a visual inside its [`BallPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BallId(usize);

impl BallId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Body drop shadow applied while a ball is displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropShadow {
    pub blur: f32,
    pub distance: f32,
    pub angle_deg: f32,
}

impl DropShadow {
    /// Offset of the shadow from the body, in scene pixels.
    pub fn offset(&self) -> Vec2 {
        let a = self.angle_deg.to_radians();
        Vec2::new(a.cos(), a.sin()) * self.distance
    }
}

/// Transform and effects of the number overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelState {
    /// Centre relative to the ball's top-left corner.
    pub center: Vec2,
    pub rotation: f32,
    pub scale: f32,
    /// Horizontal directional blur in pixels; 0 means none.
    pub blur_x: f32,
}

impl Default for LabelState {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            blur_x: 0.0,
        }
    }
}

/// One pooled ball: the rendering collaborator draws these as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct BallVisual {
    pub number: u32,
    pub slot: usize,
    pub style: BallStyle,
    pub position: Vec2,
    pub size: Vec2,
    pub label: LabelState,
    pub shadow: Option<DropShadow>,
    pub in_use: bool,
}

impl BallVisual {
    fn new(number: u32, slot: usize, config: &DrawConfig) -> Self {
        let mut visual = Self {
            number,
            slot,
            style: ball_style(number, &config.metrics()),
            position: Vec2::ZERO,
            size: Vec2::new(config.ball_width, config.ball_height),
            label: LabelState::default(),
            shadow: None,
            in_use: true,
        };
        visual.reset(config);
        visual
    }

    /// Rebind an existing visual to a new number.
    fn rebind(&mut self, number: u32, slot: usize, config: &DrawConfig) {
        self.number = number;
        self.slot = slot;
        self.style = ball_style(number, &config.metrics());
        self.size = Vec2::new(config.ball_width, config.ball_height);
        self.in_use = true;
        self.reset(config);
    }

    // Back at the entry point with no effects.
    fn reset(&mut self, config: &DrawConfig) {
        self.position = Vec2::new(config.origin_x, config.lane_y);
        self.label = LabelState {
            center: self.style.label_center,
            ..LabelState::default()
        };
        self.shadow = None;
    }

    /// Label centre in scene coordinates.
    pub fn label_world_center(&self) -> Vec2 {
        self.position + self.label.center
    }
}

#[derive(Debug, Default)]
pub struct BallPool {
    balls: Vec<BallVisual>,
}

impl BallPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// First free visual, rebound to `number`; a new one only when none is free.
    pub fn acquire(&mut self, number: u32, slot: usize, config: &DrawConfig) -> BallId {
        if let Some(index) = self.balls.iter().position(|b| !b.in_use) {
            self.balls[index].rebind(number, slot, config);
            return BallId(index);
        }
        self.balls.push(BallVisual::new(number, slot, config));
        BallId(self.balls.len() - 1)
    }

    /// Mark every visual free. Safe to call repeatedly.
    pub fn release_all(&mut self) {
        for ball in &mut self.balls {
            ball.in_use = false;
        }
    }

    pub fn get(&self, id: BallId) -> Option<&BallVisual> {
        self.balls.get(id.0)
    }

    pub fn get_mut(&mut self, id: BallId) -> Option<&mut BallVisual> {
        self.balls.get_mut(id.0)
    }

    /// Total visuals ever created.
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn in_use_count(&self) -> usize {
        self.balls.iter().filter(|b| b.in_use).count()
    }
}
