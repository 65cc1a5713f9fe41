//! Presentation rule for a drawn number: body colour and label box.
//!
//! Pure functions only; the pool applies the result to a visual.

use crate::config::BallMetrics;
use crate::constants::{
    DOUBLE_DIGIT_LABEL_WIDTH, LABEL_HEIGHT, SINGLE_DIGIT_LABEL_WIDTH, SINGLE_DIGIT_MAX,
};
use crate::manifest::label_asset;
use glam::Vec2;

/// Three fixed body colours, picked by `number % 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BallColor {
    Red,
    Yellow,
    Blue,
}

impl BallColor {
    pub fn for_number(number: u32) -> Self {
        match number % 3 {
            1 => BallColor::Red,
            2 => BallColor::Yellow,
            _ => BallColor::Blue,
        }
    }

    pub fn asset_key(self) -> &'static str {
        match self {
            BallColor::Red => "redb",
            BallColor::Yellow => "yellowb",
            BallColor::Blue => "blueb",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BallStyle {
    pub color: BallColor,
    pub label_key: String,
    pub label_size: Vec2,
    /// Label centre relative to the ball's top-left corner.
    pub label_center: Vec2,
}

#[inline]
pub fn label_width(number: u32) -> f32 {
    if number > SINGLE_DIGIT_MAX {
        DOUBLE_DIGIT_LABEL_WIDTH
    } else {
        SINGLE_DIGIT_LABEL_WIDTH
    }
}

pub fn ball_style(number: u32, metrics: &BallMetrics) -> BallStyle {
    BallStyle {
        color: BallColor::for_number(number),
        label_key: label_asset(number),
        label_size: Vec2::new(label_width(number), LABEL_HEIGHT),
        label_center: Vec2::new(metrics.width / 2.0, metrics.height / 2.0),
    }
}
