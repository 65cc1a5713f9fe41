use glam::Vec2;

/// Axis-aligned rectangle in scene pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// Largest size with `aspect` (width / height) that fits inside `container`.
pub fn letterbox(container: Vec2, aspect: f32) -> Vec2 {
    let height = container.x / aspect;
    if height > container.y {
        Vec2::new(container.y * aspect, container.y)
    } else {
        Vec2::new(container.x, height)
    }
}

/// Map a point inside a displayed box of `display` size to scene coordinates.
#[inline]
pub fn display_to_scene(local: Vec2, display: Vec2, scene: Vec2) -> Vec2 {
    if display.x <= 0.0 || display.y <= 0.0 {
        return Vec2::ZERO;
    }
    local / display * scene
}
