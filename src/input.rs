use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use draw_core::layout::display_to_scene;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Pointer position in stage pixels, whatever size the canvas is displayed at.
#[inline]
pub fn pointer_scene_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let local = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    let display = Vec2::new(rect.width() as f32, rect.height() as f32);
    display_to_scene(local, display, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
}
