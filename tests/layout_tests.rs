// Host-side tests for stage layout and pointer mapping.

use draw_core::layout::{display_to_scene, letterbox, Rect};
use glam::Vec2;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-3
}

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(900.0, 690.0, 100.0, 50.0);
    assert!(r.contains(Vec2::new(900.0, 690.0)));
    assert!(r.contains(Vec2::new(950.0, 715.0)));
    assert!(!r.contains(Vec2::new(1000.0, 715.0)));
    assert!(!r.contains(Vec2::new(950.0, 740.0)));
    assert!(!r.contains(Vec2::new(899.9, 700.0)));
}

#[test]
fn letterbox_limits_by_height_on_wide_windows() {
    let size = letterbox(Vec2::new(2000.0, 768.0), 1024.0 / 768.0);
    assert!(close(size, Vec2::new(1024.0, 768.0)), "{size:?}");
}

#[test]
fn letterbox_limits_by_width_on_tall_windows() {
    let size = letterbox(Vec2::new(512.0, 1000.0), 1024.0 / 768.0);
    assert!(close(size, Vec2::new(512.0, 384.0)), "{size:?}");
}

#[test]
fn display_points_scale_to_scene() {
    let scene = Vec2::new(1024.0, 768.0);
    let display = Vec2::new(512.0, 384.0);
    assert_eq!(
        display_to_scene(Vec2::new(256.0, 192.0), display, scene),
        Vec2::new(512.0, 384.0)
    );
    assert_eq!(display_to_scene(Vec2::ZERO, display, scene), Vec2::ZERO);
}

#[test]
fn zero_sized_display_maps_to_origin() {
    let scene = Vec2::new(1024.0, 768.0);
    assert_eq!(
        display_to_scene(Vec2::new(5.0, 5.0), Vec2::ZERO, scene),
        Vec2::ZERO
    );
}
