use crate::audio::SoundBank;
use crate::constants::PLAY_BUTTON_RECT;
use crate::dom;
use crate::input;
use draw_core::{DrawSampler, DrawSession};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring<S: DrawSampler + 'static> {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<DrawSession<S>>>,
    pub sounds: Option<Rc<SoundBank>>,
}

/// Pressing the play button starts a draw. Presses while the button is
/// locked are dropped by the session.
pub fn wire_play_button<S: DrawSampler + 'static>(w: InputWiring<S>) {
    let target: web::EventTarget = w.canvas.clone().unchecked_into();
    dom::add_listener(&target, "pointerdown", move |ev: web::PointerEvent| {
        if let Some(sounds) = &w.sounds {
            sounds.resume();
        }
        let pos = input::pointer_scene_pos(&ev, &w.canvas);
        if !PLAY_BUTTON_RECT.contains(pos) {
            return;
        }
        ev.prevent_default();
        let report = w.session.borrow_mut().activate();
        if let (Some(report), Some(sounds)) = (report, &w.sounds) {
            sounds.play_cue(report.cue);
        }
    });
}

/// Refit the canvas on window resize; the frame loop picks up the new pixel
/// ratio from `dpr`.
pub fn wire_window_resize(canvas: &web::HtmlCanvasElement, dpr: Rc<Cell<f64>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let target: web::EventTarget = window.unchecked_into();
    dom::add_listener(&target, "resize", move |_: web::Event| {
        dpr.set(dom::fit_canvas_to_window(&canvas));
    });
}
