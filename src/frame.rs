use crate::render::SceneRenderer;
use draw_core::{DrawSampler, DrawSession};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Longest step fed to the session; a backgrounded tab resumes with one big dt.
const MAX_FRAME_DT_SEC: f32 = 0.25;

pub struct FrameContext<S: DrawSampler> {
    pub session: Rc<RefCell<DrawSession<S>>>,
    pub renderer: SceneRenderer,
    pub dpr: Rc<Cell<f64>>,
    pub last_instant: Instant,
}

impl<S: DrawSampler> FrameContext<S> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let dpr = self.dpr.get();
        if dpr != self.renderer.pixel_ratio() {
            if let Err(e) = self.renderer.set_pixel_ratio(dpr) {
                log::error!("resize error: {:?}", e);
            }
        }

        let mut session = self.session.borrow_mut();
        let report = session.tick(dt);
        if report.re_enabled {
            log::debug!("[frame] play button re-enabled");
        }
        if let Err(e) = self.renderer.render(session.displayed(), session.button_face()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop<S: DrawSampler + 'static>(frame_ctx: Rc<RefCell<FrameContext<S>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
