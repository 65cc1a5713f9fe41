#![cfg(target_arch = "wasm32")]
use draw_core::{default_manifest, AssetPaths, DrawSession, RandomSampler};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ball-draw starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn build_sounds() -> Option<Rc<audio::SoundBank>> {
    match audio::SoundBank::new() {
        Ok(bank) => {
            let bank = Rc::new(bank);
            audio::load_sounds(bank.clone());
            Some(bank)
        }
        Err(e) => {
            log::warn!("[audio] disabled: {:?}", e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let dpr = Rc::new(Cell::new(dom::fit_canvas_to_window(&canvas)));
    events::wire_window_resize(&canvas, dpr.clone());

    let config = dom::read_config(&document)?;
    let manifest = dom::read_manifest(&document)?
        .unwrap_or_else(|| default_manifest(config.range_size));

    // Nothing below runs until every image is in
    let images = assets::load_images(&manifest, &AssetPaths::default()).await?;
    assets::check_scene_assets(&images, &config)?;

    let sounds = build_sounds();
    let renderer = render::SceneRenderer::new(&document, &canvas, images, dpr.get())?;
    let session = Rc::new(RefCell::new(DrawSession::new(
        config,
        RandomSampler::from_entropy(),
    )));

    events::wire_play_button(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
        sounds,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        renderer,
        dpr,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
