use crate::constants::{CONFIG_ELEMENT_ID, MANIFEST_ELEMENT_ID, SCREEN_HEIGHT, SCREEN_WIDTH};
use draw_core::layout::letterbox;
use draw_core::{AssetManifest, DrawConfig};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Letterbox the canvas into the window at the stage aspect ratio and size its
/// backing store for the device pixel ratio. Returns the ratio.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio().max(1.0);
    let inner_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let inner_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let css = letterbox(Vec2::new(inner_w, inner_h), SCREEN_WIDTH / SCREEN_HEIGHT);

    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.x));
    _ = style.set_property("height", &format!("{}px", css.y));
    canvas.set_width(((SCREEN_WIDTH as f64) * dpr) as u32);
    canvas.set_height(((SCREEN_HEIGHT as f64) * dpr) as u32);
    dpr
}

fn json_script_text(document: &web::Document, element_id: &str) -> Option<String> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Defaults, overridden by the `#draw-config` JSON block when present.
pub fn read_config(document: &web::Document) -> anyhow::Result<DrawConfig> {
    let config = match json_script_text(document, CONFIG_ELEMENT_ID) {
        Some(text) => serde_json::from_str::<DrawConfig>(&text)
            .map_err(|e| anyhow::anyhow!("#{} is not valid config JSON: {}", CONFIG_ELEMENT_ID, e))?,
        None => DrawConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// The `#asset-manifest` JSON block, if the page provides one.
pub fn read_manifest(document: &web::Document) -> anyhow::Result<Option<AssetManifest>> {
    json_script_text(document, MANIFEST_ELEMENT_ID)
        .map(|text| {
            serde_json::from_str::<AssetManifest>(&text).map_err(|e| {
                anyhow::anyhow!("#{} is not a valid manifest: {}", MANIFEST_ELEMENT_ID, e)
            })
        })
        .transpose()
}
