use crate::constants::{
    BACKGROUND_SOUND, BACKGROUND_SOUND_FILE, BALL_SOUND, BALL_SOUND_FILE, MASTER_GAIN, SOUND_ROOT,
};
use crate::dom::js_err;
use draw_core::Cue;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded sound buffers routed through one master gain. Playback is
/// best-effort: failures are logged and never interrupt a draw.
pub struct SoundBank {
    ctx: web::AudioContext,
    master: web::GainNode,
    buffers: RefCell<FnvHashMap<String, web::AudioBuffer>>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(js_err(e))
        }
    }
}

async fn fetch_bytes(url: &str) -> anyhow::Result<js_sys::ArrayBuffer> {
    let win = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_val = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_val.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} {}", resp.status(), resp.status_text());
    }
    let buf_val = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    buf_val.dyn_into().map_err(js_err)
}

impl SoundBank {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err)?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        Ok(Self {
            ctx,
            master,
            buffers: RefCell::new(FnvHashMap::default()),
        })
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    /// Fetch and decode `url`, registering it under `name`.
    pub async fn load(&self, name: &str, url: &str) -> anyhow::Result<()> {
        let bytes = fetch_bytes(url).await?;
        let decoded = JsFuture::from(self.ctx.decode_audio_data(&bytes).map_err(js_err)?)
            .await
            .map_err(js_err)?;
        let buffer: web::AudioBuffer = decoded.dyn_into().map_err(js_err)?;
        self.buffers.borrow_mut().insert(name.to_string(), buffer);
        Ok(())
    }

    pub fn play(&self, name: &str, looped: bool) {
        let buffers = self.buffers.borrow();
        let Some(buffer) = buffers.get(name) else {
            log::warn!("Sound {} not found!", name);
            return;
        };
        let src = match web::AudioBufferSourceNode::new(&self.ctx) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(buffer));
        src.set_loop(looped);
        _ = src.connect_with_audio_node(&self.master);
        if let Err(e) = src.start() {
            log::warn!("{} failed to start: {:?}", name, e);
        }
    }

    pub fn play_cue(&self, cue: Cue) {
        self.play(cue_sound(cue), false);
    }
}

pub fn cue_sound(cue: Cue) -> &'static str {
    match cue {
        Cue::Draw => BALL_SOUND,
    }
}

/// Load the cue and the background track in the background, then start the
/// background loop. A sound that fails to load is only reported.
pub fn load_sounds(bank: Rc<SoundBank>) {
    spawn_local(async move {
        let cue_url = format!("{SOUND_ROOT}{BALL_SOUND_FILE}");
        if let Err(e) = bank.load(BALL_SOUND, &cue_url).await {
            log::warn!("[audio] {} unavailable: {:?}", cue_url, e);
        }
        let bg_url = format!("{SOUND_ROOT}{BACKGROUND_SOUND_FILE}");
        match bank.load(BACKGROUND_SOUND, &bg_url).await {
            Ok(()) => bank.play(BACKGROUND_SOUND, true),
            Err(e) => log::warn!("[audio] {} unavailable: {:?}", bg_url, e),
        }
    });
}
