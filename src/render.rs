use crate::assets::ImageTable;
use crate::constants::*;
use crate::dom::js_err;
use draw_core::layout::Rect;
use draw_core::{BallVisual, ButtonFace};
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Canvas 2D scene =====================
//
// Three layers, back to front: the tube, the balls clipped to the glass and
// peek windows, then the shines and the play button. The balls layer is
// composed on a detached canvas so the window masks only cut the balls. Both
// windows are flattened into a single mask canvas and applied in one pass.

pub struct SceneRenderer {
    ctx: web::CanvasRenderingContext2d,
    balls_canvas: web::HtmlCanvasElement,
    balls_ctx: web::CanvasRenderingContext2d,
    mask_canvas: web::HtmlCanvasElement,
    mask_ctx: web::CanvasRenderingContext2d,
    images: ImageTable,
    dpr: f64,
}

fn detached_canvas(
    document: &web::Document,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = context_2d(&canvas)?;
    Ok((canvas, ctx))
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

impl SceneRenderer {
    pub fn new(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        images: ImageTable,
        dpr: f64,
    ) -> anyhow::Result<Self> {
        let ctx = context_2d(canvas)?;
        let (balls_canvas, balls_ctx) = detached_canvas(document)?;
        let (mask_canvas, mask_ctx) = detached_canvas(document)?;
        let mut renderer = Self {
            ctx,
            balls_canvas,
            balls_ctx,
            mask_canvas,
            mask_ctx,
            images,
            dpr,
        };
        renderer.set_pixel_ratio(dpr)?;
        Ok(renderer)
    }

    /// Resize the detached layers for `dpr` and redraw the window mask.
    pub fn set_pixel_ratio(&mut self, dpr: f64) -> anyhow::Result<()> {
        self.dpr = dpr;
        let (w, h) = (
            ((SCREEN_WIDTH as f64) * dpr) as u32,
            ((SCREEN_HEIGHT as f64) * dpr) as u32,
        );
        for canvas in [&self.balls_canvas, &self.mask_canvas] {
            canvas.set_width(w);
            canvas.set_height(h);
        }
        self.build_window_mask()
    }

    // Union of every window, drawn source-over onto a transparent canvas.
    fn build_window_mask(&self) -> anyhow::Result<()> {
        let ctx = &self.mask_ctx;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)
            .map_err(js_err)?;
        ctx.clear_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
        for (key, rect) in WINDOW_MASKS {
            self.sprite(ctx, key, *rect, 1.0)?;
        }
        Ok(())
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.dpr
    }

    pub fn render<'b>(
        &self,
        balls: impl Iterator<Item = &'b BallVisual>,
        face: ButtonFace,
    ) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)
            .map_err(js_err)?;
        ctx.clear_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);

        self.sprite(ctx, "tube", TUBE_RECT, 1.0)?;

        self.compose_balls(balls)?;
        ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.balls_canvas,
            0.0,
            0.0,
            SCREEN_WIDTH as f64,
            SCREEN_HEIGHT as f64,
        )
        .map_err(js_err)?;

        self.sprite(ctx, "peekshine", PEEK_SHINE_RECT, SHINE_ALPHA)?;
        self.sprite(ctx, "windowshine", WINDOW_SHINE_RECT, SHINE_ALPHA)?;
        self.sprite(ctx, face.asset_key(), PLAY_BUTTON_RECT, 1.0)?;
        Ok(())
    }

    fn compose_balls<'b>(&self, balls: impl Iterator<Item = &'b BallVisual>) -> anyhow::Result<()> {
        let ctx = &self.balls_ctx;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)
            .map_err(js_err)?;
        ctx.clear_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
        for ball in balls {
            self.ball(ctx, ball)?;
        }
        // Keep only what lies under one of the windows
        ctx.set_global_composite_operation("destination-in")
            .map_err(js_err)?;
        let res = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.mask_canvas,
            0.0,
            0.0,
            SCREEN_WIDTH as f64,
            SCREEN_HEIGHT as f64,
        );
        ctx.set_global_composite_operation("source-over")
            .map_err(js_err)?;
        res.map_err(js_err)
    }

    fn ball(&self, ctx: &web::CanvasRenderingContext2d, ball: &BallVisual) -> anyhow::Result<()> {
        if let Some(body) = self.images.get(ball.style.color.asset_key()) {
            ctx.save();
            if let Some(shadow) = ball.shadow {
                let offset = shadow.offset();
                ctx.set_shadow_color(SHADOW_COLOR);
                ctx.set_shadow_blur((shadow.blur as f64) * self.dpr);
                ctx.set_shadow_offset_x((offset.x as f64) * self.dpr);
                ctx.set_shadow_offset_y((offset.y as f64) * self.dpr);
            }
            let res = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                body,
                ball.position.x as f64,
                ball.position.y as f64,
                ball.size.x as f64,
                ball.size.y as f64,
            );
            ctx.restore();
            res.map_err(js_err)?;
        }

        let Some(label) = self.images.get(&ball.style.label_key) else {
            return Ok(());
        };
        let center = ball.label_world_center();
        let size = ball.style.label_size;
        ctx.save();
        ctx.translate(center.x as f64, center.y as f64).map_err(js_err)?;
        ctx.rotate(ball.label.rotation as f64).map_err(js_err)?;
        ctx.scale(ball.label.scale as f64, ball.label.scale as f64)
            .map_err(js_err)?;
        let (w, h) = (size.x as f64, size.y as f64);
        let res = if ball.label.blur_x > 0.0 {
            // Horizontal smear: evenly spaced faint copies across the blur width
            let spread = ball.label.blur_x as f64;
            let n = LABEL_SMEAR_SAMPLES;
            ctx.set_global_alpha(LABEL_SMEAR_ALPHA);
            (0..n).try_for_each(|i| {
                let dx = spread * (i as f64 / (n - 1) as f64 - 0.5);
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    label,
                    -w / 2.0 + dx,
                    -h / 2.0,
                    w,
                    h,
                )
            })
        } else {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(label, -w / 2.0, -h / 2.0, w, h)
        };
        ctx.restore();
        res.map_err(js_err)
    }

    fn sprite(
        &self,
        ctx: &web::CanvasRenderingContext2d,
        key: &str,
        rect: Rect,
        alpha: f64,
    ) -> anyhow::Result<()> {
        let Some(img) = self.images.get(key) else {
            return Ok(());
        };
        ctx.set_global_alpha(alpha);
        let res = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.x as f64,
            rect.y as f64,
            rect.w as f64,
            rect.h as f64,
        );
        ctx.set_global_alpha(1.0);
        res.map_err(js_err)
    }
}
