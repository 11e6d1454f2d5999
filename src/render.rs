//! Canvas2D renderer: connection lines during transitions, then the glyphs.

use crate::constants::{GLYPH_FONT_STACK, LINK_LINE_WIDTH, LINK_RGB};
use crate::core::constants::{LINK_MAX_ALPHA, LINK_MAX_DIST};
use crate::core::machine::{MorphEngine, Phase};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    pub fn draw(&self, engine: &MorphEngine) -> anyhow::Result<()> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        if engine.phase() != Phase::Holding {
            self.draw_links(engine);
        }
        self.draw_glyphs(engine)
    }

    /// Faint segments between nearby particle pairs, alpha falling off
    /// linearly with distance. O(N^2), fine at ~400 particles.
    fn draw_links(&self, engine: &MorphEngine) {
        let particles = engine.particles();
        self.ctx.set_line_width(LINK_LINE_WIDTH);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dist = particles[i].pos.distance(particles[j].pos);
                if dist < LINK_MAX_DIST {
                    let alpha = (1.0 - dist / LINK_MAX_DIST) * LINK_MAX_ALPHA;
                    self.ctx
                        .set_stroke_style_str(&format!("rgba({}, {:.3})", LINK_RGB, alpha));
                    self.ctx.begin_path();
                    self.ctx
                        .move_to(particles[i].pos.x as f64, particles[i].pos.y as f64);
                    self.ctx
                        .line_to(particles[j].pos.x as f64, particles[j].pos.y as f64);
                    self.ctx.stroke();
                }
            }
        }
    }

    fn draw_glyphs(&self, engine: &MorphEngine) -> anyhow::Result<()> {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        for p in engine.particles() {
            self.ctx
                .set_font(&format!("{}px {}", p.size, GLYPH_FONT_STACK));
            self.ctx.set_fill_style_str(p.color);
            self.ctx
                .fill_text(p.glyph.as_str(), p.pos.x as f64, p.pos.y as f64)
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        Ok(())
    }
}
