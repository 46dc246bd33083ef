//! Canvas glue: owns the two layer canvases, feeds the pure engine with
//! browser time/randomness, and runs the requestAnimationFrame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::engine::sampler::Rng;
use crate::engine::theme::Theme;
use crate::engine::{Config, Engine};

/// Fixed alpha of the persistent base-grid watermark.
const BASE_LAYER_ALPHA: f64 = 0.01;
/// Shadow blur radius for the animated glow, in px.
const GLOW_RADIUS: f64 = 16.0;

/// Browser-side entropy for the engine.
struct JsRandom;

impl Rng for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or("unable to get 2D context")?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

struct Background {
    base: HtmlCanvasElement,
    overlay: HtmlCanvasElement,
    base_ctx: CanvasRenderingContext2d,
    overlay_ctx: CanvasRenderingContext2d,
    engine: Engine,
}

impl Background {
    /// Full rebuild: resize both canvases to the viewport, re-read theme and
    /// title, regenerate the grid and repaint the base layer. Used at
    /// startup and again for every resize or theme switch.
    fn reinit(&mut self) -> Result<(), JsValue> {
        let window = window().ok_or("no window")?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);

        self.base.set_width(width as u32);
        self.base.set_height(height as u32);
        self.overlay.set_width(width as u32);
        self.overlay.set_height(height as u32);

        self.base_ctx.clear_rect(0.0, 0.0, width, height);
        self.overlay_ctx.clear_rect(0.0, 0.0, width, height);

        let document = window.document().ok_or("no document")?;
        let is_dark = document
            .document_element()
            .map(|root| root.class_list().contains("dark"))
            .unwrap_or(false);
        let title = document.title();

        self.engine
            .reinit(width, height, &title, Theme::from_dark_flag(is_dark));
        self.paint_base()?;

        web_sys::console::log_1(
            &format!(
                "letterfield: grid rebuilt with {} cells",
                self.engine.grid().len()
            )
            .into(),
        );
        Ok(())
    }

    /// Paints every grid cell onto the base canvas at the watermark alpha.
    /// The canvas stays hidden until the full grid is down.
    fn paint_base(&self) -> Result<(), JsValue> {
        let style = self.base.style();
        style.set_property("opacity", "0")?;

        let palette = self.engine.palette();
        self.base_ctx.set_font(&self.engine.config().font);
        self.base_ctx.set_text_align("start");
        self.base_ctx.set_text_baseline("top");
        self.base_ctx
            .set_fill_style_str(&palette.base.rgba(BASE_LAYER_ALPHA));

        let mut buf = [0u8; 4];
        for cell in self.engine.grid() {
            self.base_ctx.fill_text(
                cell.glyph.encode_utf8(&mut buf),
                cell.x as f64,
                cell.y as f64,
            )?;
        }

        style.set_property("opacity", "1")?;
        Ok(())
    }

    fn reset_timing(&mut self) {
        self.engine.reset_timing(now_ms());
    }

    /// One animation tick: clear the overlay, advance the engine, draw the
    /// surviving letters with their eased alpha.
    fn tick(&mut self, now: f64) -> Result<(), JsValue> {
        self.overlay_ctx.clear_rect(
            0.0,
            0.0,
            self.overlay.width() as f64,
            self.overlay.height() as f64,
        );

        let font = format!("bold {}", self.engine.config().font);
        self.overlay_ctx.set_font(&font);
        self.overlay_ctx.set_text_align("start");
        self.overlay_ctx.set_text_baseline("top");
        self.overlay_ctx.set_shadow_blur(GLOW_RADIUS);

        let frame = self.engine.step(now, &mut JsRandom);
        let animated = self.engine.palette().animated;

        let mut buf = [0u8; 4];
        for draw in &frame {
            let color = animated.rgba(draw.alpha);
            self.overlay_ctx.set_fill_style_str(&color);
            self.overlay_ctx.set_shadow_color(&color);
            self.overlay_ctx.fill_text(
                draw.glyph.encode_utf8(&mut buf),
                draw.x as f64,
                draw.y as f64,
            )?;
        }
        Ok(())
    }
}

/// Wires up the background on the given canvases and starts the loop.
pub fn start(base: HtmlCanvasElement, overlay: HtmlCanvasElement) -> Result<(), JsValue> {
    let base_ctx = context_2d(&base)?;
    let overlay_ctx = context_2d(&overlay)?;

    let background = Rc::new(RefCell::new(Background {
        base,
        overlay,
        base_ctx,
        overlay_ctx,
        engine: Engine::new(Config::default(), now_ms()),
    }));
    background.borrow_mut().reinit()?;

    let win = window().ok_or("no window")?;
    let document = win.document().ok_or("no document")?;

    // Viewport resize and theme switches funnel into the same full-reinit
    // path; regeneration has exactly one mutation path.
    {
        let background = background.clone();
        let reinit = Closure::wrap(Box::new(move || {
            if let Err(e) = background.borrow_mut().reinit() {
                web_sys::console::error_1(&e);
            }
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", reinit.as_ref().unchecked_ref())?;
        win.add_event_listener_with_callback("theme-changed", reinit.as_ref().unchecked_ref())?;
        reinit.forget();
    }

    // Visibility and focus changes re-base the spawn clock, so the stalled
    // interval never counts as elapsed animation time on resume.
    {
        let background = background.clone();
        let reset = Closure::wrap(Box::new(move || {
            background.borrow_mut().reset_timing();
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("visibilitychange", reset.as_ref().unchecked_ref())?;
        win.add_event_listener_with_callback("focus", reset.as_ref().unchecked_ref())?;
        win.add_event_listener_with_callback("blur", reset.as_ref().unchecked_ref())?;
        reset.forget();
    }

    // Cancellation token for the loop. Nothing stops the animation while the
    // page lives; on pagehide the next scheduled tick simply declines to
    // reschedule itself.
    let running = Rc::new(Cell::new(true));
    {
        let running = running.clone();
        let stop = Closure::wrap(Box::new(move || {
            running.set(false);
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("pagehide", stop.as_ref().unchecked_ref())?;
        stop.forget();
    }

    // Animation loop. `f` holds the animation-frame closure so that we can
    // keep calling `request_animation_frame` recursively. Storing it inside
    // an `Option` allows us to create the `Closure` first and then obtain a
    // reference to it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !running.get() {
            return;
        }

        if let Err(e) = background.borrow_mut().tick(timestamp) {
            web_sys::console::error_1(&e);
        }

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut(f64)>));

    win.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}
