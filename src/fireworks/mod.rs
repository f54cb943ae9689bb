//! Fireworks celebration overlay: canvas sizing, the cooperative
//! requestAnimationFrame loop and drawing. The simulation itself lives in
//! [`engine`] and is kept free of browser APIs.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

pub mod engine;

use engine::CelebrationSim;

const OVERLAY_ID: &str = "celebrateOverlay";
const CANVAS_ID: &str = "fireworksCanvas";

struct Celebration {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sim: CelebrationSim<Pcg32>,
    resize_cb: Closure<dyn FnMut()>,
    // Stamp of the launch that owns the frame loop; a queued continuation
    // from an older launch must not step the current state.
    generation: u64,
}

// The Option in this cell doubles as the liveness flag for the frame loop:
// a queued continuation that finds it empty neither draws nor re-arms.
thread_local! {
    static CELEBRATION: RefCell<Option<Celebration>> = const { RefCell::new(None) };
    static GENERATION: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn viewport_size(win: &web_sys::Window) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

fn fit_canvas_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (w, h) = window().map(|win| viewport_size(&win)).unwrap_or((0.0, 0.0));
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

/// Shows the overlay, fires the initial bursts and starts the frame loop.
/// Re-triggering while already active restarts the celebration cleanly.
pub fn launch() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if CELEBRATION.with(|c| c.borrow().is_some()) {
        dismiss()?;
    }

    if let Some(overlay) = doc.get_element_by_id(OVERLAY_ID) {
        overlay.set_attribute("style", "display:block;")?;
    }

    let canvas: HtmlCanvasElement = doc
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("no fireworks canvas"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let (w, h) = fit_canvas_to_viewport(&canvas);

    let mut sim = CelebrationSim::new(Pcg32::seed_from_u64(crate::performance_now().to_bits()));
    sim.trigger(w, h);

    // Keep the canvas and simulation in step with viewport resizes while active.
    let resize_canvas = canvas.clone();
    let resize_cb = Closure::wrap(Box::new(move || {
        let (w, h) = fit_canvas_to_viewport(&resize_canvas);
        CELEBRATION.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                state.sim.resize(w, h);
            }
        });
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    let generation = GENERATION.with(|g| {
        let next = g.get() + 1;
        g.set(next);
        next
    });
    CELEBRATION.with(|cell| {
        cell.replace(Some(Celebration {
            canvas,
            ctx,
            sim,
            resize_cb,
            generation,
        }))
    });

    start_frame_loop(generation);
    Ok(())
}

/// Hides the overlay, invalidates the scheduled frame continuation (by
/// emptying the state cell) and discards all particles. Safe to call while
/// dormant.
pub fn dismiss() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    if let Some(doc) = win.document() {
        if let Some(overlay) = doc.get_element_by_id(OVERLAY_ID) {
            overlay.set_attribute("style", "display:none;")?;
        }
    }
    let state = CELEBRATION.with(|cell| cell.borrow_mut().take());
    if let Some(mut state) = state {
        state.sim.stop();
        win.remove_event_listener_with_callback(
            "resize",
            state.resize_cb.as_ref().unchecked_ref(),
        )?;
    }
    Ok(())
}

fn start_frame_loop(generation: u64) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let live = CELEBRATION.with(|cell| {
            let mut cell = cell.borrow_mut();
            match cell.as_mut() {
                Some(state) if state.generation == generation => {
                    frame_step(state);
                    true
                }
                _ => false,
            }
        });
        if live {
            if let Some(w) = window() {
                let _ = w
                    .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn frame_step(state: &mut Celebration) {
    let w = state.canvas.width() as f64;
    let h = state.canvas.height() as f64;
    state.ctx.clear_rect(0.0, 0.0, w, h);
    state.sim.advance();
    for p in state.sim.particles() {
        state.ctx.set_global_alpha(p.opacity().max(0.0));
        state.ctx.begin_path();
        if state
            .ctx
            .arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            continue;
        }
        state
            .ctx
            .set_fill_style_str(&format!("hsl({}, 90%, 60%)", p.hue(w)));
        state.ctx.fill();
    }
    state.ctx.set_global_alpha(1.0);
}
