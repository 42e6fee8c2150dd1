// =============================================================================
// OffGriid Web - Canvas Background Effect
// =============================================================================
// Table of Contents:
// 1. Render Loop
// 2. Background Component
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, PointerEvent, Window};

use crate::config::BackgroundEffectConfig;
use crate::effects::{backing_size, shade, ParticleField, PointerTracker};
use crate::error::BrowserError;
use crate::utils::window;

/// Edge length of a drawn particle, in backing pixels.
const DOT_SIZE: f64 = 1.5;

type FrameCallback = Closure<dyn FnMut(f64)>;

// -----------------------------------------------------------------------------
// 1. Render Loop
// -----------------------------------------------------------------------------

/// Running animation. Dropping it stops the loop and removes listeners.
struct RenderLoop {
    window: Window,
    alive: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
    on_pointer: Closure<dyn FnMut(PointerEvent)>,
    on_resize: Closure<dyn FnMut(Event)>,
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.on_pointer.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
        );
        // Breaks the tick -> tick reference cycle.
        self.tick.borrow_mut().take();
        log::debug!("Background effect stopped");
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, BrowserError> {
    canvas
        .get_context("2d")
        .map_err(|e| BrowserError::js("getContext", e))?
        .ok_or(BrowserError::Api {
            api: "getContext",
            message: "2d context unavailable".to_string(),
        })?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| BrowserError::js("getContext", e.into()))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, colors: &[String]) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    let particles = field.particles();

    // One pass per color keeps fillStyle changes to the palette size.
    for (index, color) in colors.iter().enumerate() {
        ctx.set_fill_style_str(color);
        for p in particles.iter().filter(|p| shade(p, colors.len()) == index) {
            ctx.fill_rect(p.x, p.y, DOT_SIZE, DOT_SIZE);
        }
    }
}

/// Match the backing store to the canvas' laid-out size.
fn fit_canvas(canvas: &HtmlCanvasElement, resolution: f64) -> (f64, f64) {
    let (width, height) = backing_size(
        canvas.client_width() as f64,
        canvas.client_height() as f64,
        resolution,
    );
    if canvas.width() != width as u32 || canvas.height() != height as u32 {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    (width, height)
}

fn start(canvas: HtmlCanvasElement, config: BackgroundEffectConfig) -> Result<RenderLoop, BrowserError> {
    let window = window()?;
    let ctx = context_2d(&canvas)?;

    let (width, height) = fit_canvas(&canvas, config.resolution);

    let field = Rc::new(RefCell::new(ParticleField::new(width, height, &config)));
    let tracker = Rc::new(RefCell::new(PointerTracker::new(&config)));
    let alive = Rc::new(Cell::new(true));
    let frame_id = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

    let on_pointer = {
        let tracker = Rc::clone(&tracker);
        let canvas = canvas.clone();
        let resolution = config.resolution;
        Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
            let rect = canvas.get_bounding_client_rect();
            let x = (ev.client_x() as f64 - rect.left()) * resolution;
            let y = (ev.client_y() as f64 - rect.top()) * resolution;
            tracker.borrow_mut().moved(x, y, ev.time_stamp());
        })
    };
    window
        .add_event_listener_with_callback("pointermove", on_pointer.as_ref().unchecked_ref())
        .map_err(|e| BrowserError::js("addEventListener", e))?;

    let on_resize = {
        let field = Rc::clone(&field);
        let canvas = canvas.clone();
        let resolution = config.resolution;
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let (width, height) = fit_canvas(&canvas, resolution);
            if field.borrow_mut().resize(width, height) {
                log::debug!("Background effect resized to {}x{}", width, height);
            }
        })
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| BrowserError::js("addEventListener", e))?;

    {
        let window = window.clone();
        let alive = Rc::clone(&alive);
        let frame_id = Rc::clone(&frame_id);
        let next = Rc::clone(&tick);
        let colors = config.colors.clone();
        let last_ts = Cell::new(None::<f64>);

        *tick.borrow_mut() = Some(Closure::new(move |ts: f64| {
            if !alive.get() {
                return;
            }
            let dt = last_ts.replace(Some(ts)).map_or(0.0, |prev| (ts - prev) / 1000.0);

            {
                let mut field = field.borrow_mut();
                let pointer = tracker.borrow().active(ts, field.width(), field.height());
                field.step(dt, pointer);
                draw(&ctx, &field, &colors);
            }

            if let Some(callback) = next.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(e) => {
                        log::warn!("Background effect halted: {}", BrowserError::js("requestAnimationFrame", e));
                        frame_id.set(None);
                    }
                }
            }
        }));
    }

    if let Some(callback) = tick.borrow().as_ref() {
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| BrowserError::js("requestAnimationFrame", e))?;
        frame_id.set(Some(id));
    }

    log::debug!("Background effect started at {}x{}", width, height);

    Ok(RenderLoop {
        window,
        alive,
        frame_id,
        tick,
        on_pointer,
        on_resize,
    })
}

// -----------------------------------------------------------------------------
// 2. Background Component
// -----------------------------------------------------------------------------

/// Full-viewport decorative particle field behind the page content.
#[component]
pub fn Background(#[prop(optional)] config: Option<BackgroundEffectConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let canvas_ref = NodeRef::<Canvas>::new();
    let running = StoredValue::new_local(None::<RenderLoop>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if running.with_value(|r| r.is_some()) {
            return;
        }
        match start(canvas, config.clone()) {
            Ok(render_loop) => running.set_value(Some(render_loop)),
            Err(e) => log::warn!("Background effect disabled: {}", e),
        }
    });

    on_cleanup(move || {
        running.update_value(|r| {
            r.take();
        });
    });

    view! {
        <div class="background-layer" aria-hidden="true">
            <canvas node_ref=canvas_ref class="background-canvas"></canvas>
        </div>
    }
}
