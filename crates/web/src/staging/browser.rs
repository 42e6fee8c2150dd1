// =============================================================================
// OffGriid Web - Browser Scheduling Capabilities
// =============================================================================
// requestAnimationFrame, requestIdleCallback and timer backed implementations
// of the scheduling traits. Every handle cancels its callback when dropped.
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::IdleRequestOptions;

use super::{FrameSource, IdleSource, ScheduledTask, Task, TimerIdle, TimerSource};
use crate::config::StagingConfig;
use crate::error::BrowserError;

/// Shared slot so a task can run from either the JS callback or a fallback.
type TaskSlot = Rc<RefCell<Option<Task>>>;

fn slot(task: Task) -> TaskSlot {
    Rc::new(RefCell::new(Some(task)))
}

fn run_slot(slot: &TaskSlot) {
    let task = slot.borrow_mut().take();
    if let Some(task) = task {
        task();
    }
}

/// One-shot JS callback that runs whatever is left in `slot`.
fn slot_closure(slot: &TaskSlot) -> Closure<dyn FnMut()> {
    let slot = Rc::clone(slot);
    Closure::once(move || run_slot(&slot))
}

/// Run the task on a zero-delay timer when a browser API refuses it.
fn degrade(api: &'static str, error: BrowserError, slot: TaskSlot) -> ScheduledTask {
    log::warn!("{} unavailable ({}), using a timer", api, error);
    BrowserTimers.after(0, Box::new(move || run_slot(&slot)))
}

// -----------------------------------------------------------------------------
// Frames
// -----------------------------------------------------------------------------

/// `requestAnimationFrame` based frame source.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

impl FrameSource for BrowserFrames {
    fn next_frame(&self, task: Task) -> ScheduledTask {
        let slot = slot(task);
        let Some(window) = web_sys::window() else {
            return degrade("requestAnimationFrame", BrowserError::NoWindow, slot);
        };

        let closure = slot_closure(&slot);
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => ScheduledTask::new(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
                drop(closure);
            }),
            Err(e) => degrade(
                "requestAnimationFrame",
                BrowserError::js("requestAnimationFrame", e),
                slot,
            ),
        }
    }
}

// -----------------------------------------------------------------------------
// Timers
// -----------------------------------------------------------------------------

/// `setTimeout` based timer source.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerSource for BrowserTimers {
    fn after(&self, delay_ms: u32, task: Task) -> ScheduledTask {
        // gloo's Timeout clears itself on drop.
        let timeout = Timeout::new(delay_ms, task);
        ScheduledTask::new(move || drop(timeout))
    }
}

// -----------------------------------------------------------------------------
// Idle
// -----------------------------------------------------------------------------

/// `requestIdleCallback` based idle source with a timeout ceiling.
#[derive(Clone, Copy, Debug)]
pub struct NativeIdle {
    timeout_ms: u32,
}

impl NativeIdle {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl IdleSource for NativeIdle {
    fn when_idle(&self, task: Task) -> ScheduledTask {
        let slot = slot(task);
        let Some(window) = web_sys::window() else {
            return degrade("requestIdleCallback", BrowserError::NoWindow, slot);
        };

        let options = IdleRequestOptions::new();
        options.set_timeout(self.timeout_ms);

        let closure = slot_closure(&slot);
        match window.request_idle_callback_with_options(closure.as_ref().unchecked_ref(), &options)
        {
            Ok(id) => ScheduledTask::new(move || {
                if let Some(window) = web_sys::window() {
                    window.cancel_idle_callback(id);
                }
                drop(closure);
            }),
            Err(e) => degrade(
                "requestIdleCallback",
                BrowserError::js("requestIdleCallback", e),
                slot,
            ),
        }
    }
}

/// Whether the browser exposes `requestIdleCallback`.
pub fn supports_idle_detection() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("requestIdleCallback"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Pick the idle source once, at startup.
pub fn idle_source(config: &StagingConfig) -> Box<dyn IdleSource> {
    if supports_idle_detection() {
        log::debug!("Idle detection: requestIdleCallback ({}ms ceiling)", config.idle_timeout_ms);
        Box::new(NativeIdle::new(config.idle_timeout_ms))
    } else {
        log::debug!("Idle detection: {}ms timer fallback", config.idle_fallback_ms);
        Box::new(TimerIdle::new(BrowserTimers, config.idle_fallback_ms))
    }
}
