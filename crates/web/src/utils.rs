// =============================================================================
// OffGriid Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Clipboard
// 3. Time & Format Utilities
// =============================================================================

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::error::BrowserError;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

/// Navigate to a URL, handing non-http schemes to the platform handler.
pub fn navigate_to(url: &str) -> Result<(), BrowserError> {
    window()?
        .location()
        .set_href(url)
        .map_err(|e| BrowserError::js("location.href", e))
}

/// Smooth-scroll the page back to the top.
pub fn scroll_to_top() {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// -----------------------------------------------------------------------------
// 2. Clipboard
// -----------------------------------------------------------------------------

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), BrowserError> {
    let navigator = window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| BrowserError::js("navigator.clipboard", e))?;
    if clipboard.is_undefined() {
        return Err(BrowserError::Api {
            api: "navigator.clipboard",
            message: "not supported".to_string(),
        });
    }

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .and_then(|f| f.dyn_into::<Function>())
        .map_err(|e| BrowserError::js("clipboard.writeText", e))?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .and_then(|p| p.dyn_into::<Promise>())
        .map_err(|e| BrowserError::js("clipboard.writeText", e))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| BrowserError::js("clipboard.writeText", e))
}

// -----------------------------------------------------------------------------
// 3. Time & Format Utilities
// -----------------------------------------------------------------------------

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a remaining wait for humans ("23h 5m", "12m", "40s").
pub fn format_wait(ms: i64) -> String {
    const SECOND: i64 = 1_000;

    // Round up before picking a unit so 59.9s reads "1m", not "60s".
    let seconds = (ms.max(0).saturating_add(SECOND - 1) / SECOND).max(1);
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    let minutes = (seconds + 59) / 60;
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Zero-padded two digit step label ("01", "02").
pub fn step_label(step: u32) -> String {
    format!("{:02}", step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wait() {
        assert_eq!(format_wait(23 * 60 * 60 * 1000 + 5 * 60 * 1000), "23h 5m");
        assert_eq!(format_wait(60 * 60 * 1000), "1h 0m");
        assert_eq!(format_wait(11 * 60 * 1000 + 1), "12m");
        assert_eq!(format_wait(40_000), "40s");
        assert_eq!(format_wait(1), "1s");
        assert_eq!(format_wait(-5), "1s");
    }

    #[test]
    fn test_format_wait_unit_boundaries() {
        assert_eq!(format_wait(59_000), "59s");
        assert_eq!(format_wait(59_999), "1m");
        assert_eq!(format_wait(60 * 60 * 1000 - 60 * 1000), "59m");
        assert_eq!(format_wait(3_599_999), "1h 0m");
        assert_eq!(format_wait(60 * 60 * 1000 + 1), "1h 1m");
    }

    #[test]
    fn test_step_label() {
        assert_eq!(step_label(1), "01");
        assert_eq!(step_label(12), "12");
    }
}
