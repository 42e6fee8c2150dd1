// =============================================================================
// OffGriid Web - Scroll Reveal
// =============================================================================
// One-shot visibility flags driven by IntersectionObserver.
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::BrowserError;

const THRESHOLD: f64 = 0.15;
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Observer and the callback it holds; disconnects when dropped.
struct Watch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch(element: &web_sys::Element, visible: RwSignal<bool>) -> Result<Watch, BrowserError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if hit {
                let _ = visible.try_set(true);
                // Reveals never reverse.
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| BrowserError::js("IntersectionObserver", e))?;
    observer.observe(element);

    Ok(Watch {
        observer,
        _callback: callback,
    })
}

/// Visibility flag for the element behind `node`, set once it scrolls into view.
///
/// Without IntersectionObserver support the element is shown immediately.
pub fn use_reveal(node: NodeRef<Div>) -> ReadSignal<bool> {
    let visible = RwSignal::new(false);
    let active = StoredValue::new_local(None::<Watch>);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if active.with_value(|w| w.is_some()) || visible.get_untracked() {
            return;
        }
        match watch(&element, visible) {
            Ok(w) => active.set_value(Some(w)),
            Err(e) => {
                log::warn!("Scroll reveal disabled: {}", e);
                visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        active.update_value(|w| {
            w.take();
        });
    });

    visible.read_only()
}
