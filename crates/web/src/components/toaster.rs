// =============================================================================
// OffGriid Web - Toaster
// =============================================================================

use leptos::prelude::*;

use crate::components::common::CloseIcon;
use crate::services::toast::{Toast, ToastVariant};
use crate::state::AppState;

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    }
}

/// Renders the global toast queue in the bottom corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let queue = app_state.toasts;

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.variant)>
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="toast-description">{d}</p> })}
                            </div>
                            <button
                                class="icon-btn toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| queue.update(|q| q.dismiss(id))
                            >
                                <CloseIcon />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
