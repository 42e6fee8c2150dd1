// =============================================================================
// OffGriid Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        log::warn!(
            "404: user attempted to access non-existent route {}",
            location.pathname.get()
        );
    });

    view! {
        <main class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Oops! Page not found"</h1>
                <a href="/" class="btn btn-primary">
                    "Return to Home"
                </a>
            </div>
        </main>
    }
}
