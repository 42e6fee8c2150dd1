// =============================================================================
// OffGriid Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Toaster;
use crate::config::StagingConfig;
use crate::pages::{LandingPage, NotFoundPage};
use crate::staging::{use_stage, Stage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The scheduler lives as long as the root owner.
    let staging = StagingConfig::default();
    let stage = use_stage(staging);

    let app_state = AppState::new(stage, staging);
    log::debug!("Environment: {:?}", app_state.environment);
    provide_context(app_state);

    let idle = move || stage.get() >= Stage::Idle;

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Title text="OffGriid | Offline-first mesh messaging" />

        <Router>
            // Unknown paths render nothing until the page is idle.
            <Routes fallback=move || view! {
                <Show when=idle>
                    <NotFoundPage />
                </Show>
            }>
                <Route path=path!("/") view=LandingPage />
            </Routes>

            <Show when=idle>
                <Toaster />
            </Show>
        </Router>
    }
}
