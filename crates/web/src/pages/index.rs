// =============================================================================
// OffGriid Web - Landing Page
// =============================================================================
// Everything below the hero is gated on the activation stage:
//   Initial  -> hero, #about anchor
//   Painted  -> navigation
//   Idle     -> about, footer, contact modal (while open)
//   Idle + background delay -> canvas background
// =============================================================================

use leptos::prelude::*;

use crate::components::{About, Background, ContactModal, Footer, Hero, Navigation};
use crate::staging::{use_stage_delay, Stage};
use crate::state::AppState;

/// The single landing page.
#[component]
pub fn LandingPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let stage = app_state.stage;
    let show_background = use_stage_delay(stage, Stage::Idle, app_state.staging.background_delay_ms);

    let painted = {
        let app_state = app_state.clone();
        move || app_state.reached(Stage::Painted)
    };
    let idle = {
        let app_state = app_state.clone();
        move || app_state.reached(Stage::Idle)
    };
    let contact_open = app_state.contact_open;

    let on_contact = {
        let app_state = app_state.clone();
        Callback::new(move |_: ()| app_state.open_contact())
    };

    view! {
        <main class="landing">
            <Hero />

            // Anchor target that exists before the about section mounts.
            <div id="about" class="anchor" aria-hidden="true"></div>

            <Show when=painted>
                <Navigation on_contact=on_contact />
            </Show>

            <Show when=move || show_background.get()>
                <Background />
            </Show>

            <Show when=idle.clone()>
                <About />
                <Footer />
            </Show>

            <Show when=move || idle() && contact_open.get()>
                <ContactModal />
            </Show>
        </main>
    }
}
